// Generated models, one file per schema definition.

pub mod a;
pub use a::*;
