// Domain layer: the model contract and the schema type mapping it is built on.

pub mod model;
pub mod schema;
