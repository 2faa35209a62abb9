// Domain layer: line items, the movie list and the storage port. No IO here.

pub mod model;
pub mod ports;
