pub mod engine;
pub mod spec;


pub use engine::{MaimaiPlates, PlateObject};
pub use spec::{PlateKind, PlateSpec, in_era};
