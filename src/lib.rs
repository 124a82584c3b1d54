pub mod error;
pub mod geometry;
pub mod mapping;
pub mod math;

pub use error::{C1MapError, Result};
