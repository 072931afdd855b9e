pub mod character;
pub mod error;
pub mod settings;

pub use character::*;
pub use error::*;
pub use settings::*;
