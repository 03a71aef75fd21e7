pub mod error;
pub mod settings;

pub use error::*;
pub use settings::*;
