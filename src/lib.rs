pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{Console, TextFileStore};
pub use config::{CalculatorConfig, MovieGuideConfig};
pub use core::{calculator::CalculatorSession, movie_guide::MovieGuide};
pub use utils::error::{AppError, Result};
