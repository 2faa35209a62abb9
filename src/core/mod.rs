pub mod calculator;
pub mod movie_guide;
pub mod prompt;

pub use crate::domain::model::{LineItem, MovieList};
pub use crate::domain::ports::{InitOutcome, TitleStore};
pub use crate::utils::error::Result;
