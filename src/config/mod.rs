pub mod calculator;
pub mod movie_guide;

pub use calculator::CalculatorConfig;
pub use movie_guide::MovieGuideConfig;
