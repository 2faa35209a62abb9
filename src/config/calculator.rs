use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};

pub const DEFAULT_SEPARATOR_WIDTH: usize = 50;
pub const DEFAULT_LABEL_WIDTH: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// `=` 分隔線長度
    pub separator_width: usize,
    /// Price / Quantity / TOTAL 標籤欄寬
    pub label_width: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("separator_width", self.separator_width, 1)?;
        validate_positive_number("label_width", self.label_width, 1)?;
        Ok(())
    }
}
