use std::io::{BufRead, Write};

use crate::adapters::Console;
use crate::config::CalculatorConfig;
use crate::core::prompt::{prompt_choice, prompt_price, prompt_quantity};
use crate::domain::model::LineItem;
use crate::utils::error::Result;
use crate::utils::format::{format_currency, separator};
use crate::utils::validation::Choice;

pub const CONTINUE_PROMPT: &str = "Enter another line item? (y/n): ";

/// 價格 → 數量 → 顯示合計 → 是否繼續，直到回答 `n`
pub struct CalculatorSession {
    config: CalculatorConfig,
}

impl CalculatorSession {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// 回傳本次處理過的所有項目
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<Vec<LineItem>> {
        self.print_heading(console)?;

        let mut items = Vec::new();
        let mut choice = Choice::Yes;

        while choice == Choice::Yes {
            let price = prompt_price(console)?;
            let quantity = prompt_quantity(console)?;
            let item = LineItem::new(price, quantity);
            tracing::debug!(price, quantity, total = item.total(), "Line item computed");

            for line in self.render_line_item(&item) {
                console.println(&line)?;
            }
            items.push(item);

            choice = prompt_choice(console, CONTINUE_PROMPT)?;
        }

        console.println("\nProgram ended. Goodbye!")?;
        tracing::info!("Calculator finished after {} line items", items.len());
        Ok(items)
    }

    pub fn heading(&self) -> Vec<String> {
        let sep = separator(self.config.separator_width);
        vec![sep.clone(), "        LINE ITEM CALCULATOR".to_string(), sep]
    }

    pub fn render_line_item(&self, item: &LineItem) -> Vec<String> {
        let sep = separator(self.config.separator_width);
        let width = self.config.label_width;
        vec![
            sep.clone(),
            format!("{:<width$} {}", "Price:", format_currency(item.price)),
            format!("{:<width$} {}", "Quantity:", item.quantity),
            format!("{:<width$} {}", "TOTAL:", format_currency(item.total())),
            sep,
        ]
    }

    fn print_heading<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        for line in self.heading() {
            console.println(&line)?;
        }
        Ok(())
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}
