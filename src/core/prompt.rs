use std::io::{BufRead, Write};

use crate::adapters::Console;
use crate::utils::error::Result;
use crate::utils::validation::{parse_choice, parse_price, parse_quantity, Choice};

/// 重複提示直到 `parse` 成功；可恢復的錯誤顯示後重新提示，其餘錯誤往上傳
pub fn prompt_until_valid<R, W, T, F>(
    console: &mut Console<R, W>,
    text: &str,
    parse: F,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T>,
{
    loop {
        let raw = console.prompt(text)?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_recoverable() => {
                tracing::debug!("Rejected input {:?}: {}", raw, e);
                console.println(&e.user_friendly_message())?;
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn prompt_price<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<f64> {
    prompt_until_valid(console, "Enter price: ", parse_price)
}

pub fn prompt_quantity<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<u64> {
    prompt_until_valid(console, "Enter quantity: ", parse_quantity)
}

pub fn prompt_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    text: &str,
) -> Result<Choice> {
    prompt_until_valid(console, text, parse_choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;

    #[test]
    fn test_price_reprompts_until_valid() {
        let mut out = Vec::new();
        let mut console = Console::new("abc\n-5\n12.50\n".as_bytes(), &mut out);

        assert_eq!(prompt_price(&mut console).unwrap(), 12.5);
        drop(console);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Enter price: ").count(), 3);
        assert!(text.contains("Price must be a number (float)"));
        assert!(text.contains("Price cannot be negative"));
    }

    #[test]
    fn test_quantity_rejects_zero_and_fractions() {
        let mut out = Vec::new();
        let mut console = Console::new("0\n1.5\n-2\n4\n".as_bytes(), &mut out);

        assert_eq!(prompt_quantity(&mut console).unwrap(), 4);
        drop(console);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Enter quantity: ").count(), 4);
        assert_eq!(
            text.matches("ERROR: Quantity must be a positive whole number.").count(),
            2
        );
    }

    #[test]
    fn test_choice_never_returns_on_invalid_input() {
        let mut console = Console::new("maybe\nyes\n".as_bytes(), Vec::new());

        // 輸入用完前都沒有接受任何回答
        assert!(matches!(
            prompt_choice(&mut console, "Continue? "),
            Err(AppError::InputClosedError)
        ));
    }
}
