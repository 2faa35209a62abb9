use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 繼續提示的回答
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

pub const YES_TOKEN: &str = "y";
pub const NO_TOKEN: &str = "n";

/// 價格：非負實數
pub fn parse_price(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let price: f64 = match trimmed.parse() {
        Ok(value) => value,
        Err(_) => return Err(invalid_format("price", trimmed, "number (float)")),
    };

    // nan / inf 無法計算金額
    if !price.is_finite() {
        return Err(invalid_format("price", trimmed, "number (float)"));
    }

    if price < 0.0 {
        return Err(AppError::OutOfRangeError {
            field: "price".to_string(),
            value: trimmed.to_string(),
            reason: "price cannot be negative".to_string(),
        });
    }

    // -0 視為 0，避免顯示 "$-0.00"
    Ok(price + 0.0)
}

/// 數量：正整數
pub fn parse_quantity(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let quantity: i64 = trimmed
        .parse()
        .map_err(|_| invalid_format("quantity", trimmed, "whole number (integer)"))?;

    if quantity < 1 {
        return Err(AppError::OutOfRangeError {
            field: "quantity".to_string(),
            value: trimmed.to_string(),
            reason: "quantity must be a positive whole number".to_string(),
        });
    }

    Ok(quantity as u64)
}

pub fn parse_choice(input: &str) -> Result<Choice> {
    let normalized = input.trim().to_lowercase();
    match normalized.as_str() {
        YES_TOKEN => Ok(Choice::Yes),
        NO_TOKEN => Ok(Choice::No),
        _ => Err(invalid_format("choice", input.trim(), "'y' or 'n'")),
    }
}

/// 回傳去除前後空白的片名
pub fn validate_title(input: &str) -> Result<String> {
    validate_non_empty_string("title", input)?;
    Ok(input.trim().to_string())
}

/// 使用者輸入的 1-based 編號，需落在 `1..=len`
pub fn parse_position(input: &str, len: usize) -> Result<usize> {
    let trimmed = input.trim();
    let index: i64 = trimmed
        .parse()
        .map_err(|_| invalid_format("index", trimmed, "whole number"))?;

    if index < 1 || index as u64 > len as u64 {
        return Err(AppError::IndexOutOfRangeError { index, len });
    }

    Ok(index as usize)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::EmptyValueError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// 存檔格式一行一筆，片名不可含換行
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\n') || value.contains('\r') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot span multiple lines".to_string(),
        });
    }
    Ok(())
}

fn invalid_format(field: &str, value: &str, expected: &str) -> AppError {
    AppError::InvalidFormatError {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}
