use crate::utils::error::{BarcodeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 確認 payload 只包含 0-9 的數字，並回傳各位數值
pub fn validate_digits(payload: &str) -> Result<Vec<u8>> {
    if payload.is_empty() {
        return Err(BarcodeError::EmptyPayload);
    }

    payload
        .chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| BarcodeError::InvalidPayload {
                    payload: payload.to_string(),
                    position,
                    found: c,
                })
        })
        .collect()
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(BarcodeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 無法比較大小，這裡一併視為超出範圍
    if !(value >= min && value <= max) {
        return Err(BarcodeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
