//! Check digit algorithms.
//!
//! Two different weighted mod-10 schemes live here and must not be mixed up:
//!
//! * [`ean_check_digit`] is the EAN/UPC checksum embedded in the symbol. The
//!   digit next to the check digit gets weight 3 and weights alternate
//!   leftwards, which for 12 data digits means 1,3,1,3... from the left.
//! * [`compute_mod10_weighted13`] is the "Mod10 (1-3)" verification digit
//!   printed on box-label legends. Weight 1 goes on the rightmost digit of the
//!   number itself. It is never part of a barcode payload.

use crate::utils::error::{BarcodeError, Result};
use crate::utils::validation::validate_digits;

fn complement(sum: u32) -> u8 {
    ((10 - sum % 10) % 10) as u8
}

/// EAN/UPC check digit over the data digits (check digit excluded).
pub fn ean_check_digit(data: &[u8]) -> u8 {
    let sum: u32 = data
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    complement(sum)
}

/// Mod10 (1-3) legend digit. Weights alternate 1,3 starting from the
/// rightmost digit.
pub fn compute_mod10_weighted13(payload: &str) -> Result<u8> {
    let digits = validate_digits(payload)?;
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    Ok(complement(sum))
}

/// Printed legend for a box label: the number, a dash, then its Mod10 (1-3) digit.
pub fn box_label_legend(number: &str) -> Result<String> {
    let check = compute_mod10_weighted13(number)?;
    Ok(format!("{}-{}", number, check))
}

fn complete(payload: &str, data_len: usize, symbology: &str) -> Result<String> {
    let digits = validate_digits(payload)?;
    if digits.len() != data_len {
        return Err(BarcodeError::InvalidLength {
            symbology: symbology.to_string(),
            expected: data_len,
            actual: digits.len(),
        });
    }
    Ok(format!("{}{}", payload, ean_check_digit(&digits)))
}

/// Appends the check digit to 12 data digits.
pub fn complete_ean13(first12: &str) -> Result<String> {
    complete(first12, 12, "EAN-13 data")
}

/// Appends the check digit to 7 data digits.
pub fn complete_ean8(first7: &str) -> Result<String> {
    complete(first7, 7, "EAN-8 data")
}

/// Checks the last digit of a full 8-digit EAN-8 payload.
pub fn validate_ean8_check_digit(payload: &str) -> Result<()> {
    let digits = validate_digits(payload)?;
    if digits.len() != 8 {
        return Err(BarcodeError::InvalidLength {
            symbology: "EAN-8".to_string(),
            expected: 8,
            actual: digits.len(),
        });
    }
    let expected = ean_check_digit(&digits[..7]);
    if expected != digits[7] {
        return Err(BarcodeError::ChecksumMismatch {
            expected,
            found: digits[7],
        });
    }
    Ok(())
}

/// 奇數位數的 ITF 內容在前面補 "0"
pub fn pad_even(payload: &str) -> String {
    if payload.len() % 2 == 1 {
        format!("0{}", payload)
    } else {
        payload.to_string()
    }
}
