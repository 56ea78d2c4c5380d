use crate::core::checksum::ean_check_digit;
use crate::core::tables::{
    EAN13_PARITY, EAN_END_GUARD, EAN_MIDDLE_GUARD, EAN_SET_A, EAN_SET_B, EAN_SET_C,
    EAN_START_GUARD,
};
use crate::domain::model::{ChecksumMismatch, ModuleSequence};
use crate::utils::error::{BarcodeError, Result};
use crate::utils::validation::validate_digits;

pub const EAN13_MODULES: usize = 95;
pub const EAN8_MODULES: usize = 67;

fn validate_length(payload: &str, expected: usize, symbology: &str) -> Result<Vec<u8>> {
    // 長度檢查先於字元檢查，"123" 應回報長度錯誤
    let length = payload.chars().count();
    if length != expected {
        return Err(BarcodeError::InvalidLength {
            symbology: symbology.to_string(),
            expected,
            actual: length,
        });
    }
    validate_digits(payload)
}

/// EAN-13. A wrong check digit does not stop encoding; the mismatch is
/// returned next to the sequence and logged.
pub fn encode_ean13(
    payload: &str,
    quiet_zone: u32,
) -> Result<(ModuleSequence, Option<ChecksumMismatch>)> {
    let digits = validate_length(payload, 13, "EAN-13")?;

    let expected = ean_check_digit(&digits[..12]);
    let mismatch = if expected != digits[12] {
        tracing::warn!(
            "EAN-13 check digit mismatch for {}: payload has {}, computed {}",
            payload,
            digits[12],
            expected
        );
        Some(ChecksumMismatch {
            expected,
            found: digits[12],
        })
    } else {
        None
    };

    let parity = EAN13_PARITY[digits[0] as usize];
    let mut bits = String::with_capacity(EAN13_MODULES);
    bits.push_str(EAN_START_GUARD);
    for (digit, set) in digits[1..7].iter().zip(parity.bytes()) {
        let pattern = if set == b'A' {
            EAN_SET_A[*digit as usize]
        } else {
            EAN_SET_B[*digit as usize]
        };
        bits.push_str(pattern);
    }
    bits.push_str(EAN_MIDDLE_GUARD);
    for digit in &digits[7..] {
        bits.push_str(EAN_SET_C[*digit as usize]);
    }
    bits.push_str(EAN_END_GUARD);

    let mut sequence = ModuleSequence::new(quiet_zone);
    sequence.push_bits(&bits);
    tracing::debug!("EAN-13 encoded {} with parity {}", payload, parity);
    Ok((sequence, mismatch))
}

/// EAN-8. Left half always uses set A, right half set C. The check digit is
/// not validated here.
pub fn encode_ean8(payload: &str, quiet_zone: u32) -> Result<ModuleSequence> {
    let digits = validate_length(payload, 8, "EAN-8")?;

    let mut bits = String::with_capacity(EAN8_MODULES);
    bits.push_str(EAN_START_GUARD);
    for digit in &digits[..4] {
        bits.push_str(EAN_SET_A[*digit as usize]);
    }
    bits.push_str(EAN_MIDDLE_GUARD);
    for digit in &digits[4..] {
        bits.push_str(EAN_SET_C[*digit as usize]);
    }
    bits.push_str(EAN_END_GUARD);

    let mut sequence = ModuleSequence::new(quiet_zone);
    sequence.push_bits(&bits);
    tracing::debug!("EAN-8 encoded {}", payload);
    Ok(sequence)
}
