use crate::core::tables::{ITF_NARROW, ITF_PATTERNS, ITF_START, ITF_STOP, ITF_WIDE};
use crate::domain::model::{Element, ModuleSequence};
use crate::utils::error::{BarcodeError, Result};
use crate::utils::validation::validate_digits;

fn width(wide: bool) -> u8 {
    if wide {
        ITF_WIDE
    } else {
        ITF_NARROW
    }
}

/// Interleaved 2 of 5. The payload must already have an even number of
/// digits; no check digit is added.
pub fn encode_itf(payload: &str, quiet_zone: u32) -> Result<ModuleSequence> {
    let digits = validate_digits(payload)?;
    if digits.len() % 2 != 0 {
        return Err(BarcodeError::OddLength {
            length: digits.len(),
        });
    }

    let mut sequence = ModuleSequence::new(quiet_zone);
    sequence.elements.reserve(digits.len() * 5 + ITF_START.len() + ITF_STOP.len());

    for (i, w) in ITF_START.iter().enumerate() {
        let element = if i % 2 == 0 {
            Element::bar(*w)
        } else {
            Element::space(*w)
        };
        sequence.push(element);
    }

    for pair in digits.chunks_exact(2) {
        // 第一個數字決定黑條，第二個數字決定空白
        let bars = &ITF_PATTERNS[pair[0] as usize];
        let spaces = &ITF_PATTERNS[pair[1] as usize];
        for (bar, space) in bars.iter().zip(spaces.iter()) {
            sequence.push(Element::bar(width(*bar)));
            sequence.push(Element::space(width(*space)));
        }
    }

    sequence.push(Element::bar(ITF_STOP[0]));
    sequence.push(Element::space(ITF_STOP[1]));
    sequence.push(Element::bar(ITF_STOP[2]));

    tracing::debug!(
        "ITF encoded {} digits into {} elements",
        digits.len(),
        sequence.len()
    );
    Ok(sequence)
}
