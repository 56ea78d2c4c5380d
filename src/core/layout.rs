use crate::domain::model::{BarLayout, BarPlacement, ModuleSequence};
use crate::utils::error::Result;
use crate::utils::validation::validate_range;

pub const NEUTRAL_SPACE_SCALE: f64 = 1.0;
pub const MAX_SPACE_SCALE: f64 = 4.0;

/// Positions every bar along the x axis, in module units.
///
/// Bars keep their nominal width while spaces are multiplied by
/// `space_scale`, which widens the gaps to offset ink spread on thermal
/// and inkjet labels. The quiet zone sits before the first element and after
/// the last and is never scaled.
pub fn layout(sequence: &ModuleSequence, space_scale: f64) -> Result<BarLayout> {
    validate_range(
        "space_scale",
        space_scale,
        NEUTRAL_SPACE_SCALE,
        MAX_SPACE_SCALE,
    )?;

    let quiet = f64::from(sequence.quiet_zone);
    let mut x = quiet;
    let mut bars = Vec::with_capacity(sequence.bar_count());

    for element in &sequence.elements {
        let nominal = f64::from(element.width);
        if element.is_bar() {
            bars.push(BarPlacement {
                x,
                width: nominal,
            });
            x += nominal;
        } else {
            x += nominal * space_scale;
        }
    }

    Ok(BarLayout {
        bars,
        total_width: x + quiet,
    })
}
