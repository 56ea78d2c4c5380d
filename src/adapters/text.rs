use crate::core::{Encoded, Renderer, Result};

/// Serializes the full [`Encoded`] value, i.e. the `{ elements, quietZone }`
/// sequence plus any checksum warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    type Output = String;

    fn render(&self, encoded: &Encoded) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(encoded)?
        } else {
            serde_json::to_string(encoded)?
        };
        Ok(json)
    }
}

/// One character per module, quiet zone included, e.g. `0000101...1010000`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitsRenderer;

impl Renderer for BitsRenderer {
    type Output = String;

    fn render(&self, encoded: &Encoded) -> Result<String> {
        let quiet = "0".repeat(encoded.sequence.quiet_zone as usize);
        Ok(format!("{}{}{}", quiet, encoded.sequence.bits(), quiet))
    }
}
