use crate::core::{ean, itf};
use crate::domain::model::{EncodeRequest, Encoded, ModuleSequence, Symbology};
use crate::utils::error::Result;

pub const DEFAULT_QUIET_ZONE: u32 = 10;

/// Stateless encoder front door. Holds only the quiet zone, so a single value
/// can be shared between threads and called once per label in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeEncoder {
    quiet_zone: u32,
}

impl Default for BarcodeEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_ZONE)
    }
}

impl BarcodeEncoder {
    pub fn new(quiet_zone: u32) -> Self {
        Self { quiet_zone }
    }

    pub fn quiet_zone(&self) -> u32 {
        self.quiet_zone
    }

    pub fn encode(&self, symbology: Symbology, payload: &str) -> Result<Encoded> {
        tracing::debug!("Encoding {} payload {}", symbology, payload);

        let (sequence, checksum_mismatch) = match symbology {
            Symbology::Itf => (itf::encode_itf(payload, self.quiet_zone)?, None),
            Symbology::Ean13 => ean::encode_ean13(payload, self.quiet_zone)?,
            Symbology::Ean8 => (ean::encode_ean8(payload, self.quiet_zone)?, None),
        };

        Ok(Encoded {
            symbology,
            payload: payload.to_string(),
            sequence,
            checksum_mismatch,
        })
    }

    pub fn encode_request(&self, request: &EncodeRequest) -> Result<Encoded> {
        self.encode(request.symbology, &request.payload)
    }

    pub fn encode_itf(&self, payload: &str) -> Result<ModuleSequence> {
        itf::encode_itf(payload, self.quiet_zone)
    }

    /// The checksum mismatch, if any, is available on the returned [`Encoded`].
    pub fn encode_ean13(&self, payload: &str) -> Result<Encoded> {
        self.encode(Symbology::Ean13, payload)
    }

    pub fn encode_ean8(&self, payload: &str) -> Result<ModuleSequence> {
        ean::encode_ean8(payload, self.quiet_zone)
    }
}
