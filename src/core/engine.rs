use crate::core::encoder::BarcodeEncoder;
use crate::core::{EncodeRequest, Renderer, Result, Symbology};

/// Encodes a request and hands the result to a renderer.
pub struct LabelEngine<R: Renderer> {
    encoder: BarcodeEncoder,
    renderer: R,
    strict_checksum: bool,
    pad_itf: bool,
}

impl<R: Renderer> LabelEngine<R> {
    pub fn new(encoder: BarcodeEncoder, renderer: R) -> Self {
        Self {
            encoder,
            renderer,
            strict_checksum: false,
            pad_itf: false,
        }
    }

    /// 校驗碼不符時拒絕輸出
    pub fn with_strict_checksum(mut self, strict: bool) -> Self {
        self.strict_checksum = strict;
        self
    }

    /// 奇數位數的 ITF 內容自動補零
    pub fn with_itf_padding(mut self, pad: bool) -> Self {
        self.pad_itf = pad;
        self
    }

    pub fn run(&self, request: &EncodeRequest) -> Result<R::Output> {
        tracing::info!("Encoding {} payload {}", request.symbology, request.payload);

        let payload = if self.pad_itf && request.symbology == Symbology::Itf {
            crate::core::checksum::pad_even(&request.payload)
        } else {
            request.payload.clone()
        };

        let encoded = self.encoder.encode(request.symbology, &payload)?;
        let encoded = if self.strict_checksum {
            encoded.into_strict()?
        } else {
            encoded
        };

        tracing::info!(
            "Encoded {} elements ({} modules)",
            encoded.sequence.len(),
            encoded.sequence.total_modules()
        );
        self.renderer.render(&encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::BitsRenderer;
    use crate::utils::error::BarcodeError;

    fn request(symbology: Symbology, payload: &str) -> EncodeRequest {
        EncodeRequest {
            symbology,
            payload: payload.to_string(),
        }
    }

    #[test]
    fn test_padding_applies_to_itf_only() {
        let engine = LabelEngine::new(BarcodeEncoder::new(0), BitsRenderer).with_itf_padding(true);
        let padded = engine.run(&request(Symbology::Itf, "123")).unwrap();
        let explicit = engine.run(&request(Symbology::Itf, "0123")).unwrap();
        assert_eq!(padded, explicit);

        assert!(matches!(
            engine.run(&request(Symbology::Ean8, "9638507")),
            Err(BarcodeError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_without_padding_odd_itf_fails() {
        let engine = LabelEngine::new(BarcodeEncoder::default(), BitsRenderer);
        assert!(matches!(
            engine.run(&request(Symbology::Itf, "123")),
            Err(BarcodeError::OddLength { length: 3 })
        ));
    }

    #[test]
    fn test_strict_checksum() {
        let lenient = LabelEngine::new(BarcodeEncoder::default(), BitsRenderer);
        assert!(lenient.run(&request(Symbology::Ean13, "4006381333937")).is_ok());

        let strict = LabelEngine::new(BarcodeEncoder::default(), BitsRenderer)
            .with_strict_checksum(true);
        assert!(matches!(
            strict.run(&request(Symbology::Ean13, "4006381333937")),
            Err(BarcodeError::ChecksumMismatch {
                expected: 1,
                found: 7
            })
        ));
        assert!(strict.run(&request(Symbology::Ean13, "4006381333931")).is_ok());
    }
}
