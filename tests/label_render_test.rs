use anyhow::Result;
use barcode_label::utils::validation::Validate;
use barcode_label::{
    layout, BarcodeEncoder, BarcodeError, EncodeRequest, JsonRenderer, LabelConfig, LabelEngine,
    LocalOutput, RenderSettings, Renderer, SvgRenderer, Symbology,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// 從設定檔到 SVG 檔案的完整流程
#[test]
fn test_config_file_to_svg_label() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(
        br#"
[encoder]
quiet_zone = 10
pad_itf = true

[render]
space_scale = 1.0
module_width = 1
bar_height = 40
show_text = false
"#,
    )?;

    let config = LabelConfig::from_file(config_file.path())?;
    config.validate()?;

    let engine = LabelEngine::new(
        BarcodeEncoder::new(config.quiet_zone()),
        SvgRenderer::from_settings(&config),
    )
    .with_itf_padding(config.encoder.pad_itf);

    let svg = engine.run(&EncodeRequest {
        symbology: Symbology::Itf,
        payload: "123".to_string(),
    })?;

    // "0123": 4 + 2*18 + 5 modules + 2 * 10 quiet zone
    assert!(svg.contains(r#"width="65""#));
    assert!(svg.contains(r#"height="40""#));

    let temp_dir = TempDir::new()?;
    let written = LocalOutput::new(temp_dir.path()).write_file("box/0123.svg", svg.as_bytes())?;
    assert_eq!(std::fs::read_to_string(written)?, svg);
    Ok(())
}

#[test]
fn test_space_scale_only_moves_bars_after_spaces() -> Result<()> {
    let encoded = BarcodeEncoder::new(5).encode(Symbology::Ean8, "96385074")?;
    let neutral = layout(&encoded.sequence, 1.0)?;
    let stretched = layout(&encoded.sequence, 1.2)?;

    assert_eq!(neutral.bars.len(), stretched.bars.len());
    assert_eq!(neutral.total_width, 5.0 + 67.0 + 5.0);
    assert!(stretched.total_width > neutral.total_width);
    // 第一根條不受影響，寬度也不變
    assert_eq!(neutral.bars[0], stretched.bars[0]);
    for (a, b) in neutral.bars.iter().zip(stretched.bars.iter()) {
        assert_eq!(a.width, b.width);
        assert!(b.x >= a.x);
    }
    Ok(())
}

#[test]
fn test_strict_config_blocks_bad_check_digit() -> Result<()> {
    let config = LabelConfig::from_toml_str(
        r#"
[encoder]
strict_checksum = true
"#,
    )?;

    let engine = LabelEngine::new(BarcodeEncoder::new(config.quiet_zone()), JsonRenderer::default())
        .with_strict_checksum(config.encoder.strict_checksum);
    let result = engine.run(&EncodeRequest {
        symbology: Symbology::Ean13,
        payload: "4006381333932".to_string(),
    });

    match result {
        Err(BarcodeError::ChecksumMismatch { expected, found }) => {
            assert_eq!(expected, 1);
            assert_eq!(found, 2);
        }
        other => panic!("expected checksum mismatch, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_json_request_round_trip_through_renderer() -> Result<()> {
    let request: EncodeRequest =
        serde_json::from_str(r#"{ "symbology": "ITF", "payload": "1234" }"#)?;
    let encoded = BarcodeEncoder::default().encode_request(&request)?;
    let json = JsonRenderer::default().render(&encoded)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    assert_eq!(value["sequence"]["elements"].as_array().map(Vec::len), Some(27));
    assert_eq!(value["sequence"]["elements"][0]["kind"], "bar");
    assert_eq!(value["sequence"]["elements"][1]["kind"], "space");
    assert!(value.get("checksumMismatch").is_none());
    Ok(())
}
