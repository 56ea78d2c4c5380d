use anyhow::Context;
use barcode_label::config::cli::{Command, EncodeArgs, OutputFormat};
use barcode_label::utils::error::ErrorSeverity;
use barcode_label::utils::{logger, validation::Validate};
use barcode_label::{
    box_label_legend, compute_mod10_weighted13, BarcodeEncoder, BarcodeError, BitsRenderer,
    CliConfig, EncodeRequest, JsonRenderer, LabelConfig, LabelEngine, LocalOutput, Renderer,
    SvgRenderer,
};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let result = match &config.command {
        Command::Encode(args) => run_encode(args),
        Command::CheckDigit { number } => run_check_digit(number),
    };

    if let Err(e) = result {
        report_and_exit(&e);
    }

    Ok(())
}

fn report_and_exit(e: &anyhow::Error) -> ! {
    match e.downcast_ref::<BarcodeError>() {
        Some(err) => {
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                err.category(),
                err.severity()
            );
            eprintln!("❌ {}", err.user_friendly_message());
            eprintln!("💡 Suggestion: {}", err.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match err.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
        None => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(args: &EncodeArgs) -> anyhow::Result<LabelConfig> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            LabelConfig::from_file(path)?
        }
        None => LabelConfig::default(),
    };

    // 應用命令列覆蓋設定
    args.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn render_with<R: Renderer<Output = String>>(
    config: &LabelConfig,
    renderer: R,
    request: &EncodeRequest,
) -> barcode_label::Result<String> {
    LabelEngine::new(BarcodeEncoder::new(config.encoder.quiet_zone), renderer)
        .with_strict_checksum(config.encoder.strict_checksum)
        .with_itf_padding(config.encoder.pad_itf)
        .run(request)
}

fn run_encode(args: &EncodeArgs) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let request = EncodeRequest {
        symbology: args.symbology,
        payload: args.payload.clone(),
    };

    let output = match args.format {
        OutputFormat::Json => render_with(&config, JsonRenderer { pretty: true }, &request)?,
        OutputFormat::Svg => render_with(&config, SvgRenderer::from_settings(&config), &request)?,
        OutputFormat::Bits => render_with(&config, BitsRenderer, &request)?,
    };

    match &args.output {
        Some(path) => {
            let written = LocalOutput::new(".")
                .write_file(path, output.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("✅ Barcode saved to: {}", written.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

fn run_check_digit(number: &str) -> anyhow::Result<()> {
    let check = compute_mod10_weighted13(number)?;
    let legend = box_label_legend(number)?;
    tracing::debug!("Mod10 (1-3) digit for {} is {}", number, check);
    println!("{}", check);
    println!("{}", legend);
    Ok(())
}
