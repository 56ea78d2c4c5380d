use crate::config::toml_config::LabelConfig;
use crate::core::Symbology;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "barcode-label")]
#[command(about = "Encode ITF, EAN-13 and EAN-8 barcodes for printable labels")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Encode a payload and print or save the result
    Encode(EncodeArgs),
    /// Print the Mod10 (1-3) check digit and label legend for a number
    CheckDigit {
        /// Box number, digits only
        number: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Svg,
    Bits,
}

#[derive(Debug, Clone, clap::Args)]
pub struct EncodeArgs {
    /// itf, ean13 or ean8
    #[arg(short, long)]
    pub symbology: Symbology,

    #[arg(short, long)]
    pub payload: String,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub quiet_zone: Option<u32>,

    #[arg(long)]
    pub space_scale: Option<f64>,

    /// Fail when the EAN-13 check digit does not match
    #[arg(long)]
    pub strict: bool,

    /// Prepend "0" to odd-length ITF payloads
    #[arg(long)]
    pub pad: bool,
}

impl EncodeArgs {
    /// 命令列參數覆蓋設定檔的值
    pub fn apply_overrides(&self, config: &mut LabelConfig) {
        if let Some(quiet_zone) = self.quiet_zone {
            config.encoder.quiet_zone = quiet_zone;
        }
        if let Some(space_scale) = self.space_scale {
            config.render.space_scale = space_scale;
        }
        if self.strict {
            config.encoder.strict_checksum = true;
        }
        if self.pad {
            config.encoder.pad_itf = true;
        }
    }
}
