use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarcodeError {
    #[error("Invalid payload '{payload}': character '{found}' at position {position} is not a digit")]
    InvalidPayload {
        payload: String,
        position: usize,
        found: char,
    },

    #[error("Empty payload: at least one digit is required")]
    EmptyPayload,

    #[error("ITF payload has an odd number of digits ({length}); pad it to an even length")]
    OddLength { length: usize },

    #[error("{symbology} payload must be exactly {expected} digits, got {actual}")]
    InvalidLength {
        symbology: String,
        expected: usize,
        actual: usize,
    },

    #[error("Check digit mismatch: payload carries {found}, computed {expected}")]
    ChecksumMismatch { expected: u8, found: u8 },

    #[error("Unknown symbology: {name}")]
    UnknownSymbology { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入的條碼內容有誤
    Payload,
    /// 設定檔或命令列參數有誤
    Configuration,
    /// 檔案讀寫或輸出序列化
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BarcodeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BarcodeError::InvalidPayload { .. }
            | BarcodeError::EmptyPayload
            | BarcodeError::OddLength { .. }
            | BarcodeError::InvalidLength { .. }
            | BarcodeError::ChecksumMismatch { .. }
            | BarcodeError::UnknownSymbology { .. } => ErrorCategory::Payload,
            BarcodeError::ConfigError { .. }
            | BarcodeError::InvalidConfigValueError { .. }
            | BarcodeError::ConfigParseError { .. } => ErrorCategory::Configuration,
            BarcodeError::IoError(_) | BarcodeError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 校驗碼不符時仍可產生條碼，只有嚴格模式才會回報
            BarcodeError::ChecksumMismatch { .. } => ErrorSeverity::Medium,
            BarcodeError::IoError(_) | BarcodeError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BarcodeError::InvalidPayload { .. } | BarcodeError::EmptyPayload => {
                "Use only the digits 0-9 in the payload".to_string()
            }
            BarcodeError::OddLength { .. } => {
                "Prepend a leading \"0\" (or pass --pad) so the digits form pairs".to_string()
            }
            BarcodeError::InvalidLength {
                symbology,
                expected,
                ..
            } => format!(
                "{} needs exactly {} digits including the check digit",
                symbology, expected
            ),
            BarcodeError::ChecksumMismatch { expected, .. } => format!(
                "Replace the last digit with {} or disable strict checksum mode",
                expected
            ),
            BarcodeError::UnknownSymbology { .. } => {
                "Choose one of: itf, ean13, ean8".to_string()
            }
            BarcodeError::ConfigError { .. }
            | BarcodeError::InvalidConfigValueError { .. }
            | BarcodeError::ConfigParseError { .. } => {
                "Check the configuration file and command-line flags".to_string()
            }
            BarcodeError::IoError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
            BarcodeError::SerializationError(_) => {
                "Report this as a bug; the encoded output could not be serialized".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Payload => format!("Cannot encode barcode: {}", self),
            ErrorCategory::Configuration => format!("Invalid settings: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BarcodeError>;
