use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid format for {field}: '{value}' is not a valid {expected}")]
    InvalidFormatError {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Value out of range for {field}: '{value}' ({reason})")]
    OutOfRangeError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Empty value for {field}")]
    EmptyValueError { field: String },

    #[error("Index {index} out of range 1..={len}")]
    IndexOutOfRangeError { index: i64, len: usize },

    #[error("Storage file not found: {path}")]
    StorageNotFoundError { path: String },

    #[error("Storage read failed for {path}: {source}")]
    StorageReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage write failed for {path}: {source}")]
    StorageWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Console IO error: {0}")]
    ConsoleError(#[from] std::io::Error),

    #[error("Standard input was closed")]
    InputClosedError,

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Storage,
    Console,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 回報後繼續執行
    Recoverable,
    /// 變更可能遺失或無法繼續互動
    Fatal,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::InvalidFormatError { .. }
            | AppError::OutOfRangeError { .. }
            | AppError::EmptyValueError { .. }
            | AppError::IndexOutOfRangeError { .. } => ErrorCategory::Input,
            AppError::StorageNotFoundError { .. }
            | AppError::StorageReadError { .. }
            | AppError::StorageWriteError { .. } => ErrorCategory::Storage,
            AppError::ConsoleError(_) | AppError::InputClosedError => ErrorCategory::Console,
            AppError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::InvalidFormatError { .. }
            | AppError::OutOfRangeError { .. }
            | AppError::EmptyValueError { .. }
            | AppError::IndexOutOfRangeError { .. }
            | AppError::StorageNotFoundError { .. }
            | AppError::StorageReadError { .. } => ErrorSeverity::Recoverable,
            AppError::StorageWriteError { .. }
            | AppError::ConsoleError(_)
            | AppError::InputClosedError
            | AppError::InvalidConfigValueError { .. } => ErrorSeverity::Fatal,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Recoverable
    }

    /// 顯示給使用者的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::InvalidFormatError { field, .. } if field == "price" => {
                "ERROR: Invalid format. Price must be a number (float). Please try again.".to_string()
            }
            AppError::InvalidFormatError { field, .. } if field == "quantity" => {
                "ERROR: Invalid format. Quantity must be a whole number (integer). Please try again."
                    .to_string()
            }
            AppError::InvalidFormatError { field, .. } if field == "choice" => {
                "Invalid input. Please enter 'y' for yes or 'n' for no.".to_string()
            }
            AppError::InvalidFormatError { .. } => {
                "ERROR: Invalid input. Please enter a whole number.".to_string()
            }
            AppError::OutOfRangeError { field, .. } if field == "price" => {
                "ERROR: Price cannot be negative. Please try again.".to_string()
            }
            AppError::OutOfRangeError { field, .. } if field == "quantity" => {
                "ERROR: Quantity must be a positive whole number. Please try again.".to_string()
            }
            AppError::OutOfRangeError { field, reason, .. } => {
                format!("ERROR: Invalid value for {}: {}.", field, reason)
            }
            AppError::EmptyValueError { field } if field == "title" => {
                "ERROR: Movie title cannot be empty.".to_string()
            }
            AppError::EmptyValueError { field } => format!("ERROR: {} cannot be empty.", field),
            AppError::IndexOutOfRangeError { len, .. } => format!(
                "ERROR: Invalid number entered. Please enter a number between 1 and {}.",
                len
            ),
            AppError::StorageNotFoundError { path } => {
                format!("ERROR: File '{}' not found. Initializing empty list.", path)
            }
            AppError::StorageReadError { path, .. } => {
                format!("ERROR: Could not read file '{}'. Returning empty list.", path)
            }
            AppError::StorageWriteError { path, .. } => format!(
                "FATAL ERROR: Could not write data to file '{}'. Changes may be lost.",
                path
            ),
            AppError::ConsoleError(e) => format!("FATAL ERROR: Console failure: {}", e),
            AppError::InputClosedError => "FATAL ERROR: Input stream closed.".to_string(),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("FATAL ERROR: Invalid configuration for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Re-enter the value in the requested format",
            ErrorCategory::Storage => match self {
                AppError::StorageWriteError { .. } => {
                    "Check that the file is writable and that the disk is not full"
                }
                _ => "Check that the file exists and is readable",
            },
            ErrorCategory::Console => "Run the program from an interactive terminal",
            ErrorCategory::Config => "Fix the configuration value and restart",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
