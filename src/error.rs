use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("No GFS data available for {date} cycle {cycle:02}Z f{forecast_hour:03}")]
    DataUnavailable {
        date: String,
        cycle: u8,
        forecast_hour: u16,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GRIB decode error: {0}")]
    GribDecode(String),

    #[error("Inconsistent grid: {0}")]
    GridShape(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid H3 resolution: {0} (expected 0-15)")]
    InvalidResolution(u8),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parquet write error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),
}
