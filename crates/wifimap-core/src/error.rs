use thiserror::Error;

#[derive(Error, Debug)]
pub enum WifiMapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Not enough samples to interpolate: {found} (need at least {required})")]
    InsufficientData { found: usize, required: usize },

    #[error("Invalid calibration: {pixel_distance} px for {real_distance} m")]
    InvalidCalibration {
        pixel_distance: f64,
        real_distance: f64,
    },

    #[error("Position ({x:.1}, {y:.1}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: u32,
        height: u32,
    },

    #[error("Scanner failure: {0}")]
    ScannerFailure(String),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Scale has not been calibrated")]
    NotCalibrated,

    #[error("No floor plan loaded")]
    NoImage,
}

impl From<toml::de::Error> for WifiMapError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for WifiMapError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WifiMapError>;
