use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid axis bounds: lower={lower}, upper={upper}")]
    InvalidAxis { lower: f64, upper: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
