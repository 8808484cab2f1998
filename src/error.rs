use thiserror::Error;

pub type MinimapResult<T> = Result<T, MinimapError>;

#[derive(Debug, Error)]
pub enum MinimapError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Render(String),
}
