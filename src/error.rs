use std::fmt::Display;

use thiserror::Error;

use crate::core::geometry::Size;

pub type Result<T> = std::result::Result<T, WindowError>;

/// Platform and renderer failures
///
/// Every variant except `WindowCreation` is considered unrecoverable by the
/// host: it logs the diagnostic and terminates (see [`fail_fast`]).
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("error creating window: {0}")]
    WindowCreation(String),

    #[error("error querying display mode: {0}")]
    DisplayMode(String),

    #[error("error querying window size: {0}")]
    SizeQuery(String),

    #[error("pixel size {pixels:?} is not a uniform integer multiple of logical size {points:?}")]
    ScaleMismatch { pixels: Size, points: Size },

    #[error("error setting up renderer: {0}")]
    Renderer(String),

    #[error("error creating texture: {0}")]
    Texture(String),

    #[error("texture size {texture:?} does not match surface size {surface:?}")]
    TextureMismatch { texture: Option<Size>, surface: Size },

    #[error("error presenting frame: {0}")]
    Present(String),

    #[error("error loading icon: {0}")]
    Icon(String),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Log a fatal diagnostic and terminate the process
pub fn fail_fast(err: impl Display) -> ! {
    log::error!("fatal: {err}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_mismatch_message_names_both_sizes() {
        let err = WindowError::ScaleMismatch {
            pixels: Size::new(1000, 800),
            points: Size::new(800, 600),
        };
        let msg = err.to_string();
        assert!(msg.contains("1000"));
        assert!(msg.contains("600"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: WindowError = io.into();
        assert!(matches!(err, WindowError::Io(_)));
    }
}
