//! Error types and handling

use std::fmt;

/// Errors produced while building grids, validating parameters or rendering
#[derive(Debug)]
pub enum Error {
    /// Bitmap dimensions do not fit `(N + 2 * border) * module_size` for any N >= 1
    InvalidBitmapGeometry {
        /// Bitmap width in pixels
        width: u32,
        /// Bitmap height in pixels
        height: u32,
        /// Declared module size in pixels
        module_size: u32,
        /// Declared quiet zone in modules
        border: u32,
    },
    /// A render parameter is outside its allowed range
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },
    /// A module matrix is empty or not square
    InvalidGrid(String),
    /// A colour token could not be parsed
    InvalidColor(String),
    /// The encoder could not fit the data into any symbol version
    EncodingOverflow,
    /// Any other encoder failure
    Encoding(String),
    /// Image decode/encode failure (tools layer)
    Image(image::ImageError),
    /// Filesystem failure (tools layer)
    Io(std::io::Error),
}

impl Error {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBitmapGeometry {
                width,
                height,
                module_size,
                border,
            } => write!(
                f,
                "invalid bitmap geometry: {width}x{height} is not a square multiple of \
                 module size {module_size} with a {border}-module border"
            ),
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{name}`: {reason}")
            }
            Self::InvalidGrid(reason) => write!(f, "invalid module grid: {reason}"),
            Self::InvalidColor(token) => write!(f, "invalid colour: {token:?}"),
            Self::EncodingOverflow => write!(f, "data too long for any QR code version"),
            Self::Encoding(reason) => write!(f, "encoding failed: {reason}"),
            Self::Image(err) => write!(f, "image error: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Image(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Crate-wide result alias
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_parameter_name() {
        let err = Error::parameter("radius_percent", "must be within 0..=100, got 150");
        let msg = err.to_string();
        assert!(msg.contains("radius_percent"));
        assert!(msg.contains("150"));
    }

    #[test]
    fn test_geometry_display() {
        let err = Error::InvalidBitmapGeometry {
            width: 33,
            height: 33,
            module_size: 10,
            border: 1,
        };
        assert!(err.to_string().contains("33x33"));
    }
}
