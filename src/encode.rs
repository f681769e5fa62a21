//! Bridge to the external QR encoder
//!
//! Turns payload bytes into a [`ModuleGrid`] using the `qrcode` crate. The
//! smallest version that fits is chosen; data that fits no version is an
//! [`Error::EncodingOverflow`] and is never truncated.

use crate::error::{Error, Result};
use crate::models::ModuleGrid;
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    #[default]
    H,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// Encode `data` and return its module matrix (quiet zone excluded)
pub fn encode_grid(data: &[u8], level: ErrorCorrection) -> Result<ModuleGrid> {
    let code = QrCode::with_error_correction_level(data, level.into()).map_err(|err| match err {
        QrError::DataTooLong => Error::EncodingOverflow,
        other => Error::Encoding(other.to_string()),
    })?;
    grid_from_code(&code)
}

/// Copy the dark modules of an encoded symbol into a [`ModuleGrid`]
pub fn grid_from_code(code: &QrCode) -> Result<ModuleGrid> {
    let width = code.width();
    let colors = code.to_colors();
    if colors.len() != width * width {
        return Err(Error::InvalidGrid(format!(
            "encoder returned {} modules for width {width}",
            colors.len()
        )));
    }
    ModuleGrid::from_fn(width, |row, col| colors[row * width + col] == Color::Dark)
}
