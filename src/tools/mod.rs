//! File-level helpers for the `qrtool` binary: loading bitmaps, choosing
//! output paths and saving rendered images. The rendering core never
//! touches the filesystem; everything here sits on top of it.

use crate::adjacency::{Adjacency, CornerStats};
use crate::error::Result;
use crate::models::ModuleGrid;
use image::RgbaImage;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Load an image file as RGBA.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let img = image::open(path)?;
    Ok(img.to_rgba8())
}

/// Default output directory from `QR_OUTPUT_DIR`, falling back to `qr_codes`.
pub fn output_dir_from_env() -> PathBuf {
    env::var("QR_OUTPUT_DIR")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("qr_codes"))
}

/// Timestamped default file name, `qrcode_<unix seconds>.png`.
pub fn timestamped_filename() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("qrcode_{secs}.png")
}

/// Normalize a user-supplied file name: anything without a png/jpg/jpeg
/// extension gets `.png` appended.
pub fn normalize_filename(filename: &str) -> String {
    let has_image_ext = Path::new(filename)
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false);
    if has_image_ext {
        filename.to_string()
    } else {
        format!("{filename}.png")
    }
}

/// Where to write the output image.
pub fn output_path(dir: &Path, filename: Option<&str>) -> PathBuf {
    match filename {
        Some(name) => dir.join(normalize_filename(name)),
        None => dir.join(timestamped_filename()),
    }
}

/// Save `image` at `path`, creating parent directories as needed.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    image.save(path)?;
    Ok(())
}

/// Summary of a grid's modules and corner decisions.
#[derive(Debug, Clone, Copy)]
pub struct GridStats {
    /// Modules per side
    pub size: usize,
    /// Filled modules
    pub filled: usize,
    /// Ratio of filled modules to all modules
    pub fill_ratio: f64,
    /// Corner decision totals
    pub corners: CornerStats,
}

/// Compute module and corner counts for a grid.
pub fn grid_stats(grid: &ModuleGrid) -> GridStats {
    let adjacency = Adjacency::analyze(grid);
    let total = grid.size() * grid.size();
    GridStats {
        size: grid.size(),
        filled: adjacency.len(),
        fill_ratio: adjacency.len() as f64 / total as f64,
        corners: adjacency.corner_stats(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::color::{BLACK, WHITE};
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEMP_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before UNIX epoch")
            .as_nanos();
        let sequence = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        path.push(format!("squircle_qr_tools_{nanos}_{sequence}"));
        path
    }

    #[test]
    fn normalize_filename_appends_png() {
        assert_eq!(normalize_filename("code"), "code.png");
        assert_eq!(normalize_filename("code.PNG"), "code.PNG");
        assert_eq!(normalize_filename("code.jpeg"), "code.jpeg");
        assert_eq!(normalize_filename("code.v2"), "code.v2.png");
    }

    #[test]
    fn output_path_uses_timestamp_without_name() {
        let path = output_path(Path::new("out"), None);
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("qrcode_"));
        assert!(name.ends_with(".png"));
        assert_eq!(path.parent(), Some(Path::new("out")));
    }

    #[test]
    fn save_image_creates_directory_and_round_trips() {
        let dir = temp_dir();
        let path = output_path(&dir, Some("sample"));
        let mut img = RgbaImage::from_pixel(4, 4, WHITE);
        img.put_pixel(1, 2, BLACK);

        save_image(&img, &path).unwrap();
        let loaded = load_rgba(&path).unwrap();
        assert_eq!(loaded.as_raw(), img.as_raw());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn grid_stats_counts_corners() {
        let grid = ModuleGrid::from_fn(2, |row, col| row == 0 || col == 0).unwrap();
        let stats = grid_stats(&grid);
        assert_eq!(stats.size, 2);
        assert_eq!(stats.filled, 3);
        assert_eq!(stats.corners.square, 1);
        assert_eq!(stats.corners.rounded, 11);
    }
}
