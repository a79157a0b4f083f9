//! PNG file export for the drawing surface.

use cairo::ImageSurface;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Fixed name of the exported image file.
pub const EXPORT_FILENAME: &str = "drawing.png";

/// Errors raised while exporting the drawing.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Directory creation or file write failed.
    #[error("export io error: {0}")]
    Io(#[from] std::io::Error),
    /// Cairo failed to encode the PNG stream.
    #[error("png encode error: {0}")]
    Png(#[from] cairo::IoError),
}

/// Default export directory: `<pictures>/Inkpad`, falling back to the
/// current directory when no pictures directory is known.
pub fn default_export_dir() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Inkpad")
}

/// Ensure the export directory exists, creating it if necessary.
///
/// Returns the canonicalized path when resolvable.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes the full surface, pixel for pixel, to `<directory>/drawing.png`.
///
/// The surface is not mutated; an existing export is overwritten.
pub fn export_drawing(image: &ImageSurface, directory: &Path) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(directory)?;
    let file_path = directory.join(EXPORT_FILENAME);

    let mut file = File::create(&file_path)?;
    image.write_to_png(&mut file)?;

    log::info!(
        "Drawing exported to {} ({}x{} px)",
        file_path.display(),
        image.width(),
        image.height()
    );

    Ok(file_path)
}
