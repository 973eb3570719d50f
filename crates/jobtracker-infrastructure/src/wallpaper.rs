//! Custom wallpaper import.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use jobtracker_core::error::{JobTrackerError, Result};

/// Reads an image file and encodes it as a `data:` URL.
///
/// The MIME type is guessed from the file extension; anything that is not
/// `image/*` is rejected before the file is read.
pub fn image_to_data_url(path: &Path) -> Result<String> {
    let mime = mime_guess::from_path(path)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .ok_or_else(|| {
            JobTrackerError::invalid_input(
                "image",
                format!("{} is not a recognised image file", path.display()),
            )
        })?;

    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), %mime, bytes = bytes.len(), "Encoded wallpaper image");
    Ok(format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes)))
}
