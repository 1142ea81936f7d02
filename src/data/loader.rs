use anyhow::Context;
use image::DynamicImage;
use std::path::Path;

/// Decode an image from disk, keeping its original color type
pub fn load_image<P: AsRef<Path>>(path: P) -> crate::Result<DynamicImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "Image file does not exist: {}",
            path.display()
        ));
    }

    let img = image::open(path).with_context(|| format!("Failed to decode {}", path.display()))?;
    tracing::debug!(path = %path.display(), width = img.width(), height = img.height(), "image loaded");
    Ok(img)
}

/// Encode `image` to `path`; the format follows the file extension
pub fn save_image<P: AsRef<Path>>(image: &DynamicImage, path: P) -> crate::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "image saved");
    Ok(())
}
