use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

/// Collect the image files in `dir_path`, sorted by file name.
///
/// An empty result is not an error here: a carousel without slides degrades
/// to its inactive form, so absence is the caller's concern.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let entry = entry.context("failed to read directory entry")?;
        let path = entry.path();
        if path.is_file() {
            if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                match ext.to_lowercase().as_str() {
                    "png" | "jpg" | "jpeg" | "bmp" | "gif" => {
                        paths.push(path);
                    }
                    _ => {}
                }
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Load an image, apply its EXIF orientation, and upload it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read file {}", image_path.display()))?;

    let mut orientation = 1; // Default: no rotation

    // EXIF data is only read reliably from JPEG containers.
    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension == "jpg" || extension == "jpeg" {
        match Reader::new().read_from_container(&mut Cursor::new(&file_bytes)) {
            Ok(exif) => {
                if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                    if let Value::Short(values) = &field.value {
                        if !values.is_empty() {
                            orientation = values[0];
                        }
                    }
                }
            }
            Err(e) => {
                // Non-critical: proceed without rotation.
                warn!("could not read EXIF data for {}: {}", image_path.display(), e);
            }
        }
    }

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow!("failed to load image data for {}: {}", image_path.display(), e))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
    // Orientations involving flips are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
            debug!("applied 180 deg rotation to {}", image_path.display());
        }
        6 => {
            image.rotate_cw();
            debug!("applied 90 deg CW rotation to {}", image_path.display());
        }
        8 => {
            image.rotate_ccw();
            debug!("applied 90 deg CCW rotation to {}", image_path.display());
        }
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}
