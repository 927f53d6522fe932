//! # Output Module
//!
//! Writes rendered frames to disk:
//! - PPM, as a plain-text P3 pixmap
//! - PNG
//!
//! Frames arrive as 8-bit RGB already clamped to [0, 255], row-major with the
//! top row first, so no tone mapping or gamma correction is applied.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbImage};
use log::info;

use crate::error::OutputError;

/// Save an image, choosing the format from the file extension.
///
/// `.ppm` writes an ASCII pixmap, `.png` a PNG. Anything else is rejected
/// before a file is created.
pub fn save_image(image: &RgbImage, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    let extension = output_path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => save_image_as_ppm(image, output_path),
        "png" => save_image_as_png(image, output_path),
        _ => Err(OutputError::UnsupportedFormat(extension)),
    }
}

/// Save an image as a plain-text (P3) PPM file.
///
/// Header `P3`, width and height, maximum value 255, then one `r g b` triple
/// per pixel.
pub fn save_image_as_ppm(image: &RgbImage, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    let mut writer = BufWriter::new(File::create(output_path)?);

    PnmEncoder::new(&mut writer)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Ascii))
        .write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgb8)?;
    writer.flush()?;

    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save an image as PNG.
pub fn save_image_as_png(image: &RgbImage, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    image.save_with_format(output_path, ImageFormat::Png)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}
