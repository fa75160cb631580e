use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{DynamicImage, ImageReader};

use crate::splitter::Rect;

/// File extensions (lowercase, without dot) the scanner picks up.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Debug, thiserror::Error)]
pub enum ImgUtilError {
    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("{}: not a directory", .0.display())]
    NotADirectory(PathBuf),
}

type ImgUtilResult<T> = std::result::Result<T, ImgUtilError>;

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Lists all supported images directly inside `path`, in natural sort order.
pub fn list_images(path: &Path) -> ImgUtilResult<Box<[PathBuf]>> {
    if !path.exists() {
        return Err(ImgUtilError::IOError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("path not found: {}", path.display()),
        )));
    }

    if !path.is_dir() {
        return Err(ImgUtilError::NotADirectory(path.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in fs::read_dir(path)? {
        let path = entry?.path();

        // skip directories, no recursive search
        if !path.is_file() {
            continue;
        }

        if !is_supported(&path) {
            trace!("{}: ignored, unsupported extension", path.display());
            continue;
        }

        files.push(path);
    }

    files.sort_by(|a, b| natord::compare(&a.to_string_lossy(), &b.to_string_lossy()));

    Ok(files.into_boxed_slice())
}

/// Decodes an image, the format is sniffed from the content rather than the extension.
pub fn load_image_from_file(path: &Path) -> ImgUtilResult<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}

pub fn crop(image: &DynamicImage, rect: Rect) -> DynamicImage {
    image.crop_imm(rect.left, rect.top, rect.width(), rect.height())
}

/// Encodes `image` to `path`, the format follows the file extension.
pub fn save_image(image: &DynamicImage, path: &Path) -> ImgUtilResult<()> {
    image.save(path)?;
    Ok(())
}
