use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Args;
use image::DynamicImage;

use super::{output_name, CommandError};
use crate::{image_util, splitter::SplitAxis};

#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Folder containing the images to split.
    pub source: PathBuf,

    /// Output folder, created if missing.
    pub output: PathBuf,

    /// How to split the images.
    /// h / horizontal / left-right: left and right half.
    /// v / vertical / up-down: top and bottom half.
    #[clap(verbatim_doc_comment)]
    pub split_type: String,
}

/// Outcome of a single batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Written files, one pair per processed source image.
    pub outputs: Vec<(PathBuf, PathBuf)>,

    /// Number of images skipped because of an unrecognized split type.
    pub invalid: usize,
}

/// Both halves of one source image together with their destinations.
struct OutputPair {
    first: (DynamicImage, PathBuf),
    second: (DynamicImage, PathBuf),
}

impl OutputPair {
    fn new(source: &Path, output: &Path, axis: SplitAxis) -> Result<Self, CommandError> {
        let image = image_util::load_image_from_file(source)?;
        let (first_rect, second_rect) = axis.split(image.width(), image.height());
        let (first_label, second_label) = axis.labels();

        debug!(
            "{}: {axis} split of {}x{} -> {first_label} {first_rect}, {second_label} {second_rect}",
            source.display(),
            image.width(),
            image.height()
        );

        if first_rect.is_empty() || second_rect.is_empty() {
            warn!("{}: image too small, one half is empty", source.display());
        }

        Ok(Self {
            first: (
                image_util::crop(&image, first_rect),
                output_name(source, output, first_label)?,
            ),
            second: (
                image_util::crop(&image, second_rect),
                output_name(source, output, second_label)?,
            ),
        })
    }

    fn save(self) -> Result<(PathBuf, PathBuf), CommandError> {
        let (first, first_path) = self.first;
        image_util::save_image(&first, &first_path)?;

        let (second, second_path) = self.second;
        image_util::save_image(&second, &second_path)?;

        Ok((first_path, second_path))
    }
}

/// Splits every supported image in `args.source` and writes both halves to `args.output`.
///
/// An unrecognized split type is reported for each image and skips it without
/// failing the batch. Decoding or encoding errors abort the batch.
pub fn split(args: &SplitArgs) -> Result<BatchSummary, CommandError> {
    fs::create_dir_all(&args.output)?;
    if !args.output.is_dir() {
        return Err(CommandError::OutputPathNotDir);
    }

    let axis = args.split_type.parse::<SplitAxis>();
    let paths = image_util::list_images(&args.source)?;

    let mut summary = BatchSummary::default();

    if paths.is_empty() {
        warn!("no source images found");
        return Ok(summary);
    }

    for path in paths.iter() {
        let name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy();

        let axis = match &axis {
            Ok(axis) => *axis,
            Err(err) => {
                warn!("{name}: {err}");
                summary.invalid += 1;
                continue;
            }
        };

        let (first, second) = OutputPair::new(path, &args.output, axis)?.save()?;

        info!(
            "processed: {name} -> {}, {}",
            first.display(),
            second.display()
        );

        summary.outputs.push((first, second));
    }

    if summary.invalid > 0 {
        info!(
            "split {} of {} images, {} skipped",
            summary.outputs.len(),
            paths.len(),
            summary.invalid
        );
    } else {
        info!("split {} images", summary.outputs.len());
    }

    Ok(summary)
}
