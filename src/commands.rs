mod interactive;
mod split;

pub use interactive::*;
pub use split::*;

use clap::Subcommand;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split every image in a folder into two halves.
    ///
    /// Accepted split types: h / horizontal / left-right and v / vertical / up-down.
    Split {
        // args
        #[clap(flatten)]
        args: SplitArgs,
    },

    /// Ask for the split type on startup, then split a folder of images.
    ///
    /// This is the default when no command is given.
    Interactive {
        // args
        #[clap(flatten)]
        args: InteractiveArgs,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    ImgUtilError(#[from] crate::image_util::ImgUtilError),

    #[error("output path is not a directory")]
    OutputPathNotDir,

    #[error("{}: file has no name", .0.display())]
    NoFileName(PathBuf),

    #[error("no split type entered")]
    PromptAborted,
}

/// Builds `{output_dir}/{stem}_{label}.{ext}` for a source file.
///
/// The extension keeps its original spelling. Distinct sources mapping to the
/// same name are not deduplicated, the later one overwrites the earlier.
fn output_name(
    source: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    label: &str,
) -> Result<PathBuf, CommandError> {
    let source = source.as_ref();
    let stem = source
        .file_stem()
        .ok_or_else(|| CommandError::NoFileName(source.to_path_buf()))?;

    let mut name = OsString::from(stem);
    name.push("_");
    name.push(label);

    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }

    Ok(output_dir.as_ref().join(name))
}
