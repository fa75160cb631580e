use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Args;

use super::{split, BatchSummary, CommandError, SplitArgs};
use crate::splitter::SplitAxis;

pub const DEFAULT_SOURCE: &str = "./input_images";
pub const DEFAULT_OUTPUT: &str = "./output_images";

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Folder containing the images to split.
    #[clap(short, long, default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Output folder, created if missing.
    #[clap(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Default for InteractiveArgs {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

pub fn interactive(args: &InteractiveArgs) -> Result<BatchSummary, CommandError> {
    run_interactive(args, &mut io::stdin().lock(), &mut io::stdout())
}

fn run_interactive(
    args: &InteractiveArgs,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<BatchSummary, CommandError> {
    let split_type = prompt_split_type(input, output)?;

    split(&SplitArgs {
        source: args.source.clone(),
        output: args.output.clone(),
        split_type,
    })
}

/// Asks the operator for a split type and returns the entered token, trimmed.
///
/// The token is not validated here, unknown values are reported per image by [`split`].
fn prompt_split_type(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<String, CommandError> {
    write!(output, "Enter split type ({}): ", SplitAxis::accepted_tokens())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CommandError::PromptAborted);
    }

    Ok(line.trim().to_owned())
}
