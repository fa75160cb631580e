use std::process::ExitCode;

use clap::{ArgAction, Parser};

#[macro_use]
extern crate log;

mod commands;
mod image_util;
mod logger;
mod splitter;

#[cfg(test)]
mod test_util;

use commands::{interactive, split, Command, InteractiveArgs};

#[derive(Parser, Debug)]
#[command(version, about, long_about=None)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Increase log verbosity, can be repeated.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease log verbosity, can be repeated.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init(logger::level_from_verbosity(args.verbose, args.quiet));
    info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let res = match args.command {
        Some(Command::Split { args }) => split(&args),
        Some(Command::Interactive { args }) => interactive(&args),
        None => interactive(&InteractiveArgs::default()),
    };

    if let Err(err) = res {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
