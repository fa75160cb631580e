// Formatter loosely based on pretty_env_logger, driven by Builder::from_env()

use env_logger::{
    fmt::{Color, Style, StyledValue},
    Builder, Env,
};
use log::{Level, LevelFilter};

/// Maps the `-v` / `-q` counters onto a default filter, starting from `info`.
pub fn level_from_verbosity(verbose: u8, quiet: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let idx = (3 + i16::from(verbose) - i16::from(quiet)).clamp(0, 5);
    LEVELS[idx as usize]
}

/// Installs the global logger. `RUST_LOG` takes precedence over `default`.
pub fn init(default: LevelFilter) {
    let env = Env::default().filter_or("RUST_LOG", default.as_str());
    let show_target = default >= LevelFilter::Debug;

    Builder::from_env(env)
        .format(move |buf, record| {
            use std::io::Write;

            let mut style = buf.style();
            let level = colored_level(&mut style, record.level());
            let time = buf.timestamp_millis();
            let text = record.args().to_string();
            let mut lines = text.lines();

            if show_target {
                let mut style = buf.style();
                let target = style.set_bold(true).value(record.target());
                write!(buf, "{time} {level} {target} > ")?;
            } else {
                write!(buf, "{time} {level} > ")?;
            }
            writeln!(buf, "{}", lines.next().unwrap_or_default())?;

            // 24 (timestamp) + 5 (level) + 1 space = 30
            for line in lines {
                writeln!(buf, "{:30}   {line}", " ")?;
            }

            Ok(())
        })
        .init();
}

fn colored_level(style: &'_ mut Style, level: Level) -> StyledValue<'_, &'static str> {
    match level {
        Level::Trace => style.set_color(Color::Magenta).value("TRACE"),
        Level::Debug => style.set_color(Color::Blue).value("DEBUG"),
        Level::Info => style.set_color(Color::Green).value("INFO "),
        Level::Warn => style.set_color(Color::Yellow).value("WARN "),
        Level::Error => style.set_color(Color::Red).value("ERROR"),
    }
}
