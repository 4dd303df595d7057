// SPDX-License-Identifier: MIT

//! The `logger` module defines functions necessary for the setup of [`fern`].

use log::LevelFilter;

/// Configures the [`fern`] logger.
///
/// This function configures the logger to output log messages using the `ISO` date format and
/// the verbosity level counted from the `-v` arguments.
///
/// Log records are written to `stderr`; `stdout` carries the command's own output.
pub fn setup_logger(verbosity: u8) -> Result<(), fern::InitError> {
    use fern::Dispatch;

    let log_max_level = level_for(verbosity);

    if verbosity > 0 {
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{}[{}][{}] {}",
                    chrono::Local::now().format("[%Y-%m-%dT%H:%M:%S%z]"),
                    record.target(),
                    record.level(),
                    message
                ))
            })
            .level(log_max_level)
            .chain(std::io::stderr())
            .apply()?;
    } else {
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("[{}] {}", record.level(), message))
            })
            .level(log_max_level)
            .chain(std::io::stderr())
            .apply()?;
    }

    debug!("done setting up logger, level: {}", log_max_level);

    Ok(())
}

/// Maps the `-v` occurrence count to a maximum log level.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
