use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    let installed = if let Some(path) = log_file {
        let file = File::create(&path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_target(true);

        subscriber.with(file_layer).try_init()
    } else {
        subscriber.try_init()
    };

    installed.map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::OFF);
    }

    #[test]
    #[serial]
    fn installing_twice_is_reported() {
        let _ = setup_logging(0, true, None);
        assert!(matches!(
            setup_logging(0, true, None),
            Err(CliError::Other(_))
        ));
    }

    #[test]
    #[serial]
    fn file_layer_records_workflow_events() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("valency.log");
        let file = File::create(&log_path).unwrap();
        let subscriber = tracing_subscriber::registry()
            .with(level_filter(1, false))
            .with(fmt::layer().with_writer(file).with_ansi(false));

        tracing::subscriber::with_default(subscriber, || {
            let table = valency::core::table::PeriodicTable::builtin();
            valency::workflows::describe::describe_atom(&table, "Fe", 2).unwrap();
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Configured atom."));
        assert!(content.contains("Fe^2+"));
        assert!(!content.contains("DEBUG"));
    }

    #[test]
    #[serial]
    fn log_file_that_cannot_be_created_is_an_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = setup_logging(0, true, Some(temp_dir.path().to_path_buf()));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
