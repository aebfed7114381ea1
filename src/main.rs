//! Entry point for the `anthera-site` command line.

use std::path::Path;
use std::process::ExitCode;

use anthera_site::cli::{
    Cli,
    CommandStatus,
    run,
};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file.as_deref());

    match run(&cli, &mut std::io::stdout().lock()) {
        Ok(CommandStatus::Success) => ExitCode::SUCCESS,
        Ok(CommandStatus::CoverageIncomplete) => ExitCode::from(2),
        Err(err) => {
            tracing::error!(%err, "Command failed");
            ExitCode::FAILURE
        }
    }
}

/// Installs the global subscriber. Logs go to stderr unless `log_file` is set.
///
/// The returned guard flushes the file writer on drop.
fn init_logging(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(path) = log_file else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        return None;
    };

    let directory = path.parent().filter(|dir| !dir.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path.file_name().unwrap_or(path.as_os_str());
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false).with_writer(writer).init();

    Some(guard)
}
