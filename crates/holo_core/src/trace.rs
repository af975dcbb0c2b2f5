use cap_std::fs_utf8::Dir;
use miette::{Context, IntoDiagnostic, Result};

/// Name of the log file created inside the holomap data directory.
pub const LOG_FILE_NAME: &str = "holomap.log";

/// Installs the global tracing subscriber.
///
/// Log level comes from the `HOLOMAP_LOG` env var (`info` if unset). The log
/// file is created in the data dir, which doubles as a check that the
/// directory is writeable by us. The returned guard must be kept alive for
/// the duration of the process or buffered log lines are lost.
pub fn install_tracing(data_dir: &Dir) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter_layer = EnvFilter::try_from_env("HOLOMAP_LOG")
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    let writer = std::io::BufWriter::new(
        data_dir
            .create(LOG_FILE_NAME)
            .into_diagnostic()
            .wrap_err("failed to create holomap.log file")?,
    );
    let (nb, guard) = tracing_appender::non_blocking(writer);
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .pretty()
        .with_file(true)
        .with_line_number(true)
        .with_writer(nb);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(guard)
}
