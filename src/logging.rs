use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Initialise logging. When `debug` is set the default level is `debug` and
/// the `RUST_LOG` environment variable may override it; otherwise the level is
/// forced to `info`.
///
/// With `file` set, output is also written to that file. Calling this more
/// than once has no effect.
pub fn init(debug: bool, file: Option<PathBuf>) {
    // RUST_LOG is only honoured when debug logging is enabled.
    let level = if debug { "debug" } else { "info" };
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let file_layer = file.and_then(|path| {
        let name = path.file_name()?.to_owned();
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let appender = tracing_appender::rolling::never(dir, name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        Some(fmt::layer().with_ansi(false).with_writer(writer))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init();
}
