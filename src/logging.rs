//! Diagnostic output for the command-line shell.
//!
//! Messages are printed to stderr as `LEVEL message fields`, without
//! timestamps, module paths or colors. The level filter sits behind a reload
//! layer so that `debug on` and `debug off` can change it while the shell is
//! running.

use tracing_subscriber::{
    Registry,
    filter::LevelFilter,
    layer::SubscriberExt,
    reload,
    util::{SubscriberInitExt, TryInitError},
};

/// Handle for changing the verbosity of an installed subscriber.
#[derive(Clone)]
pub struct LogHandle {
    filter: reload::Handle<LevelFilter, Registry>,
}

impl LogHandle {
    /// Switches between debug output and the normal info level.
    ///
    /// # Errors
    /// Fails if the subscriber this handle belongs to has been dropped.
    pub fn set_debug(&self, enabled: bool) -> Result<(), reload::Error> {
        let level = if enabled { LevelFilter::DEBUG } else { LevelFilter::INFO };
        self.filter.modify(|filter| *filter = level)
    }

    /// Whether debug output is currently enabled.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.filter
            .clone_current()
            .is_some_and(|filter| filter >= LevelFilter::DEBUG)
    }
}

/// Installs the global subscriber.
///
/// Starts at debug level when `debug` is set, otherwise at info level.
///
/// # Errors
/// Fails if a global subscriber has already been installed.
pub fn init(debug: bool) -> Result<LogHandle, TryInitError> {
    let initial = if debug { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let (filter, handle) = reload::Layer::new(initial);

    let layer = tracing_subscriber::fmt::layer().without_time()
                                                .with_target(false)
                                                .with_level(true)
                                                .with_ansi(false)
                                                .with_writer(std::io::stderr)
                                                .compact();

    Registry::default().with(filter).with(layer).try_init()?;

    Ok(LogHandle { filter: handle })
}
