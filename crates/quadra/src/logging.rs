//! Logging setup.
//!
//! Library code only emits `tracing` events. Binaries and tests that want
//! to see them call [`init_logging`] once.

use thiserror::Error;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

/// Options for [`init_logging`].
#[derive(Clone, Debug)]
pub struct LoggingOptions {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `"quadra=debug"`.
    pub default_directive: String,
    /// Include the event target in each line.
    pub with_target: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            with_target: true,
        }
    }
}

/// Errors raised while installing a subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The fallback filter directive could not be parsed.
    #[error("invalid filter directive {directive:?}: {source}")]
    Directive {
        /// The directive as given.
        directive: String,
        /// Parser error.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Keeps a thread-local subscriber installed until dropped.
///
/// Holds nothing when the global subscriber was installed.
#[must_use = "dropping the guard uninstalls a thread-local subscriber"]
pub struct LoggingGuard {
    guard: Option<DefaultGuard>,
}

impl LoggingGuard {
    /// Returns true if the subscriber is scoped to the current thread.
    #[must_use]
    pub fn is_thread_local(&self) -> bool {
        self.guard.is_some()
    }
}

/// Installs a formatting subscriber filtered by `RUST_LOG`, writing to
/// standard error.
///
/// Falls back to `opts.default_directive` when `RUST_LOG` is unset or
/// unparsable. If a global subscriber already exists, a thread-local one
/// is installed instead and scoped to the returned guard.
///
/// # Errors
///
/// Returns [`LoggingError::Directive`] if the fallback directive is invalid.
pub fn init_logging(opts: &LoggingOptions) -> Result<LoggingGuard, LoggingError> {
    init_logging_with_writer(opts, std::io::stderr)
}

/// Like [`init_logging`], but formats events into `writer`.
///
/// # Errors
///
/// Returns [`LoggingError::Directive`] if the fallback directive is invalid.
pub fn init_logging_with_writer<W>(
    opts: &LoggingOptions,
    writer: W,
) -> Result<LoggingGuard, LoggingError>
where
    W: for<'w> MakeWriter<'w> + Clone + Send + Sync + 'static,
{
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&opts.default_directive).map_err(|source| {
            LoggingError::Directive {
                directive: opts.default_directive.clone(),
                source,
            }
        })?,
    };
    let directives = env_filter.to_string();

    let build_subscriber = |filter: EnvFilter| {
        tracing_subscriber::registry().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_target(opts.with_target)
                .with_writer(writer.clone()),
        )
    };

    let guard = match tracing::subscriber::set_global_default(build_subscriber(env_filter)) {
        Ok(()) => None,
        Err(_) => Some(tracing::subscriber::set_default(build_subscriber(
            EnvFilter::new(directives),
        ))),
    };

    Ok(LoggingGuard { guard })
}
