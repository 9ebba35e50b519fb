//! Diagnostics configuration shared with the generator's option layer.

/// Environment variable that turns on diagnostics when set to a non-empty
/// value other than `0`.
pub const DEBUG_ENV: &str = "KEYPOS_DEBUG";

/// Options consulted by the primitives.
///
/// The generator owns option parsing; the primitives only read the debug
/// flag to decide whether to emit diagnostic events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Emit construction/teardown diagnostics
    pub debug: bool,
}

impl Options {
    /// Options with diagnostics disabled.
    pub const fn new() -> Self {
        Self { debug: false }
    }

    /// Options with the debug flag set as given.
    pub const fn with_debug(debug: bool) -> Self {
        Self { debug }
    }

    /// Read the debug flag from [`DEBUG_ENV`].
    pub fn from_env() -> Self {
        let debug = std::env::var(DEBUG_ENV)
            .map(|value| !value.is_empty() && value != "0")
            .unwrap_or(false);
        Self { debug }
    }

    /// `self` with the debug flag also turned on by [`DEBUG_ENV`].
    pub fn or_env(self) -> Self {
        Self {
            debug: self.debug || Self::from_env().debug,
        }
    }

    /// Default log filter: diagnostics are emitted at `debug`, so they are
    /// only visible when the debug flag lowers the filter to match.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}
