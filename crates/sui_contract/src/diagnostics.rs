//! Injectable development-time diagnostics context.

use std::{
    cell::RefCell,
    collections::BTreeSet,
    fmt,
    rc::Rc,
};

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticLevel {
    /// Contract violation; rendering proceeds.
    Warning,
    /// Misuse that made the engine drop content.
    Error,
}

/// A single human-readable diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity.
    pub level: DiagnosticLevel,
    /// Message text.
    pub message: String,
}

/// Destination for diagnostics, such as the console or an in-memory buffer.
pub trait DiagnosticSink {
    /// Receives one diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Sink that records diagnostics in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Rc<RefCell<Vec<Diagnostic>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded diagnostic.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    /// Snapshot of recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|entry| entry.message.clone())
            .collect()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drops every recorded diagnostic.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.entries.borrow_mut().push(diagnostic.clone());
    }
}

/// Whether diagnostics are emitted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticsMode {
    /// Emit warnings and errors.
    Development,
    /// Drop everything.
    Production,
}

impl Default for DiagnosticsMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

/// Diagnostics configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DiagnosticsConfig {
    /// Emission mode.
    pub mode: DiagnosticsMode,
    /// Suppress repeated [`Diagnostics::warn_once`] messages.
    pub dedupe_deprecations: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            mode: DiagnosticsMode::default(),
            dedupe_deprecations: true,
        }
    }
}

/// Diagnostics context passed explicitly through render and validation calls.
///
/// One instance is created per application; the already-warned set lives as long as the
/// instance does.
pub struct Diagnostics {
    config: DiagnosticsConfig,
    sink: Rc<dyn DiagnosticSink>,
    warned: RefCell<BTreeSet<String>>,
}

impl Diagnostics {
    /// Creates a context with the default configuration.
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Self::from_config(DiagnosticsConfig::default(), sink)
    }

    /// Creates a context from an explicit configuration.
    pub fn from_config(config: DiagnosticsConfig, sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            config,
            sink: Rc::new(sink),
            warned: RefCell::new(BTreeSet::new()),
        }
    }

    /// Creates a development-mode context recording into a fresh [`MemorySink`].
    pub fn recording() -> (Self, MemorySink) {
        let sink = MemorySink::new();
        let config = DiagnosticsConfig {
            mode: DiagnosticsMode::Development,
            ..DiagnosticsConfig::default()
        };
        (Self::from_config(config, sink.clone()), sink)
    }

    /// Active configuration.
    pub fn config(&self) -> DiagnosticsConfig {
        self.config
    }

    /// Returns `true` in development mode.
    pub fn is_enabled(&self) -> bool {
        self.config.mode == DiagnosticsMode::Development
    }

    /// Emits a warning.
    pub fn warn(&self, message: impl Into<String>) {
        self.emit(DiagnosticLevel::Warning, message.into());
    }

    /// Emits an error.
    pub fn error(&self, message: impl Into<String>) {
        self.emit(DiagnosticLevel::Error, message.into());
    }

    /// Emits a warning unless the same message was already emitted through this context.
    ///
    /// Returns `true` when the warning was emitted.
    pub fn warn_once(&self, message: impl Into<String>) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let message = message.into();
        if self.config.dedupe_deprecations && !self.warned.borrow_mut().insert(message.clone()) {
            return false;
        }
        self.emit(DiagnosticLevel::Warning, message);
        true
    }

    /// Returns `true` when `message` went through [`Self::warn_once`] already.
    pub fn has_warned(&self, message: &str) -> bool {
        self.warned.borrow().contains(message)
    }

    fn emit(&self, level: DiagnosticLevel, message: String) {
        if !self.is_enabled() {
            return;
        }
        self.sink.emit(&Diagnostic { level, message });
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("config", &self.config)
            .field("warned", &self.warned.borrow().len())
            .finish_non_exhaustive()
    }
}
