use sui_contract::{Diagnostic, DiagnosticLevel, DiagnosticSink, Diagnostics, DiagnosticsConfig};

/// Sink that forwards diagnostics to the Leptos console logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic.level {
            DiagnosticLevel::Warning => leptos::logging::warn!("{}", diagnostic.message),
            DiagnosticLevel::Error => leptos::logging::error!("{}", diagnostic.message),
        }
    }
}

/// Builds the application-wide diagnostics context backed by the console.
pub fn console_diagnostics(config: DiagnosticsConfig) -> Diagnostics {
    Diagnostics::from_config(config, ConsoleSink)
}
