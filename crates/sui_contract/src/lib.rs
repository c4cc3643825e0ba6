//! Framework-neutral prop and node contracts shared by the shorthand engine and the component
//! crates.
//!
//! This crate is intentionally runtime-agnostic. It defines the dynamic prop values a component
//! receives, the node descriptions components produce, statically declared component metadata,
//! and the injectable diagnostics context used for development-time warnings. It does not depend
//! on Leptos or browser APIs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod diagnostics;
mod meta;
mod node;
mod props;
mod value;

pub use diagnostics::{
    Diagnostic, DiagnosticLevel, DiagnosticSink, Diagnostics, DiagnosticsConfig, DiagnosticsMode,
    MemorySink,
};
pub use meta::{ComponentKind, ComponentMeta};
pub use node::{ComponentRef, Node, RenderFn, TagName, Target, TargetError};
pub use props::Props;
pub use value::{format_number, PropFn, PropKind, PropValue};
