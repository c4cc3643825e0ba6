//! Reference components built on the shorthand engine, and the Leptos bridge that mounts them.
//!
//! Components render to framework-neutral [`Node`] trees: each one derives its class string from
//! its own props, forwards every prop it does not handle, and expands shorthand props such as
//! `icon` or `items` into child nodes. [`render_view`] and [`ShorthandView`] turn those trees
//! into Leptos views.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
mod view;

pub use components::{GridColumn, Icon, Label, Menu, MenuItem};
pub use sui_contract::Node;
pub use view::{render_view, use_diagnostics, DiagnosticsProvider, ShorthandView};

/// Convenience imports for crates rendering the reference components.
pub mod prelude {
    pub use crate::{
        render_view, use_diagnostics, DiagnosticsProvider, GridColumn, Icon, Label, Menu,
        MenuItem, ShorthandView,
    };
    pub use sui_shorthand::{
        Diagnostics, DiagnosticsConfig, Node, PropValue, Props, ShorthandOptions,
    };
}
