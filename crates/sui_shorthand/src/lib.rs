//! Shorthand-prop rendering engine for the component library.
//!
//! The crate turns compact prop values into nodes, derives CSS framework class names from prop
//! values, validates prop combinations, and computes pass-through props. Everything here is a
//! synchronous computation over [`sui_contract`] types; the only side channel is the injected
//! [`Diagnostics`] context.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod class_names;
mod console;
mod element_type;
mod error;
pub mod numeral;
mod shorthand;
pub mod sui;
mod unhandled;
pub mod validators;

pub use class_names::{AllowedValues, ClassNameRule, ClassNames, ClassPattern};
pub use console::{console_diagnostics, ConsoleSink};
pub use element_type::element_type;
pub use error::{NumeralError, ShorthandError, ValidatorConfigError};
pub use shorthand::{
    create_shorthand, value_to_prop, PropsSource, ShorthandFactory, ShorthandOptions,
    ShorthandValue,
};
pub use sui_contract::{
    ComponentKind, ComponentMeta, ComponentRef, Diagnostics, DiagnosticsConfig, Node, PropFn,
    PropKind, PropValue, Props, Target,
};
pub use unhandled::{unhandled_props, unhandled_props_for, RESERVED_PROPS};
pub use validators::{PropCheck, PropContractViolation, PropSchema, PropsShape, Validator};
