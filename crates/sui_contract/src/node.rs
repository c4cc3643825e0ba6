use std::{fmt, rc::Rc};

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{ComponentMeta, Diagnostics, PropKind, PropValue, Props};

/// Errors raised when a render target cannot be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// The tag name was empty.
    #[error("tag name must not be empty")]
    EmptyTagName,
    /// The tag name contained characters that cannot appear in markup tag names.
    #[error("`{0}` is not a valid tag name")]
    InvalidTagName(String),
    /// The value is neither a tag name nor a component reference.
    #[error("expected a tag name or component, found {0}")]
    UnsupportedKind(PropKind),
}

/// Validated markup tag name such as `div` or `my-element`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    /// Validates and wraps a tag name.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::EmptyTagName`] for an empty name and
    /// [`TargetError::InvalidTagName`] when the name does not start with an ASCII letter or
    /// contains anything other than ASCII alphanumerics, `-`, `_`, `.` or `:`.
    pub fn new(raw: impl Into<String>) -> Result<Self, TargetError> {
        let raw = raw.into();
        let mut chars = raw.chars();
        match chars.next() {
            None => Err(TargetError::EmptyTagName),
            Some(first) if !first.is_ascii_alphabetic() => Err(TargetError::InvalidTagName(raw)),
            Some(_)
                if !chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | ':')) =>
            {
                Err(TargetError::InvalidTagName(raw))
            }
            Some(_) => Ok(Self(raw)),
        }
    }

    /// Returns the tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Component render function.
pub type RenderFn = Rc<dyn Fn(&Props, &Diagnostics) -> Option<Node>>;

/// Reference to a component: its static descriptor plus its render function.
///
/// Identity is the descriptor: two references are equal when they point at the same
/// [`ComponentMeta`].
#[derive(Clone)]
pub struct ComponentRef {
    meta: &'static ComponentMeta,
    render: RenderFn,
}

impl ComponentRef {
    /// Builds a component reference.
    pub fn new(
        meta: &'static ComponentMeta,
        render: impl Fn(&Props, &Diagnostics) -> Option<Node> + 'static,
    ) -> Self {
        Self {
            meta,
            render: Rc::new(render),
        }
    }

    /// Static descriptor of the component.
    pub fn meta(&self) -> &'static ComponentMeta {
        self.meta
    }

    /// Renders the component with `props`.
    pub fn render(&self, props: &Props, diagnostics: &Diagnostics) -> Option<Node> {
        (self.render)(props, diagnostics)
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRef")
            .field("name", &self.meta.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.meta, other.meta)
    }
}

/// What a node renders as: a plain tag or a component.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Plain markup tag.
    Tag(TagName),
    /// Component reference.
    Component(ComponentRef),
}

impl Target {
    /// Builds a tag target.
    ///
    /// # Errors
    ///
    /// Propagates [`TagName::new`] validation failures.
    pub fn tag(name: &str) -> Result<Self, TargetError> {
        TagName::new(name).map(Self::Tag)
    }

    /// Interprets a prop value (such as `as`) as a render target.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::UnsupportedKind`] for anything that is not a string or component,
    /// and tag-name validation errors for malformed strings.
    pub fn from_prop(value: &PropValue) -> Result<Self, TargetError> {
        match value {
            PropValue::String(name) => Self::tag(name),
            PropValue::Component(component) => Ok(Self::Component(component.clone())),
            other => Err(TargetError::UnsupportedKind(other.kind())),
        }
    }

    /// Tag text or component name.
    pub fn name(&self) -> &str {
        match self {
            Self::Tag(tag) => tag.as_str(),
            Self::Component(component) => component.meta().name,
        }
    }

    /// Borrows the component reference when this is a component target.
    pub fn as_component(&self) -> Option<&ComponentRef> {
        match self {
            Self::Component(component) => Some(component),
            Self::Tag(_) => None,
        }
    }
}

impl From<TagName> for Target {
    fn from(tag: TagName) -> Self {
        Self::Tag(tag)
    }
}

impl From<ComponentRef> for Target {
    fn from(component: ComponentRef) -> Self {
        Self::Component(component)
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Framework-neutral description of a renderable element.
///
/// Children, when present, live in `props["children"]`. The key is an identity hint for
/// reconciliation and is never part of `props`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// What the node renders as.
    #[serde(rename = "type")]
    pub target: Target,
    /// Stable identity hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Props passed to the target.
    pub props: Props,
}

impl Node {
    /// Constructs a node. This is the single node-construction primitive the engine relies on.
    pub fn new(target: impl Into<Target>, props: Props, key: Option<String>) -> Self {
        Self {
            target: target.into(),
            key,
            props,
        }
    }

    /// Returns the node's `className` prop when it is a string.
    pub fn class_name(&self) -> Option<&str> {
        self.props.get("className").and_then(PropValue::as_str)
    }

    /// Returns the node's `children` prop.
    pub fn children(&self) -> Option<&PropValue> {
        self.props.get("children")
    }
}
