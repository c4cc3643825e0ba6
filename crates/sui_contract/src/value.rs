use std::{fmt, rc::Rc};

use serde::{Serialize, Serializer};

use crate::{ComponentRef, Node, Props};

/// Shared callable prop, such as a `childKey` function or an `onClick` handler.
///
/// The callable receives the props of the node it is attached to. Two `PropFn` values are equal
/// only when they share the same allocation.
#[derive(Clone)]
pub struct PropFn(Rc<dyn Fn(&Props) -> PropValue>);

impl PropFn {
    /// Wraps a closure as a prop value callable.
    pub fn new(f: impl Fn(&Props) -> PropValue + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the callable with `props`.
    pub fn call(&self, props: &Props) -> PropValue {
        (self.0)(props)
    }
}

impl fmt::Debug for PropFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PropFn(..)")
    }
}

impl PartialEq for PropFn {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Discriminant of a [`PropValue`], used in diagnostics and type validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropKind {
    /// Explicitly undefined entry.
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean flag.
    Bool,
    /// Numeric value.
    Number,
    /// String value.
    String,
    /// List of values.
    Array,
    /// Plain props object.
    Object,
    /// Pre-built node.
    Node,
    /// Component reference.
    Component,
    /// Callable.
    Function,
}

impl PropKind {
    /// Stable lowercase name used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Node => "node",
            Self::Component => "component",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for PropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically shaped prop value.
///
/// `Undefined` models an entry that is present but explicitly undefined, which must survive prop
/// merging as-is. A missing entry is represented by the key being absent from [`Props`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropValue {
    /// Explicitly undefined.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value.
    String(String),
    /// List of values.
    Array(Vec<PropValue>),
    /// Plain props object (also used for `style`).
    Object(Props),
    /// Pre-built node.
    Node(Box<Node>),
    /// Component reference, for example an `as` prop.
    Component(ComponentRef),
    /// Callable prop.
    Function(PropFn),
}

impl PropValue {
    /// Returns the value discriminant.
    pub fn kind(&self) -> PropKind {
        match self {
            Self::Undefined => PropKind::Undefined,
            Self::Null => PropKind::Null,
            Self::Bool(_) => PropKind::Bool,
            Self::Number(_) => PropKind::Number,
            Self::String(_) => PropKind::String,
            Self::Array(_) => PropKind::Array,
            Self::Object(_) => PropKind::Object,
            Self::Node(_) => PropKind::Node,
            Self::Component(_) => PropKind::Component,
            Self::Function(_) => PropKind::Function,
        }
    }

    /// `true` for `Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// `true` for `Undefined` and `Null`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Script-style truthiness: `false`, `0`, `NaN`, `""`, null and undefined are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::String(value) => !value.is_empty(),
            _ => true,
        }
    }

    /// Borrows the string payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean payload.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric payload.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Borrows the props-object payload.
    pub fn as_props(&self) -> Option<&Props> {
        match self {
            Self::Object(props) => Some(props),
            _ => None,
        }
    }

    /// Borrows the node payload.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Stringified form of a string or number, used for keys and class tokens.
    ///
    /// Empty strings and every other kind produce `None`.
    pub fn to_token(&self) -> Option<String> {
        match self {
            Self::String(value) if !value.is_empty() => Some(value.clone()),
            Self::Number(value) => Some(format_number(*value)),
            _ => None,
        }
    }

    /// Short human-readable rendering for diagnostics: strings are quoted, arrays are listed,
    /// objects are elided.
    pub fn preview(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_string(),
            Self::Null => "null".to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => format_number(*value),
            Self::String(value) => format!("\"{value}\""),
            Self::Array(items) => format!(
                "[{}]",
                items
                    .iter()
                    .map(|item| item.to_token().unwrap_or_else(|| item.preview()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::Object(_) | Self::Node(_) => "{...}".to_string(),
            Self::Component(component) => component.meta().name.to_string(),
            Self::Function(_) => "[function]".to_string(),
        }
    }
}

/// Formats a number the way it appears in markup: integral values carry no fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null => serializer.serialize_none(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Number(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 => {
                serializer.serialize_i64(*value as i64)
            }
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(props) => props.serialize(serializer),
            Self::Node(node) => node.serialize(serializer),
            Self::Component(component) => serializer.serialize_str(component.meta().name),
            Self::Function(_) => serializer.serialize_str("[function]"),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<usize> for PropValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(value: Vec<PropValue>) -> Self {
        Self::Array(value)
    }
}

impl From<Props> for PropValue {
    fn from(value: Props) -> Self {
        Self::Object(value)
    }
}

impl From<Node> for PropValue {
    fn from(value: Node) -> Self {
        Self::Node(Box::new(value))
    }
}

impl From<ComponentRef> for PropValue {
    fn from(value: ComponentRef) -> Self {
        Self::Component(value)
    }
}

impl From<PropFn> for PropValue {
    fn from(value: PropFn) -> Self {
        Self::Function(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(value) => Self::Number(value.as_f64().unwrap_or(f64::NAN)),
            Value::String(value) => Self::String(value),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(Props::from(map)),
        }
    }
}
