//! Shorthand normalization: turning a compact prop value into a node.
//!
//! A shorthand value is a string, number, list, props object or pre-built node. Primitive values
//! go through the caller's `map_value_to_props`; objects and nodes supply their own props and
//! the mapper is never invoked for them. Default, user and override props are then merged with
//! class names accumulated and `style` shallow-merged.

use std::{fmt, rc::Rc};

use sui_contract::{format_number, Diagnostics, Node, PropKind, PropValue, Props, Target};

use crate::{class_names, ShorthandError};

/// Compact description of content that expands into a node.
#[derive(Debug, Clone, PartialEq)]
pub enum ShorthandValue {
    /// Absent.
    Undefined,
    /// Absent.
    Null,
    /// Sentinel flag; never renders.
    Bool(bool),
    /// Primitive string.
    Text(String),
    /// Primitive number.
    Number(f64),
    /// Primitive list.
    List(Vec<PropValue>),
    /// Plain props object.
    Props(Props),
    /// Pre-built node.
    Node(Node),
    /// Any value that cannot describe content, such as a bare function.
    Unsupported(PropKind),
}

impl ShorthandValue {
    /// The value handed to `map_value_to_props` for primitive shorthand.
    fn primitive(&self) -> Option<PropValue> {
        match self {
            Self::Text(text) => Some(PropValue::String(text.clone())),
            Self::Number(n) => Some(PropValue::Number(*n)),
            Self::List(items) => Some(PropValue::Array(items.clone())),
            _ => None,
        }
    }

    fn generated_key(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(n) => Some(format_number(*n)),
            _ => None,
        }
    }
}

impl From<PropValue> for ShorthandValue {
    fn from(value: PropValue) -> Self {
        match value {
            PropValue::Undefined => Self::Undefined,
            PropValue::Null => Self::Null,
            PropValue::Bool(flag) => Self::Bool(flag),
            PropValue::String(text) => Self::Text(text),
            PropValue::Number(n) => Self::Number(n),
            PropValue::Array(items) => Self::List(items),
            PropValue::Object(props) => Self::Props(props),
            PropValue::Node(node) => Self::Node(*node),
            other @ (PropValue::Component(_) | PropValue::Function(_)) => {
                Self::Unsupported(other.kind())
            }
        }
    }
}

impl From<&PropValue> for ShorthandValue {
    fn from(value: &PropValue) -> Self {
        Self::from(value.clone())
    }
}

impl From<Option<&PropValue>> for ShorthandValue {
    fn from(value: Option<&PropValue>) -> Self {
        value.map_or(Self::Undefined, Self::from)
    }
}

impl From<&str> for ShorthandValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ShorthandValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ShorthandValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ShorthandValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for ShorthandValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Props> for ShorthandValue {
    fn from(value: Props) -> Self {
        Self::Props(value)
    }
}

impl From<Node> for ShorthandValue {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}

/// Props supplied either as a fixed map or computed from the props merged so far.
#[derive(Clone)]
pub enum PropsSource {
    /// Fixed props.
    Static(Props),
    /// Props computed from an input map.
    Computed(Rc<dyn Fn(&Props) -> Props>),
}

impl PropsSource {
    /// Wraps a closure.
    pub fn computed(f: impl Fn(&Props) -> Props + 'static) -> Self {
        Self::Computed(Rc::new(f))
    }

    /// Produces the props, invoking the closure with `input` when computed.
    pub fn resolve(&self, input: &Props) -> Props {
        match self {
            Self::Static(props) => props.clone(),
            Self::Computed(f) => f(input),
        }
    }
}

impl Default for PropsSource {
    fn default() -> Self {
        Self::Static(Props::new())
    }
}

impl From<Props> for PropsSource {
    fn from(props: Props) -> Self {
        Self::Static(props)
    }
}

impl fmt::Debug for PropsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(props) => f.debug_tuple("Static").field(props).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Per-call shorthand configuration.
#[derive(Debug, Clone)]
pub struct ShorthandOptions {
    /// Lowest-precedence props. Computed defaults receive empty props.
    pub default_props: PropsSource,
    /// Highest-precedence props. Computed overrides receive defaults merged with user props.
    pub override_props: PropsSource,
    /// Use a string or number shorthand value as the key when nothing else provides one.
    pub auto_generate_key: bool,
}

impl Default for ShorthandOptions {
    fn default() -> Self {
        Self {
            default_props: PropsSource::default(),
            override_props: PropsSource::default(),
            auto_generate_key: true,
        }
    }
}

impl ShorthandOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default props.
    pub fn with_defaults(mut self, default_props: impl Into<PropsSource>) -> Self {
        self.default_props = default_props.into();
        self
    }

    /// Sets the override props.
    pub fn with_overrides(mut self, override_props: impl Into<PropsSource>) -> Self {
        self.override_props = override_props.into();
        self
    }

    /// Disables the primitive-value key fallback.
    pub fn without_generated_key(mut self) -> Self {
        self.auto_generate_key = false;
        self
    }
}

/// Normalizes `value` into a node of `target`.
///
/// Returns `None` for undefined, null and boolean values regardless of options. Unsupported
/// values are reported as errors through `diagnostics` and also produce `None`. A pre-built node
/// keeps its own target; every other kind renders as `target`.
pub fn create_shorthand(
    target: &Target,
    map_value_to_props: &dyn Fn(&PropValue) -> Props,
    value: impl Into<ShorthandValue>,
    options: &ShorthandOptions,
    diagnostics: &Diagnostics,
) -> Option<Node> {
    let value = value.into();
    let user_props = match &value {
        ShorthandValue::Undefined | ShorthandValue::Null | ShorthandValue::Bool(_) => return None,
        ShorthandValue::Unsupported(kind) => {
            diagnostics.error(format!(
                "Shorthand value must be a string, number, array, object or node, found {kind}. \
                 Rendering nothing for `{}`.",
                target.name()
            ));
            return None;
        }
        ShorthandValue::Node(node) => node.props.clone(),
        ShorthandValue::Props(props) => props.clone(),
        ShorthandValue::Text(_) | ShorthandValue::Number(_) | ShorthandValue::List(_) => {
            value.primitive().map(|primitive| map_value_to_props(&primitive))?
        }
    };

    let default_props = options.default_props.resolve(&Props::new());
    let override_props = options
        .override_props
        .resolve(&default_props.overlaid(&user_props));
    let mut props = merge_props(&default_props, &user_props, &override_props);
    let key = derive_key(&value, &mut props, options.auto_generate_key);

    Some(match value {
        ShorthandValue::Node(node) => Node::new(node.target, props, key),
        _ => Node::new(target.clone(), props, key),
    })
}

fn merge_props(default_props: &Props, user_props: &Props, override_props: &Props) -> Props {
    let mut props = default_props.overlaid(user_props);
    props.overlay(override_props);

    let class_sources = [default_props, override_props, user_props];
    if let Some(class_name) = class_names::join_class_names(
        class_sources
            .into_iter()
            .filter_map(|props| props.get("className")),
    ) {
        props.insert("className", class_name);
    }

    let styles: Vec<&Props> = [default_props, user_props, override_props]
        .into_iter()
        .filter_map(|props| props.get("style").and_then(PropValue::as_props))
        .collect();
    if !styles.is_empty() {
        let style = styles
            .into_iter()
            .fold(Props::new(), |merged, style| merged.overlaid(style));
        props.insert("style", style);
    }

    props
}

/// Resolves the node key and strips `key`/`childKey` from `props`.
fn derive_key(value: &ShorthandValue, props: &mut Props, auto_generate_key: bool) -> Option<String> {
    let explicit = props.remove("key");
    let child_key = props.remove("childKey");

    if let ShorthandValue::Node(Node { key: Some(key), .. }) = value {
        return Some(key.clone());
    }
    if let Some(key) = explicit.as_ref().and_then(PropValue::to_token) {
        return Some(key);
    }
    if let Some(child_key) = child_key {
        let resolved = match child_key {
            PropValue::Function(f) => f.call(props),
            other => other,
        };
        if let Some(key) = resolved.to_token() {
            return Some(key);
        }
    }
    if auto_generate_key {
        value.generated_key()
    } else {
        None
    }
}

/// Mapper placing a primitive value under a single prop, e.g. `value_to_prop("content")`.
pub fn value_to_prop(prop: &'static str) -> impl Fn(&PropValue) -> Props {
    move |value: &PropValue| Props::new().with(prop, value.clone())
}

/// Shorthand constructor bound to a target and a value mapper.
#[derive(Clone)]
pub struct ShorthandFactory {
    target: Target,
    map_value_to_props: Rc<dyn Fn(&PropValue) -> Props>,
}

impl ShorthandFactory {
    /// Binds `target` and `map_value_to_props`.
    pub fn new(
        target: impl Into<Target>,
        map_value_to_props: impl Fn(&PropValue) -> Props + 'static,
    ) -> Self {
        Self {
            target: target.into(),
            map_value_to_props: Rc::new(map_value_to_props),
        }
    }

    /// Binds a target given as a prop value.
    ///
    /// # Errors
    ///
    /// Returns [`ShorthandError::InvalidTarget`] unless `target` is a tag name or component.
    pub fn from_prop(
        target: &PropValue,
        map_value_to_props: impl Fn(&PropValue) -> Props + 'static,
    ) -> Result<Self, ShorthandError> {
        Ok(Self::new(Target::from_prop(target)?, map_value_to_props))
    }

    /// Bound target.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Normalizes one shorthand value.
    pub fn create(
        &self,
        value: impl Into<ShorthandValue>,
        options: &ShorthandOptions,
        diagnostics: &Diagnostics,
    ) -> Option<Node> {
        create_shorthand(
            &self.target,
            self.map_value_to_props.as_ref(),
            value,
            options,
            diagnostics,
        )
    }

    /// Normalizes a collection, dropping items that produce nothing.
    pub fn create_all<'a>(
        &self,
        values: impl IntoIterator<Item = &'a PropValue>,
        options: &ShorthandOptions,
        diagnostics: &Diagnostics,
    ) -> Vec<Node> {
        values
            .into_iter()
            .filter_map(|value| self.create(value, options, diagnostics))
            .collect()
    }
}

impl fmt::Debug for ShorthandFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShorthandFactory")
            .field("target", &self.target.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn div() -> Target {
        Target::tag("div").expect("tag")
    }

    fn no_props(_: &PropValue) -> Props {
        Props::new()
    }

    #[test]
    fn list_values_use_the_mapper_but_generate_no_key() {
        let (diagnostics, _) = Diagnostics::recording();
        let node = create_shorthand(
            &div(),
            &|value: &PropValue| Props::new().with("items", value.clone()),
            PropValue::from(json!(["foo"])),
            &ShorthandOptions::new(),
            &diagnostics,
        )
        .expect("node");
        assert_eq!(node.key, None);
        assert_eq!(node.props, Props::from_json(json!({ "items": ["foo"] })));
    }

    #[test]
    fn unsupported_values_report_an_error() {
        let (diagnostics, sink) = Diagnostics::recording();
        let value = PropValue::Function(sui_contract::PropFn::new(|_| PropValue::Null));
        let node = create_shorthand(&div(), &no_props, value, &ShorthandOptions::new(), &diagnostics);
        assert_eq!(node, None);
        assert_eq!(sink.len(), 1);
        assert!(sink.messages()[0].contains("found function"));
    }

    #[test]
    fn generated_keys_can_be_disabled() {
        let (diagnostics, _) = Diagnostics::recording();
        let node = create_shorthand(
            &div(),
            &no_props,
            "foo",
            &ShorthandOptions::new().without_generated_key(),
            &diagnostics,
        )
        .expect("node");
        assert_eq!(node.key, None);
    }

    #[test]
    fn prebuilt_nodes_keep_their_own_target() {
        let (diagnostics, _) = Diagnostics::recording();
        let span = Node::new(
            Target::tag("span").expect("tag"),
            Props::from_json(json!({ "children": "hi" })),
            None,
        );
        let node = create_shorthand(&div(), &no_props, span, &ShorthandOptions::new(), &diagnostics)
            .expect("node");
        assert_eq!(node.target.name(), "span");
        assert_eq!(node.children(), Some(&PropValue::from("hi")));
    }

    #[test]
    fn repeated_class_tokens_are_kept() {
        let (diagnostics, _) = Diagnostics::recording();
        let node = create_shorthand(
            &div(),
            &no_props,
            Props::from_json(json!({ "className": "item active" })),
            &ShorthandOptions::new()
                .with_defaults(Props::from_json(json!({ "className": "item" }))),
            &diagnostics,
        )
        .expect("node");
        assert_eq!(node.class_name(), Some("item item active"));
    }

    #[test]
    fn factory_rejects_invalid_targets() {
        for bad in [PropValue::Undefined, PropValue::Null, PropValue::from(123), PropValue::from(true)] {
            assert!(ShorthandFactory::from_prop(&bad, no_props).is_err());
        }
        assert!(ShorthandFactory::from_prop(&PropValue::from("div"), no_props).is_ok());
    }

    #[test]
    fn factory_collections_drop_absent_items() {
        let (diagnostics, _) = Diagnostics::recording();
        let factory = ShorthandFactory::new(div(), value_to_prop("content"));
        let values = [PropValue::from("a"), PropValue::Null, PropValue::from("b")];
        let nodes = factory.create_all(&values, &ShorthandOptions::new(), &diagnostics);
        let keys: Vec<_> = nodes.iter().map(|node| node.key.clone()).collect();
        assert_eq!(keys, vec![Some("a".to_string()), Some("b".to_string())]);
    }
}
