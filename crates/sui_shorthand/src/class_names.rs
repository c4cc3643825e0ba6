//! Prop-to-class-token derivation.
//!
//! The free functions are the raw patterns; [`ClassNameRule`] pairs a pattern with the prop's
//! declared values so undeclared values are reported while rendering proceeds with the value
//! as given.

use std::fmt;

use sui_contract::{Diagnostics, PropValue, Props};

use crate::{numeral, sui};

/// `key` when the value is truthy, e.g. `disabled`.
pub fn key_only(value: &PropValue, key: &str) -> Option<String> {
    value.is_truthy().then(|| key.to_string())
}

/// The stringified value alone, e.g. `color="red"` gives `red`.
pub fn value_only(value: &PropValue) -> Option<String> {
    value.to_token()
}

/// `"<value> <key>"`, with `true` emitting only `key`, e.g. `attached="top"` gives
/// `top attached`.
pub fn key_and_value(value: &PropValue, key: &str) -> Option<String> {
    match value {
        PropValue::Bool(true) => Some(key.to_string()),
        _ => value.to_token().map(|token| format!("{token} {key}")),
    }
}

/// `true` gives `key`, a declared value gives `"<value> <key>"`, `false` or unset gives nothing.
///
/// Shares its output with [`key_and_value`]; the two differ in which values the declaration
/// admits (booleans are only declared for this pattern).
pub fn key_or_value_and_key(value: &PropValue, key: &str) -> Option<String> {
    key_and_value(value, key)
}

/// `justified` alone, otherwise `"<value> aligned"`.
pub fn text_align(value: &PropValue) -> Option<String> {
    match value.as_str() {
        Some("justified") => Some("justified".to_string()),
        _ => value.to_token().map(|token| format!("{token} aligned")),
    }
}

/// `"<value> aligned"`.
pub fn vertical_align(value: &PropValue) -> Option<String> {
    value.to_token().map(|token| format!("{token} aligned"))
}

/// Numeral-bearing width, e.g. `3` with `wide` gives `three wide`.
///
/// With `can_equal`, the value `equal` gives `equal width`.
pub fn width(value: &PropValue, width_class: &str, can_equal: bool) -> Option<String> {
    if can_equal && value.as_str() == Some("equal") {
        return Some("equal width".to_string());
    }
    let word = numeral::number_to_word(value)?;
    if width_class.is_empty() {
        Some(word)
    } else {
        Some(format!("{word} {width_class}"))
    }
}

/// Concatenates class values in order, dropping blanks. Repeated tokens are kept.
pub fn join_class_names<'a>(values: impl IntoIterator<Item = &'a PropValue>) -> Option<String> {
    let tokens: Vec<String> = values
        .into_iter()
        .filter_map(PropValue::to_token)
        .flat_map(|value| value.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect();
    (!tokens.is_empty()).then(|| tokens.join(" "))
}

/// Ordered class-token accumulator, joined with single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames(Vec<String>);

impl ClassNames {
    /// Starts an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token unless it is blank.
    pub fn token(mut self, token: impl AsRef<str>) -> Self {
        let token = token.as_ref().trim();
        if !token.is_empty() {
            self.0.push(token.to_string());
        }
        self
    }

    /// Appends an optional token.
    pub fn maybe<S: AsRef<str>>(self, token: Option<S>) -> Self {
        match token {
            Some(token) => self.token(token),
            None => self,
        }
    }

    /// Appends a user-supplied `className` value.
    pub fn value(self, value: Option<&PropValue>) -> Self {
        self.maybe(value.and_then(PropValue::to_token))
    }

    /// Appends the output of every rule, in order.
    pub fn rules(
        mut self,
        rules: &[ClassNameRule],
        props: &Props,
        component: &str,
        diagnostics: &Diagnostics,
    ) -> Self {
        for rule in rules {
            self = self.maybe(rule.derive(props, component, diagnostics));
        }
        self
    }

    /// Returns `true` when no token was added.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joined class string.
    pub fn build(&self) -> String {
        self.0.join(" ")
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// How a prop value becomes class tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassPattern {
    /// See [`key_only`].
    KeyOnly,
    /// See [`value_only`].
    ValueOnly,
    /// See [`key_and_value`].
    KeyAndValue,
    /// See [`key_or_value_and_key`].
    KeyOrValueAndKey,
    /// See [`text_align`].
    TextAlign,
    /// See [`vertical_align`].
    VerticalAlign,
    /// See [`width`].
    Width {
        /// Class appended after the word, e.g. `wide`.
        class: &'static str,
        /// Accept `equal`.
        can_equal: bool,
    },
}

/// Declared values for a class-bearing prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedValues {
    /// Booleans only.
    Flag,
    /// One of the listed strings.
    Listed(&'static [&'static str]),
    /// One of the listed strings or `true`.
    ListedOrTrue(&'static [&'static str]),
    /// A boolean or one of the listed strings.
    FlagOrListed(&'static [&'static str]),
    /// A numeral width, optionally `equal`.
    Widths {
        /// Accept `equal`.
        equal: bool,
    },
    /// Anything.
    Any,
}

impl AllowedValues {
    /// Returns `true` when `value` is declared.
    pub fn accepts(&self, value: &PropValue) -> bool {
        let listed = |list: &[&str]| {
            value
                .to_token()
                .is_some_and(|token| list.contains(&token.as_str()))
        };
        match self {
            Self::Flag => value.as_bool().is_some(),
            Self::Listed(list) => listed(list),
            Self::ListedOrTrue(list) => value.as_bool() == Some(true) || listed(list),
            Self::FlagOrListed(list) => value.as_bool().is_some() || listed(list),
            Self::Widths { equal } => {
                (*equal && value.as_str() == Some("equal")) || numeral::is_width(value)
            }
            Self::Any => true,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Flag => "a boolean".to_string(),
            Self::Listed(list) => format!("one of: {}", list.join(", ")),
            Self::ListedOrTrue(list) => format!("true or one of: {}", list.join(", ")),
            Self::FlagOrListed(list) => format!("a boolean or one of: {}", list.join(", ")),
            Self::Widths { equal: true } => "a width from 1 to 16 or equal".to_string(),
            Self::Widths { equal: false } => "a width from 1 to 16".to_string(),
            Self::Any => "any value".to_string(),
        }
    }
}

/// Declarative association between a prop, its declared values and its class pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassNameRule {
    /// Prop read from the component's props.
    pub prop: &'static str,
    /// Token emitted alongside or instead of the value.
    pub key: &'static str,
    /// Derivation pattern.
    pub pattern: ClassPattern,
    /// Declared values.
    pub allowed: AllowedValues,
}

impl ClassNameRule {
    /// Boolean flag emitting the prop name.
    pub const fn key_only(prop: &'static str) -> Self {
        Self {
            prop,
            key: prop,
            pattern: ClassPattern::KeyOnly,
            allowed: AllowedValues::Flag,
        }
    }

    /// Value emitted alone.
    pub const fn value_only(prop: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            prop,
            key: prop,
            pattern: ClassPattern::ValueOnly,
            allowed: AllowedValues::Listed(allowed),
        }
    }

    /// Value followed by the prop name.
    pub const fn key_and_value(prop: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            prop,
            key: prop,
            pattern: ClassPattern::KeyAndValue,
            allowed: AllowedValues::ListedOrTrue(allowed),
        }
    }

    /// Prop name alone for `true`, value and prop name for a declared value.
    pub const fn key_or_value_and_key(prop: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            prop,
            key: prop,
            pattern: ClassPattern::KeyOrValueAndKey,
            allowed: AllowedValues::FlagOrListed(allowed),
        }
    }

    /// Text alignment.
    pub const fn text_align(prop: &'static str) -> Self {
        Self {
            prop,
            key: "aligned",
            pattern: ClassPattern::TextAlign,
            allowed: AllowedValues::Listed(sui::TEXT_ALIGNMENTS),
        }
    }

    /// Vertical alignment.
    pub const fn vertical_align(prop: &'static str) -> Self {
        Self {
            prop,
            key: "aligned",
            pattern: ClassPattern::VerticalAlign,
            allowed: AllowedValues::Listed(sui::VERTICAL_ALIGNMENTS),
        }
    }

    /// Numeral width followed by `class`.
    pub const fn width(prop: &'static str, class: &'static str, can_equal: bool) -> Self {
        Self {
            prop,
            key: class,
            pattern: ClassPattern::Width { class, can_equal },
            allowed: AllowedValues::Widths { equal: can_equal },
        }
    }

    /// Overrides the emitted key token.
    pub const fn with_key(mut self, key: &'static str) -> Self {
        self.key = key;
        self
    }

    /// Applies the pattern without checking declared values.
    pub fn apply(&self, value: &PropValue) -> Option<String> {
        match self.pattern {
            ClassPattern::KeyOnly => key_only(value, self.key),
            ClassPattern::ValueOnly => value_only(value),
            ClassPattern::KeyAndValue => key_and_value(value, self.key),
            ClassPattern::KeyOrValueAndKey => key_or_value_and_key(value, self.key),
            ClassPattern::TextAlign => text_align(value),
            ClassPattern::VerticalAlign => vertical_align(value),
            ClassPattern::Width { class, can_equal } => width(value, class, can_equal),
        }
    }

    /// Reads the prop, warns when its value is undeclared, and applies the pattern.
    pub fn derive(&self, props: &Props, component: &str, diagnostics: &Diagnostics) -> Option<String> {
        let value = props.get(self.prop).filter(|value| !value.is_nil())?;
        if !self.allowed.accepts(value) {
            diagnostics.warn(format!(
                "`{}` prop in `{component}` has an undeclared value {}, expected {}.",
                self.prop,
                value.preview(),
                self.allowed.describe()
            ));
        }
        self.apply(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    const FITTED: ClassNameRule =
        ClassNameRule::key_or_value_and_key("fitted", &["horizontally", "vertically"]);

    #[test]
    fn key_only_emits_prop_name_for_true() {
        assert_eq!(key_only(&PropValue::from(true), "disabled").as_deref(), Some("disabled"));
        assert_eq!(key_only(&PropValue::from(false), "disabled"), None);
        assert_eq!(key_only(&PropValue::Undefined, "disabled"), None);
    }

    #[test]
    fn value_only_emits_bare_value() {
        assert_eq!(value_only(&PropValue::from("red")).as_deref(), Some("red"));
        assert_eq!(value_only(&PropValue::from(true)), None);
    }

    #[test]
    fn key_and_value_orders_value_first() {
        assert_eq!(
            key_and_value(&PropValue::from("top"), "attached").as_deref(),
            Some("top attached")
        );
        assert_eq!(key_and_value(&PropValue::from(true), "attached").as_deref(), Some("attached"));
    }

    #[test]
    fn key_or_value_and_key_never_emits_boolean_words() {
        let (diagnostics, sink) = Diagnostics::recording();
        let derive = |value: serde_json::Value| {
            FITTED.derive(
                &Props::from_json(json!({ "fitted": value })),
                "MenuItem",
                &diagnostics,
            )
        };
        assert_eq!(derive(json!(true)).as_deref(), Some("fitted"));
        assert_eq!(derive(json!("horizontally")).as_deref(), Some("horizontally fitted"));
        assert_eq!(derive(json!(false)), None);
        assert!(sink.is_empty());
    }

    #[test]
    fn undeclared_values_warn_but_still_render() {
        let (diagnostics, sink) = Diagnostics::recording();
        let rule = ClassNameRule::value_only("color", sui::COLORS);
        let class = rule.derive(
            &Props::from_json(json!({ "color": "chartreuse" })),
            "Label",
            &diagnostics,
        );
        assert_eq!(class.as_deref(), Some("chartreuse"));
        assert_eq!(sink.len(), 1);
        assert!(sink.messages()[0].contains("`color` prop in `Label`"));
    }

    #[test]
    fn alignment_builders() {
        assert_eq!(text_align(&PropValue::from("justified")).as_deref(), Some("justified"));
        assert_eq!(text_align(&PropValue::from("center")).as_deref(), Some("center aligned"));
        assert_eq!(vertical_align(&PropValue::from("middle")).as_deref(), Some("middle aligned"));
    }

    #[test]
    fn width_maps_numerals_to_words() {
        assert_eq!(width(&PropValue::from(3), "wide", false).as_deref(), Some("three wide"));
        assert_eq!(width(&PropValue::from("3"), "wide", false).as_deref(), Some("three wide"));
        assert_eq!(width(&PropValue::from("three"), "", false).as_deref(), Some("three"));
        assert_eq!(
            width(&PropValue::from("equal"), "column", true).as_deref(),
            Some("equal width")
        );
        assert_eq!(width(&PropValue::from(true), "wide", false), None);
    }

    #[test]
    fn class_names_skip_blanks() {
        let classes = ClassNames::new()
            .token("ui")
            .maybe(None::<&str>)
            .token("  ")
            .value(Some(&PropValue::from("extra")))
            .token("menu");
        assert_eq!(classes.build(), "ui extra menu");
    }

    #[test]
    fn join_class_names_keeps_every_token_in_order() {
        let values = [
            PropValue::from("a b"),
            PropValue::Undefined,
            PropValue::from(" b  c "),
        ];
        assert_eq!(join_class_names(&values).as_deref(), Some("a b b c"));
        assert_eq!(join_class_names(&[PropValue::from("")]), None);
    }
}
