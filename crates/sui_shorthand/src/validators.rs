//! Composable prop contract validators.
//!
//! A [`Validator`] inspects one prop of a component in the context of all of its props and
//! either passes or returns a [`PropContractViolation`]. Violations are values, never panics;
//! [`PropSchema::check`] additionally reports them as warnings through [`Diagnostics`].
//! Constructors that take lists reject empty input with [`ValidatorConfigError`].

use std::{fmt, rc::Rc};

use serde::Serialize;
use sui_contract::{Diagnostics, PropKind, PropValue, Props, Target};
use thiserror::Error;

use crate::ValidatorConfigError;

/// The prop under validation and its surroundings.
#[derive(Debug, Clone, Copy)]
pub struct PropCheck<'a> {
    /// Every prop supplied to the component.
    pub props: &'a Props,
    /// Name of the prop under validation.
    pub prop: &'a str,
    /// Component display name.
    pub component: &'a str,
    /// Diagnostics context for side-channel warnings.
    pub diagnostics: &'a Diagnostics,
}

impl<'a> PropCheck<'a> {
    /// Bundles a check.
    pub fn new(
        props: &'a Props,
        prop: &'a str,
        component: &'a str,
        diagnostics: &'a Diagnostics,
    ) -> Self {
        Self {
            props,
            prop,
            component,
            diagnostics,
        }
    }

    /// Value of the prop under validation.
    pub fn value(&self) -> Option<&'a PropValue> {
        self.props.get(self.prop)
    }

    /// `true` when the prop holds anything other than undefined.
    pub fn is_set(&self) -> bool {
        self.props.is_set(self.prop)
    }

    /// Same check, pointed at a sibling prop.
    pub fn for_prop(&self, prop: &'a str) -> Self {
        Self { prop, ..*self }
    }
}

/// A failed prop contract. Rendering proceeds; the value is surfaced as a warning.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "violation", rename_all = "kebab-case")]
pub enum PropContractViolation {
    /// A required prop was not supplied.
    #[error("The prop `{prop}` is marked as required in `{component}`, but its value is undefined.")]
    Required {
        /// Guarded prop.
        prop: String,
        /// Component name.
        component: String,
    },
    /// The prop was supplied without the props it depends on.
    #[error("`{prop}` prop in `{component}` requires props: `{}`.", .missing.join("`, `"))]
    MissingRequired {
        /// Guarded prop.
        prop: String,
        /// Component name.
        component: String,
        /// Dependencies that were not supplied.
        missing: Vec<String>,
    },
    /// The prop was supplied together with props it excludes.
    #[error(
        "Prop `{prop}` in `{component}` conflicts with props: `{}`. They cannot be defined together, choose one or the other.",
        .conflicts.join("`, `")
    )]
    Conflicting {
        /// Guarded prop.
        prop: String,
        /// Component name.
        component: String,
        /// Excluded props that were supplied.
        conflicts: Vec<String>,
    },
    /// Every alternative of a `one_of` failed.
    #[error("One of these validators must pass:{}", numbered(.failures))]
    NoneOf {
        /// Failure of each alternative, in declaration order.
        failures: Vec<PropContractViolation>,
    },
    /// A conditional validator failed while its props shape matched.
    #[error("Given props {shape}: {inner}")]
    Given {
        /// Rendering of the matched props, e.g. `{ kind: "primary" }`.
        shape: String,
        /// The wrapped failure.
        inner: Box<PropContractViolation>,
    },
    /// The value is not in the declared list.
    #[error("Invalid prop `{prop}` of value `{value}` supplied to `{component}`, expected one of [{expected}].")]
    UndeclaredValue {
        /// Guarded prop.
        prop: String,
        /// Component name.
        component: String,
        /// Rendering of the supplied value.
        value: String,
        /// Declared values.
        expected: String,
    },
    /// The value has the wrong kind.
    #[error("Invalid prop `{prop}` of type `{found}` supplied to `{component}`, expected {expected}.")]
    InvalidKind {
        /// Guarded prop, with an index for collection items.
        prop: String,
        /// Component name.
        component: String,
        /// Kind of the supplied value.
        found: PropKind,
        /// Description of the accepted kinds.
        expected: String,
    },
}

fn numbered(failures: &[PropContractViolation]) -> String {
    failures
        .iter()
        .enumerate()
        .map(|(index, failure)| format!("\n[{}]: {failure}", index + 1))
        .collect()
}

type CheckFn = dyn Fn(&PropCheck<'_>) -> Result<(), PropContractViolation>;

/// Shared validation predicate.
#[derive(Clone)]
pub struct Validator(Rc<CheckFn>);

impl Validator {
    /// Wraps a predicate.
    pub fn new(f: impl Fn(&PropCheck<'_>) -> Result<(), PropContractViolation> + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Validator that always passes.
    pub fn any() -> Self {
        Self::new(|_| Ok(()))
    }

    /// Runs the validator against a prepared check.
    pub fn run(&self, check: &PropCheck<'_>) -> Result<(), PropContractViolation> {
        (self.0)(check)
    }

    /// Runs the validator for `prop` of `component`.
    pub fn check(
        &self,
        props: &Props,
        prop: &str,
        component: &str,
        diagnostics: &Diagnostics,
    ) -> Result<(), PropContractViolation> {
        self.run(&PropCheck::new(props, prop, component, diagnostics))
    }

    /// Fails when the prop is not set, otherwise delegates.
    pub fn required(self) -> Self {
        Self::new(move |check| {
            if !check.is_set() {
                return Err(PropContractViolation::Required {
                    prop: check.prop.to_string(),
                    component: check.component.to_string(),
                });
            }
            self.run(check)
        })
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

fn owned_names(
    names: &[&str],
    validator: &'static str,
) -> Result<Vec<String>, ValidatorConfigError> {
    if names.is_empty() {
        return Err(ValidatorConfigError::EmptyPropList { validator });
    }
    Ok(names.iter().map(|name| name.to_string()).collect())
}

/// When the prop is set, every named sibling must be set too.
///
/// # Errors
///
/// Rejects an empty name list.
pub fn require_together(names: &[&str]) -> Result<Validator, ValidatorConfigError> {
    let names = owned_names(names, "require_together")?;
    Ok(Validator::new(move |check| {
        if !check.is_set() {
            return Ok(());
        }
        let missing: Vec<String> = names
            .iter()
            .filter(|name| !check.props.is_set(name))
            .cloned()
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        Err(PropContractViolation::MissingRequired {
            prop: check.prop.to_string(),
            component: check.component.to_string(),
            missing,
        })
    }))
}

/// When the prop is set, none of the named siblings may be set.
///
/// # Errors
///
/// Rejects an empty name list.
pub fn mutually_exclusive(names: &[&str]) -> Result<Validator, ValidatorConfigError> {
    owned_names(names, "mutually_exclusive").map(disallow)
}

fn disallow(names: Vec<String>) -> Validator {
    Validator::new(move |check| {
        if !check.is_set() {
            return Ok(());
        }
        let conflicts: Vec<String> = names
            .iter()
            .filter(|name| check.props.is_set(name))
            .cloned()
            .collect();
        if conflicts.is_empty() {
            return Ok(());
        }
        Err(PropContractViolation::Conflicting {
            prop: check.prop.to_string(),
            component: check.component.to_string(),
            conflicts,
        })
    })
}

/// Passes when every validator passes; reports the first failure.
///
/// # Errors
///
/// Rejects an empty validator list.
pub fn all_of(validators: Vec<Validator>) -> Result<Validator, ValidatorConfigError> {
    if validators.is_empty() {
        return Err(ValidatorConfigError::EmptyValidatorList { validator: "all_of" });
    }
    Ok(every(validators))
}

fn every(validators: Vec<Validator>) -> Validator {
    Validator::new(move |check| validators.iter().try_for_each(|validator| validator.run(check)))
}

/// Passes when at least one validator passes; otherwise reports every failure.
///
/// # Errors
///
/// Rejects an empty validator list.
pub fn one_of(validators: Vec<Validator>) -> Result<Validator, ValidatorConfigError> {
    if validators.is_empty() {
        return Err(ValidatorConfigError::EmptyValidatorList { validator: "one_of" });
    }
    Ok(Validator::new(move |check| {
        let mut failures = Vec::with_capacity(validators.len());
        for validator in &validators {
            match validator.run(check) {
                Ok(()) => return Ok(()),
                Err(failure) => failures.push(failure),
            }
        }
        Err(PropContractViolation::NoneOf { failures })
    }))
}

/// One condition of a [`PropsShape`].
#[derive(Debug, Clone)]
pub enum ShapeEntry {
    /// The prop must equal this value. `Undefined` also matches an absent prop.
    Equals(PropValue),
    /// The validator must pass for the prop.
    Passes(Validator),
}

/// Ordered set of prop conditions gating [`only_when`].
#[derive(Debug, Clone, Default)]
pub struct PropsShape(Vec<(String, ShapeEntry)>);

impl PropsShape {
    /// Empty shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `prop` to equal `value`.
    pub fn equals(mut self, prop: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.0.push((prop.into(), ShapeEntry::Equals(value.into())));
        self
    }

    /// Requires `validator` to pass for `prop`.
    pub fn passes(mut self, prop: impl Into<String>, validator: Validator) -> Self {
        self.0.push((prop.into(), ShapeEntry::Passes(validator)));
        self
    }

    /// Returns `true` when the shape has no conditions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when every condition holds.
    pub fn matches(&self, check: &PropCheck<'_>) -> bool {
        self.0.iter().all(|(prop, entry)| match entry {
            ShapeEntry::Equals(expected) => check
                .props
                .get(prop)
                .map_or(expected.is_undefined(), |actual| actual == expected),
            ShapeEntry::Passes(validator) => validator.run(&check.for_prop(prop)).is_ok(),
        })
    }

    /// Renders the supplied values of the shape's props, e.g. `{ size: "small", active: true }`.
    pub fn describe(&self, props: &Props) -> String {
        let entries: Vec<String> = self
            .0
            .iter()
            .filter_map(|(prop, _)| {
                props
                    .get(prop)
                    .map(|value| format!("{prop}: {}", value.preview()))
            })
            .collect();
        format!("{{ {} }}", entries.join(", "))
    }
}

/// Runs `validator` only when the props match `shape`; failures name the matched values.
///
/// # Errors
///
/// Rejects an empty shape.
pub fn only_when(shape: PropsShape, validator: Validator) -> Result<Validator, ValidatorConfigError> {
    if shape.is_empty() {
        return Err(ValidatorConfigError::EmptyShape);
    }
    Ok(Validator::new(move |check| {
        if !shape.matches(check) {
            return Ok(());
        }
        validator
            .run(check)
            .map_err(|inner| PropContractViolation::Given {
                shape: shape.describe(check.props),
                inner: Box::new(inner),
            })
    }))
}

/// Warns once per message when the prop is supplied, then delegates to `validator`.
///
/// # Errors
///
/// Rejects a blank message.
pub fn deprecated_with(
    validator: Validator,
    message: impl Into<String>,
) -> Result<Validator, ValidatorConfigError> {
    let message = message.into();
    if message.trim().is_empty() {
        return Err(ValidatorConfigError::EmptyDeprecationMessage);
    }
    Ok(Validator::new(move |check| {
        if check.value().is_some_and(|value| !value.is_nil()) {
            check.diagnostics.warn_once(format!(
                "\"{}\" property of \"{}\" has been deprecated.\n{message}",
                check.prop, check.component
            ));
        }
        validator.run(check)
    }))
}

/// The prop, when set, must be one of `values`.
///
/// # Errors
///
/// Rejects an empty value list.
pub fn one_of_values(values: &[&str]) -> Result<Validator, ValidatorConfigError> {
    if values.is_empty() {
        return Err(ValidatorConfigError::EmptyValueList {
            validator: "one_of_values",
        });
    }
    let values: Vec<String> = values.iter().map(|value| value.to_string()).collect();
    Ok(Validator::new(move |check| {
        let Some(value) = check.value().filter(|value| !value.is_nil()) else {
            return Ok(());
        };
        if value.as_str().is_some_and(|value| values.iter().any(|v| v == value)) {
            return Ok(());
        }
        Err(PropContractViolation::UndeclaredValue {
            prop: check.prop.to_string(),
            component: check.component.to_string(),
            value: value.preview(),
            expected: values
                .iter()
                .map(|value| format!("\"{value}\""))
                .collect::<Vec<_>>()
                .join(", "),
        })
    }))
}

/// The prop, when set, must be one of `kinds`.
///
/// # Errors
///
/// Rejects an empty kind list.
pub fn kind(kinds: &[PropKind]) -> Result<Validator, ValidatorConfigError> {
    if kinds.is_empty() {
        return Err(ValidatorConfigError::EmptyValueList { validator: "kind" });
    }
    Ok(kind_of(kinds.to_vec()))
}

fn describe_kinds(kinds: &[PropKind]) -> String {
    kinds
        .iter()
        .map(|kind| format!("`{kind}`"))
        .collect::<Vec<_>>()
        .join(" or ")
}

fn kind_of(kinds: Vec<PropKind>) -> Validator {
    Validator::new(move |check| {
        let Some(value) = check.value().filter(|value| !value.is_nil()) else {
            return Ok(());
        };
        if kinds.contains(&value.kind()) {
            return Ok(());
        }
        Err(PropContractViolation::InvalidKind {
            prop: check.prop.to_string(),
            component: check.component.to_string(),
            found: value.kind(),
            expected: describe_kinds(&kinds),
        })
    })
}

/// The prop, when set, must be usable as a render target: a tag name or a component.
pub fn element_type_prop() -> Validator {
    Validator::new(|check| {
        let Some(value) = check.value().filter(|value| !value.is_nil()) else {
            return Ok(());
        };
        Target::from_prop(value)
            .map(|_| ())
            .map_err(|_| PropContractViolation::InvalidKind {
                prop: check.prop.to_string(),
                component: check.component.to_string(),
                found: value.kind(),
                expected: "a tag name or component".to_string(),
            })
    })
}

const CONTENT_KINDS: [PropKind; 4] = [
    PropKind::String,
    PropKind::Number,
    PropKind::Array,
    PropKind::Node,
];

const ITEM_KINDS: [PropKind; 5] = [
    PropKind::String,
    PropKind::Number,
    PropKind::Array,
    PropKind::Node,
    PropKind::Object,
];

fn no_children() -> Validator {
    disallow(vec!["children".to_string()])
}

/// Renderable content used in place of `children`.
pub fn content_shorthand() -> Validator {
    every(vec![no_children(), kind_of(CONTENT_KINDS.to_vec())])
}

/// Shorthand for a single item: a primitive, a props object or a node. Excludes `children`.
pub fn item_shorthand() -> Validator {
    every(vec![no_children(), kind_of(ITEM_KINDS.to_vec())])
}

/// A list of item shorthand values. Excludes `children`.
pub fn collection_shorthand() -> Validator {
    let items = Validator::new(|check| {
        let Some(value) = check.value().filter(|value| !value.is_nil()) else {
            return Ok(());
        };
        let PropValue::Array(items) = value else {
            return Err(PropContractViolation::InvalidKind {
                prop: check.prop.to_string(),
                component: check.component.to_string(),
                found: value.kind(),
                expected: describe_kinds(&[PropKind::Array]),
            });
        };
        for (index, item) in items.iter().enumerate() {
            if !item.is_nil() && !ITEM_KINDS.contains(&item.kind()) {
                return Err(PropContractViolation::InvalidKind {
                    prop: format!("{}[{index}]", check.prop),
                    component: check.component.to_string(),
                    found: item.kind(),
                    expected: describe_kinds(&ITEM_KINDS),
                });
            }
        }
        Ok(())
    });
    every(vec![no_children(), items])
}

/// Ordered prop validators for one component.
#[derive(Debug, Clone, Default)]
pub struct PropSchema {
    entries: Vec<(&'static str, Validator)>,
}

impl PropSchema {
    /// Empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a validator for `prop`.
    pub fn prop(mut self, prop: &'static str, validator: Validator) -> Self {
        self.entries.push((prop, validator));
        self
    }

    /// Validated prop names, in declaration order.
    pub fn props(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(prop, _)| *prop)
    }

    /// Number of validators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no validators are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs every validator, warning about and returning each violation.
    pub fn check(
        &self,
        props: &Props,
        component: &str,
        diagnostics: &Diagnostics,
    ) -> Vec<PropContractViolation> {
        let violations: Vec<PropContractViolation> = self
            .entries
            .iter()
            .filter_map(|(prop, validator)| {
                validator
                    .check(props, prop, component, diagnostics)
                    .err()
            })
            .collect();
        for violation in &violations {
            diagnostics.warn(violation.to_string());
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn props(value: serde_json::Value) -> Props {
        Props::from_json(value)
    }

    fn run(validator: &Validator, props: &Props, prop: &str) -> Result<(), PropContractViolation> {
        let (diagnostics, _) = Diagnostics::recording();
        validator.check(props, prop, "Button", &diagnostics)
    }

    fn message(result: Result<(), PropContractViolation>) -> String {
        result.expect_err("violation").to_string()
    }

    #[test]
    fn require_together_names_missing_props() {
        let validator = require_together(&["label", "icon"]).expect("valid config");
        assert_eq!(run(&validator, &props(json!({ "label": "x" })), "labelPosition"), Ok(()));
        assert_eq!(
            message(run(
                &validator,
                &props(json!({ "labelPosition": "left", "label": "x" })),
                "labelPosition"
            )),
            "`labelPosition` prop in `Button` requires props: `icon`."
        );
    }

    #[test]
    fn mutually_exclusive_names_conflicts() {
        let validator = mutually_exclusive(&["children", "icon"]).expect("valid config");
        let supplied = props(json!({ "content": "x", "children": "y", "icon": "add" }));
        assert_eq!(
            message(run(&validator, &supplied, "content")),
            "Prop `content` in `Button` conflicts with props: `children`, `icon`. \
             They cannot be defined together, choose one or the other."
        );
        assert_eq!(run(&validator, &props(json!({ "content": "x" })), "content"), Ok(()));
    }

    #[test]
    fn null_counts_as_set_and_undefined_does_not() {
        let validator = mutually_exclusive(&["children"]).expect("valid config");
        let supplied = Props::new()
            .with("content", PropValue::Null)
            .with("children", "y");
        assert!(run(&validator, &supplied, "content").is_err());
        let supplied = Props::new()
            .with("content", PropValue::Undefined)
            .with("children", "y");
        assert_eq!(run(&validator, &supplied, "content"), Ok(()));
    }

    #[test]
    fn all_of_reports_the_first_failure() {
        let validator = all_of(vec![
            kind(&[PropKind::String]).expect("kinds"),
            mutually_exclusive(&["children"]).expect("names"),
        ])
        .expect("validators");
        let supplied = props(json!({ "content": 3, "children": "y" }));
        assert_eq!(
            message(run(&validator, &supplied, "content")),
            "Invalid prop `content` of type `number` supplied to `Button`, expected `string`."
        );
    }

    #[test]
    fn one_of_aggregates_every_failure() {
        let validator = one_of(vec![
            kind(&[PropKind::String]).expect("kinds"),
            one_of_values(&["left", "right"]).expect("values"),
        ])
        .expect("validators");
        assert_eq!(run(&validator, &props(json!({ "side": "top" })), "side"), Ok(()));
        assert_eq!(
            message(run(&validator, &props(json!({ "side": 1 })), "side")),
            "One of these validators must pass:\n\
             [1]: Invalid prop `side` of type `number` supplied to `Button`, expected `string`.\n\
             [2]: Invalid prop `side` of value `1` supplied to `Button`, expected one of [\"left\", \"right\"]."
        );
    }

    #[test]
    fn only_when_runs_for_matching_shapes() {
        let validator = only_when(
            PropsShape::new().equals("kind", "primary"),
            require_together(&["icon"]).expect("names"),
        )
        .expect("shape");

        let unmatched = props(json!({ "kind": "basic", "label": "x" }));
        assert_eq!(run(&validator, &unmatched, "label"), Ok(()));

        let matched = props(json!({ "kind": "primary", "label": "x" }));
        assert_eq!(
            message(run(&validator, &matched, "label")),
            "Given props { kind: \"primary\" }: `label` prop in `Button` requires props: `icon`."
        );
    }

    #[test]
    fn only_when_accepts_validator_conditions() {
        let validator = only_when(
            PropsShape::new().passes("size", one_of_values(&["mini", "tiny"]).expect("values")),
            kind(&[PropKind::Bool]).expect("kinds"),
        )
        .expect("shape");
        assert!(run(&validator, &props(json!({ "size": "mini", "compact": "yes" })), "compact").is_err());
        assert_eq!(
            run(&validator, &props(json!({ "size": "huge", "compact": "yes" })), "compact"),
            Ok(())
        );
    }

    #[test]
    fn deprecated_with_warns_once_per_message() {
        let validator =
            deprecated_with(Validator::any(), "Use `visible` instead.").expect("message");
        let (diagnostics, sink) = Diagnostics::recording();
        let supplied = props(json!({ "hidden": true }));
        for _ in 0..2 {
            assert_eq!(validator.check(&supplied, "hidden", "Button", &diagnostics), Ok(()));
        }
        assert_eq!(
            sink.messages(),
            vec!["\"hidden\" property of \"Button\" has been deprecated.\nUse `visible` instead."]
        );

        validator
            .check(&Props::new().with("hidden", PropValue::Null), "hidden", "Button", &diagnostics)
            .expect("null passes");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn deprecated_with_still_delegates() {
        let validator = deprecated_with(kind(&[PropKind::Bool]).expect("kinds"), "Gone soon.")
            .expect("message");
        assert!(run(&validator, &props(json!({ "hidden": "yes" })), "hidden").is_err());
    }

    #[test]
    fn malformed_configuration_fails_at_construction() {
        assert_eq!(
            require_together(&[]).err(),
            Some(ValidatorConfigError::EmptyPropList {
                validator: "require_together"
            })
        );
        assert_eq!(
            one_of(Vec::new()).err(),
            Some(ValidatorConfigError::EmptyValidatorList { validator: "one_of" })
        );
        assert_eq!(
            only_when(PropsShape::new(), Validator::any()).err(),
            Some(ValidatorConfigError::EmptyShape)
        );
        assert_eq!(
            deprecated_with(Validator::any(), "  ").err(),
            Some(ValidatorConfigError::EmptyDeprecationMessage)
        );
        assert!(one_of_values(&[]).is_err());
        assert!(kind(&[]).is_err());
    }

    #[test]
    fn shorthand_validators_disallow_children() {
        let supplied = props(json!({ "content": "x", "children": "y" }));
        assert!(run(&content_shorthand(), &supplied, "content").is_err());
        assert_eq!(run(&content_shorthand(), &props(json!({ "content": 3 })), "content"), Ok(()));
        assert!(run(&content_shorthand(), &props(json!({ "content": { "a": 1 } })), "content").is_err());
        assert_eq!(run(&item_shorthand(), &props(json!({ "icon": { "name": "add" } })), "icon"), Ok(()));
    }

    #[test]
    fn collection_shorthand_checks_each_item() {
        assert_eq!(
            run(
                &collection_shorthand(),
                &props(json!({ "items": ["a", { "key": "b" }, null] })),
                "items"
            ),
            Ok(())
        );
        assert_eq!(
            message(run(&collection_shorthand(), &props(json!({ "items": ["a", true] })), "items")),
            "Invalid prop `items[1]` of type `boolean` supplied to `Button`, expected \
             `string` or `number` or `array` or `node` or `object`."
        );
        assert!(run(&collection_shorthand(), &props(json!({ "items": "a" })), "items").is_err());
    }

    #[test]
    fn element_type_prop_accepts_tags() {
        assert_eq!(run(&element_type_prop(), &props(json!({ "as": "a" })), "as"), Ok(()));
        assert!(run(&element_type_prop(), &props(json!({ "as": 1 })), "as").is_err());
    }

    #[test]
    fn violations_serialize_for_tooling() {
        let validator = only_when(
            PropsShape::new().equals("kind", "primary"),
            require_together(&["icon"]).expect("names"),
        )
        .expect("shape");
        let violation = run(&validator, &props(json!({ "kind": "primary", "label": "x" })), "label")
            .expect_err("violation");
        assert_eq!(
            serde_json::to_value(&violation).expect("serialize"),
            json!({
                "violation": "given",
                "shape": "{ kind: \"primary\" }",
                "inner": {
                    "violation": "missing-required",
                    "prop": "label",
                    "component": "Button",
                    "missing": ["icon"],
                },
            })
        );
    }

    #[test]
    fn required_fails_on_absent_props() {
        let validator = Validator::any().required();
        assert_eq!(
            message(run(&validator, &Props::new(), "name")),
            "The prop `name` is marked as required in `Button`, but its value is undefined."
        );
    }

    #[test]
    fn schema_warns_about_each_violation() {
        let schema = PropSchema::new()
            .prop("content", content_shorthand())
            .prop("size", one_of_values(&["small", "large"]).expect("values"));
        let (diagnostics, sink) = Diagnostics::recording();
        let violations = schema.check(
            &props(json!({ "content": "x", "children": "y", "size": "huge" })),
            "Button",
            &diagnostics,
        );
        assert_eq!(violations.len(), 2);
        assert_eq!(
            sink.messages(),
            violations.iter().map(ToString::to_string).collect::<Vec<_>>()
        );
        assert_eq!(schema.props().collect::<Vec<_>>(), vec!["content", "size"]);
    }
}
