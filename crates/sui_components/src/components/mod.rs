//! Reference components: icon, label, menu, menu item and grid column.
//!
//! Each component exposes its static descriptor, a [`ComponentRef`], a prop schema, a shorthand
//! factory and its render function. Declared values of class-bearing props are checked by
//! their [`ClassNameRule`]s; the schemas cover the structural props.

use std::mem;

use sui_shorthand::{
    class_names::{AllowedValues, ClassPattern},
    element_type, sui, unhandled_props_for,
    validators::{
        all_of, collection_shorthand, content_shorthand, element_type_prop, item_shorthand, kind,
        one_of, require_together,
    },
    value_to_prop, ClassNameRule, ClassNames, ComponentKind, ComponentMeta, ComponentRef,
    Diagnostics, Node, PropFn, PropKind, PropSchema, PropValue, Props, PropsSource,
    ShorthandFactory, ShorthandOptions, ShorthandValue, Target, ValidatorConfigError,
};

mod grid;
mod icon;
mod label;
mod menu;

pub use grid::GridColumn;
pub use icon::Icon;
pub use label::Label;
pub use menu::{Menu, MenuItem};

/// Runs the component's schema when diagnostics are enabled.
fn check_props(
    meta: &ComponentMeta,
    schema: fn() -> Result<PropSchema, ValidatorConfigError>,
    props: &Props,
    diagnostics: &Diagnostics,
) {
    if !diagnostics.is_enabled() {
        return;
    }
    match schema() {
        Ok(schema) => {
            schema.check(props, meta.name, diagnostics);
        }
        Err(err) => diagnostics.error(format!("`{}` has an invalid prop schema: {err}", meta.name)),
    }
}

/// Resolves the rendered element, reporting a bad `as` prop instead of rendering.
fn resolve_target(
    meta: &ComponentMeta,
    props: &Props,
    computed_default: Option<&str>,
    diagnostics: &Diagnostics,
) -> Option<Target> {
    element_type(meta, props, computed_default)
        .map_err(|err| diagnostics.error(format!("`{}` cannot render: {err}", meta.name)))
        .ok()
}

/// Explicit children win; otherwise the shorthand parts, when any were produced.
fn children_or(props: &Props, parts: impl IntoIterator<Item = PropValue>) -> Option<PropValue> {
    if let Some(children) = props.get("children").filter(|children| !children.is_nil()) {
        return Some(children.clone());
    }
    let parts: Vec<PropValue> = parts.into_iter().filter(|part| !part.is_nil()).collect();
    (!parts.is_empty()).then_some(PropValue::Array(parts))
}

/// Assembles the rendered node from pass-through props, the class list and children.
fn finish(target: Target, mut rest: Props, classes: ClassNames, children: Option<PropValue>) -> Node {
    rest.insert("className", classes.build());
    if let Some(children) = children {
        rest.insert("children", children);
    }
    Node::new(target, rest, None)
}

/// Display label derived from an identifier: `sentItems` and `sent_items` become `Sent Items`.
fn start_case(name: &str) -> String {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut after_lower = false;
    for ch in name.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(mem::take(&mut current));
            }
            after_lower = false;
            continue;
        }
        if ch.is_uppercase() && after_lower {
            words.push(mem::take(&mut current));
        }
        current.push(ch);
        after_lower = ch.is_lowercase() || ch.is_numeric();
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn start_case_splits_identifiers() {
        assert_eq!(start_case("inbox"), "Inbox");
        assert_eq!(start_case("sentItems"), "Sent Items");
        assert_eq!(start_case("sent_items"), "Sent Items");
        assert_eq!(start_case("--home--page"), "Home Page");
        assert_eq!(start_case(""), "");
    }

    #[test]
    fn explicit_children_replace_shorthand_parts() {
        let props = Props::new().with("children", "text");
        assert_eq!(
            children_or(&props, [PropValue::from("ignored")]),
            Some(PropValue::from("text"))
        );
        assert_eq!(children_or(&Props::new(), [PropValue::Null]), None);
        assert_eq!(
            children_or(&Props::new(), [PropValue::from("a")]),
            Some(PropValue::Array(vec![PropValue::from("a")]))
        );
    }
}
