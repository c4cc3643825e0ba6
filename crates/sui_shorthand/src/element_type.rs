use sui_contract::{ComponentMeta, PropValue, Props, Target};

use crate::ShorthandError;

/// Resolves the element a component renders as.
///
/// An `as` prop that differs from the component's declared default wins. Otherwise
/// `computed_default` (a component-specific choice such as `a` for clickable items) applies,
/// then `a` when `href` is truthy, then the declared default tag.
///
/// # Errors
///
/// Returns [`ShorthandError::InvalidTarget`] when `as` is neither a tag name nor a component.
pub fn element_type(
    meta: &ComponentMeta,
    props: &Props,
    computed_default: Option<&str>,
) -> Result<Target, ShorthandError> {
    if let Some(as_prop) = props.get("as").filter(|value| value.is_truthy()) {
        if as_prop.as_str().is_none() || as_prop.as_str() != meta.default_as {
            return Ok(Target::from_prop(as_prop)?);
        }
    }

    if let Some(tag) = computed_default {
        return Ok(Target::tag(tag)?);
    }

    if props.get("href").is_some_and(PropValue::is_truthy) {
        return Ok(Target::tag("a")?);
    }

    Ok(Target::tag(meta.default_tag())?)
}
