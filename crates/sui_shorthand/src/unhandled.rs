use std::collections::BTreeSet;

use sui_contract::{ComponentMeta, Props};

/// Framework meta fields that are never forwarded to a rendered element.
pub const RESERVED_PROPS: &[&str] = &["key", "childKey", "_meta"];

/// Props in `supplied` that are neither `known` nor reserved, values unchanged.
pub fn unhandled_props<'a>(known: impl IntoIterator<Item = &'a str>, supplied: &Props) -> Props {
    let known: BTreeSet<&str> = known.into_iter().chain(RESERVED_PROPS.iter().copied()).collect();
    supplied
        .iter()
        .filter(|(name, _)| !known.contains(name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Pass-through props for a component, using its declared handled props.
pub fn unhandled_props_for(meta: &ComponentMeta, props: &Props) -> Props {
    unhandled_props(meta.handled_props.iter().copied(), props)
}
