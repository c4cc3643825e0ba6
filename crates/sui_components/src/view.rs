//! Leptos bridge: mounts framework-neutral node trees as views.

use std::rc::Rc;

use leptos::*;
use sui_contract::{format_number, Diagnostics, DiagnosticsConfig, Node, PropValue, Props, Target};
use sui_shorthand::console_diagnostics;

/// CSS properties whose numeric values carry no unit.
const UNITLESS_STYLES: &[&str] = &[
    "flex",
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "lineHeight",
    "opacity",
    "order",
    "zIndex",
    "zoom",
];

/// Renders a node tree. Component targets render recursively; tag targets become elements.
pub fn render_view(node: &Node, diagnostics: &Diagnostics) -> View {
    match &node.target {
        Target::Component(component) => match component.render(&node.props, diagnostics) {
            Some(rendered) => render_view(&rendered, diagnostics),
            None => ().into_view(),
        },
        Target::Tag(tag) => render_element(tag.as_str(), &node.props, diagnostics),
    }
}

fn render_element(tag: &str, props: &Props, diagnostics: &Diagnostics) -> View {
    let mut element = html::custom(html::Custom::new(tag.to_string()));
    for (name, value) in props.iter() {
        element = match (name.as_str(), value) {
            ("children", _) => element,
            ("className", value) => match value.to_token() {
                Some(class) => element.attr("class", class),
                None => element,
            },
            ("style", PropValue::Object(style)) => element.attr("style", style_text(style)),
            ("onClick", PropValue::Function(on_click)) => {
                let on_click = on_click.clone();
                let props = props.clone();
                element.on(ev::click, move |_| {
                    on_click.call(&props);
                })
            }
            (name, value) => match attribute_value(value) {
                Some(text) => element.attr(name.to_string(), text),
                None => element,
            },
        };
    }
    if let Some(children) = props.get("children") {
        element = element.child(children_view(children, diagnostics));
    }
    element.into_view()
}

fn children_view(children: &PropValue, diagnostics: &Diagnostics) -> View {
    match children {
        PropValue::Array(items) => items
            .iter()
            .map(|item| children_view(item, diagnostics))
            .collect::<Vec<_>>()
            .into_view(),
        PropValue::Node(node) => render_view(node, diagnostics),
        PropValue::String(text) => text.clone().into_view(),
        PropValue::Number(value) => format_number(*value).into_view(),
        _ => ().into_view(),
    }
}

/// Markup attribute text for a prop value; `true` becomes a bare attribute.
fn attribute_value(value: &PropValue) -> Option<String> {
    match value {
        PropValue::String(text) => Some(text.clone()),
        PropValue::Number(value) => Some(format_number(*value)),
        PropValue::Bool(true) => Some(String::new()),
        _ => None,
    }
}

/// Inline CSS text for a style object, e.g. `{ marginTop: 5 }` gives `margin-top: 5px`.
fn style_text(style: &Props) -> String {
    style
        .iter()
        .filter_map(|(property, value)| {
            let value = match value {
                PropValue::Number(n) if *n != 0.0 && !UNITLESS_STYLES.contains(&property.as_str()) => {
                    format!("{}px", format_number(*n))
                }
                other => other.to_token()?,
            };
            Some(format!("{}: {value}", kebab_case(property)))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[component]
/// Provides the diagnostics context read by [`ShorthandView`] descendants.
pub fn DiagnosticsProvider(
    #[prop(optional)] config: Option<DiagnosticsConfig>,
    children: Children,
) -> impl IntoView {
    provide_context(Rc::new(console_diagnostics(config.unwrap_or_default())));
    children().into_view()
}

thread_local! {
    static FALLBACK_DIAGNOSTICS: Rc<Diagnostics> =
        Rc::new(console_diagnostics(DiagnosticsConfig::default()));
}

/// Returns the provided diagnostics context.
///
/// Outside [`DiagnosticsProvider`] every caller shares one console-backed context with the
/// default configuration, so deprecation warnings are still emitted once per application.
pub fn use_diagnostics() -> Rc<Diagnostics> {
    use_context::<Rc<Diagnostics>>().unwrap_or_else(fallback_diagnostics)
}

fn fallback_diagnostics() -> Rc<Diagnostics> {
    FALLBACK_DIAGNOSTICS.with(Rc::clone)
}

#[component]
/// Mounts a node produced by a component or shorthand factory.
pub fn ShorthandView(node: Node) -> impl IntoView {
    let diagnostics = use_diagnostics();
    render_view(&node, &diagnostics)
}
