use super::*;

static META: ComponentMeta = ComponentMeta::new("Icon", ComponentKind::Element)
    .with_handled_props(&[
        "as",
        "bordered",
        "circular",
        "className",
        "color",
        "disabled",
        "fitted",
        "flipped",
        "inverted",
        "link",
        "loading",
        "name",
        "rotated",
        "size",
    ])
    .with_default_as("i");

const RULES: &[ClassNameRule] = &[
    ClassNameRule::value_only("color", sui::COLORS),
    ClassNameRule {
        prop: "name",
        key: "name",
        pattern: ClassPattern::ValueOnly,
        allowed: AllowedValues::Any,
    },
    ClassNameRule::value_only("size", sui::SIZES),
    ClassNameRule::key_only("bordered"),
    ClassNameRule::key_only("circular"),
    ClassNameRule::key_only("disabled"),
    ClassNameRule::key_only("fitted"),
    ClassNameRule::key_only("inverted"),
    ClassNameRule::key_only("link"),
    ClassNameRule::key_only("loading"),
    ClassNameRule::key_and_value("flipped", &["horizontally", "vertically"]),
    ClassNameRule::key_and_value("rotated", &["clockwise", "counterclockwise"]),
];

/// An icon glyph from the framework's icon font, rendered as an `i` element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Icon;

impl Icon {
    /// Static descriptor.
    pub fn meta() -> &'static ComponentMeta {
        &META
    }

    /// Component reference for use as a node target.
    pub fn component() -> ComponentRef {
        ComponentRef::new(&META, Self::render)
    }

    /// Structural prop validators.
    ///
    /// # Errors
    ///
    /// Propagates validator configuration errors.
    pub fn schema() -> Result<PropSchema, ValidatorConfigError> {
        Ok(PropSchema::new()
            .prop("as", element_type_prop())
            .prop("name", kind(&[PropKind::String])?))
    }

    /// Factory mapping a primitive shorthand value to the `name` prop.
    pub fn factory() -> ShorthandFactory {
        ShorthandFactory::new(Self::component(), value_to_prop("name"))
    }

    /// Normalizes icon shorthand, e.g. `"cloud"` or `{ name: "cloud", color: "blue" }`.
    pub fn create(
        value: impl Into<ShorthandValue>,
        options: &ShorthandOptions,
        diagnostics: &Diagnostics,
    ) -> Option<Node> {
        Self::factory().create(value, options, diagnostics)
    }

    /// Renders the icon element.
    pub fn render(props: &Props, diagnostics: &Diagnostics) -> Option<Node> {
        check_props(&META, Self::schema, props, diagnostics);
        let target = resolve_target(&META, props, None, diagnostics)?;
        let classes = ClassNames::new()
            .rules(RULES, props, META.name, diagnostics)
            .token("icon")
            .value(props.get("className"));
        let mut rest = unhandled_props_for(&META, props);
        rest.insert("aria-hidden", "true");
        Some(finish(target, rest, classes, None))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn classes_follow_prop_order() {
        let (diagnostics, sink) = Diagnostics::recording();
        let props = Props::from_json(json!({
            "name": "cloud",
            "color": "blue",
            "size": "large",
            "loading": true,
            "disabled": false,
            "flipped": "horizontally",
            "className": "extra",
        }));
        let node = Icon::render(&props, &diagnostics).expect("icon renders");
        assert_eq!(node.target.name(), "i");
        assert_eq!(
            node.class_name(),
            Some("blue cloud large loading horizontally flipped icon extra")
        );
        assert_eq!(node.props.get("aria-hidden"), Some(&PropValue::from("true")));
        assert!(sink.is_empty());
    }

    #[test]
    fn shorthand_maps_strings_to_names() {
        let (diagnostics, _) = Diagnostics::recording();
        let node = Icon::create("add", &ShorthandOptions::new(), &diagnostics).expect("node");
        assert_eq!(node.key.as_deref(), Some("add"));
        assert_eq!(node.target, Target::Component(Icon::component()));
        let rendered = Icon::render(&node.props, &diagnostics).expect("icon renders");
        assert_eq!(rendered.class_name(), Some("add icon"));
    }

    #[test]
    fn undeclared_values_warn_but_still_render() {
        let (diagnostics, sink) = Diagnostics::recording();
        let node = Icon::render(&Props::new().with("color", "chartreuse"), &diagnostics)
            .expect("icon renders");
        assert_eq!(node.class_name(), Some("chartreuse icon"));
        assert_eq!(sink.len(), 1);
    }
}
