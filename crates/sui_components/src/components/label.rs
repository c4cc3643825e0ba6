use super::*;

static META: ComponentMeta = ComponentMeta::new("Label", ComponentKind::Element)
    .with_handled_props(&[
        "active",
        "as",
        "attached",
        "basic",
        "children",
        "circular",
        "className",
        "color",
        "content",
        "corner",
        "empty",
        "horizontal",
        "icon",
        "ribbon",
        "size",
        "tag",
    ]);

const RULES: &[ClassNameRule] = &[
    ClassNameRule::value_only("color", sui::COLORS),
    ClassNameRule::value_only("size", sui::SIZES),
    ClassNameRule::key_only("active"),
    ClassNameRule::key_only("basic"),
    ClassNameRule::key_only("circular"),
    ClassNameRule::key_only("empty"),
    ClassNameRule::key_only("horizontal"),
    ClassNameRule::key_only("tag"),
    ClassNameRule::key_or_value_and_key(
        "attached",
        &["top", "bottom", "top right", "top left", "bottom left", "bottom right"],
    ),
    ClassNameRule::key_or_value_and_key("corner", &["left", "right"]),
    ClassNameRule::key_or_value_and_key("ribbon", &["right"]),
];

/// A label displaying content classification, optionally with an icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct Label;

impl Label {
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
            .prop("content", content_shorthand())
            .prop(
                "empty",
                all_of(vec![kind(&[PropKind::Bool])?, require_together(&["circular"])?])?,
            )
            .prop("icon", item_shorthand()))
    }

    /// Factory mapping a primitive shorthand value to the `content` prop.
    pub fn factory() -> ShorthandFactory {
        ShorthandFactory::new(Self::component(), value_to_prop("content"))
    }

    /// Normalizes label shorthand.
    pub fn create(
        value: impl Into<ShorthandValue>,
        options: &ShorthandOptions,
        diagnostics: &Diagnostics,
    ) -> Option<Node> {
        Self::factory().create(value, options, diagnostics)
    }

    /// Renders the label element.
    pub fn render(props: &Props, diagnostics: &Diagnostics) -> Option<Node> {
        check_props(&META, Self::schema, props, diagnostics);
        let target = resolve_target(&META, props, None, diagnostics)?;
        let classes = ClassNames::new()
            .token("ui")
            .rules(RULES, props, META.name, diagnostics)
            .token("label")
            .value(props.get("className"));

        let icon = Icon::create(props.get("icon"), &ShorthandOptions::new(), diagnostics);
        let parts = icon
            .map(PropValue::from)
            .into_iter()
            .chain(props.get("content").cloned());
        let children = children_or(props, parts);

        Some(finish(
            target,
            unhandled_props_for(&META, props),
            classes,
            children,
        ))
    }
}
