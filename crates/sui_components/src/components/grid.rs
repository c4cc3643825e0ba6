use super::*;

static META: ComponentMeta = ComponentMeta::new("GridColumn", ComponentKind::Collection)
    .with_parent("Grid")
    .with_handled_props(&[
        "as",
        "children",
        "className",
        "color",
        "computer",
        "floated",
        "largeScreen",
        "mobile",
        "only",
        "stretched",
        "tablet",
        "textAlign",
        "verticalAlign",
        "widescreen",
        "width",
    ]);

const RULES: &[ClassNameRule] = &[
    ClassNameRule::value_only("color", sui::COLORS),
    ClassNameRule::key_only("stretched"),
    ClassNameRule::key_and_value(
        "only",
        &["computer", "large screen", "mobile", "tablet mobile", "tablet", "widescreen"],
    ),
    ClassNameRule::text_align("textAlign"),
    ClassNameRule::vertical_align("verticalAlign"),
    ClassNameRule::key_and_value("floated", sui::FLOATS),
    ClassNameRule::width("computer", "wide computer", false),
    ClassNameRule::width("largeScreen", "wide large screen", false),
    ClassNameRule::width("mobile", "wide mobile", false),
    ClassNameRule::width("tablet", "wide tablet", false),
    ClassNameRule::width("widescreen", "wide widescreen", false),
    ClassNameRule::width("width", "wide", false),
];

/// A column of a grid, sized in sixteenths per device class.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridColumn;

impl GridColumn {
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
        Ok(PropSchema::new().prop("as", element_type_prop()))
    }

    /// Factory mapping a primitive shorthand value to `children`.
    pub fn factory() -> ShorthandFactory {
        ShorthandFactory::new(Self::component(), value_to_prop("children"))
    }

    /// Normalizes column shorthand.
    pub fn create(
        value: impl Into<ShorthandValue>,
        options: &ShorthandOptions,
        diagnostics: &Diagnostics,
    ) -> Option<Node> {
        Self::factory().create(value, options, diagnostics)
    }

    /// Renders the column element.
    pub fn render(props: &Props, diagnostics: &Diagnostics) -> Option<Node> {
        check_props(&META, Self::schema, props, diagnostics);
        let target = resolve_target(&META, props, None, diagnostics)?;
        let classes = ClassNames::new()
            .rules(RULES, props, META.name, diagnostics)
            .token("column")
            .value(props.get("className"));
        let children = children_or(props, None);
        Some(finish(
            target,
            unhandled_props_for(&META, props),
            classes,
            children,
        ))
    }
}
