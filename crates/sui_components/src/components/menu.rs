use super::*;

static MENU_META: ComponentMeta = ComponentMeta::new("Menu", ComponentKind::Collection)
    .with_handled_props(&[
        "activeIndex",
        "as",
        "attached",
        "borderless",
        "children",
        "className",
        "color",
        "compact",
        "fluid",
        "inverted",
        "items",
        "onItemClick",
        "pointing",
        "secondary",
        "size",
        "stackable",
        "tabular",
        "text",
        "vertical",
        "widths",
    ]);

static ITEM_META: ComponentMeta = ComponentMeta::new("MenuItem", ComponentKind::Collection)
    .with_parent("Menu")
    .with_handled_props(&[
        "active",
        "as",
        "children",
        "className",
        "color",
        "content",
        "disabled",
        "fitted",
        "header",
        "icon",
        "index",
        "link",
        "name",
        "onClick",
        "position",
    ]);

const MENU_RULES: &[ClassNameRule] = &[
    ClassNameRule::value_only("color", sui::COLORS),
    ClassNameRule::value_only("size", sui::SIZES),
    ClassNameRule::key_or_value_and_key("attached", &["top", "bottom"]),
    ClassNameRule::key_only("borderless"),
    ClassNameRule::key_only("compact"),
    ClassNameRule::key_only("fluid"),
    ClassNameRule::key_only("inverted"),
    ClassNameRule::key_only("pointing"),
    ClassNameRule::key_only("secondary"),
    ClassNameRule::key_only("stackable"),
    ClassNameRule::key_or_value_and_key("tabular", &["right"]),
    ClassNameRule::key_only("text"),
    ClassNameRule::key_only("vertical"),
    ClassNameRule::width("widths", "item", false),
];

const ITEM_LEADING_RULES: &[ClassNameRule] = &[
    ClassNameRule::value_only("color", sui::COLORS),
    ClassNameRule::value_only("position", sui::FLOATS),
    ClassNameRule::key_only("active"),
    ClassNameRule::key_only("disabled"),
];

const ITEM_TRAILING_RULES: &[ClassNameRule] = &[
    ClassNameRule::key_only("header"),
    ClassNameRule::key_only("link"),
    ClassNameRule::key_or_value_and_key("fitted", &["horizontally", "vertically"]),
];

/// A menu displaying grouped navigation actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Menu;

impl Menu {
    /// Static descriptor.
    pub fn meta() -> &'static ComponentMeta {
        &MENU_META
    }

    /// Component reference for use as a node target.
    pub fn component() -> ComponentRef {
        ComponentRef::new(&MENU_META, Self::render)
    }

    /// Structural prop validators.
    ///
    /// # Errors
    ///
    /// Propagates validator configuration errors.
    pub fn schema() -> Result<PropSchema, ValidatorConfigError> {
        Ok(PropSchema::new()
            .prop("as", element_type_prop())
            .prop("activeIndex", kind(&[PropKind::Number])?)
            .prop("items", collection_shorthand())
            .prop("onItemClick", kind(&[PropKind::Function])?))
    }

    /// Renders the menu element. `items` shorthand expands into [`MenuItem`] nodes carrying
    /// their `index` and whether they match `activeIndex`. An `onItemClick` handler is attached
    /// to every item after the item's own `onClick`, and receives the clicked item's props.
    pub fn render(props: &Props, diagnostics: &Diagnostics) -> Option<Node> {
        check_props(&MENU_META, Self::schema, props, diagnostics);
        let target = resolve_target(&MENU_META, props, None, diagnostics)?;
        let classes = ClassNames::new()
            .token("ui")
            .rules(MENU_RULES, props, MENU_META.name, diagnostics)
            .token("menu")
            .value(props.get("className"));

        let active_index = props.get("activeIndex").and_then(PropValue::as_f64);
        let items = match props.get("items") {
            Some(PropValue::Array(items)) => items.as_slice(),
            _ => &[],
        };
        let on_item_click = match props.get("onItemClick") {
            Some(PropValue::Function(f)) => Some(f.clone()),
            _ => None,
        };
        let factory = MenuItem::factory();
        let item_nodes = items.iter().enumerate().filter_map(|(index, item)| {
            let defaults = Props::new()
                .with("index", index)
                .with("active", active_index == Some(index as f64));
            let mut options = ShorthandOptions::new().with_defaults(defaults);
            if let Some(on_item_click) = &on_item_click {
                options = options.with_overrides(item_click_overrides(on_item_click.clone()));
            }
            factory
                .create(item, &options, diagnostics)
                .map(PropValue::from)
        });
        let children = children_or(props, item_nodes);

        Some(finish(
            target,
            unhandled_props_for(&MENU_META, props),
            classes,
            children,
        ))
    }
}

/// Chains an item's own `onClick` with the menu's `onItemClick`.
fn item_click_overrides(on_item_click: PropFn) -> PropsSource {
    PropsSource::computed(move |item| {
        let own = match item.get("onClick") {
            Some(PropValue::Function(f)) => Some(f.clone()),
            _ => None,
        };
        let on_item_click = on_item_click.clone();
        Props::new().with(
            "onClick",
            PropFn::new(move |item_props| {
                if let Some(own) = &own {
                    own.call(item_props);
                }
                on_item_click.call(item_props)
            }),
        )
    })
}

/// A single entry of a [`Menu`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuItem;

impl MenuItem {
    /// Static descriptor.
    pub fn meta() -> &'static ComponentMeta {
        &ITEM_META
    }

    /// Component reference for use as a node target.
    pub fn component() -> ComponentRef {
        ComponentRef::new(&ITEM_META, Self::render)
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
                "icon",
                one_of(vec![kind(&[PropKind::Bool])?, item_shorthand()])?,
            )
            .prop("index", kind(&[PropKind::Number])?)
            .prop("name", kind(&[PropKind::String])?)
            .prop("onClick", kind(&[PropKind::Function])?))
    }

    /// Factory mapping a primitive shorthand value to both `content` and `name`.
    pub fn factory() -> ShorthandFactory {
        ShorthandFactory::new(Self::component(), |value: &PropValue| {
            Props::new()
                .with("content", value.clone())
                .with("name", value.clone())
        })
    }

    /// Normalizes menu item shorthand.
    pub fn create(
        value: impl Into<ShorthandValue>,
        options: &ShorthandOptions,
        diagnostics: &Diagnostics,
    ) -> Option<Node> {
        Self::factory().create(value, options, diagnostics)
    }

    /// Renders the item. Clickable items default to an anchor; disabled items drop their
    /// click handler. The forwarded handler is called with the item's own props. Without children, the icon shorthand is followed by `content`, or by
    /// `name` in start case.
    pub fn render(props: &Props, diagnostics: &Diagnostics) -> Option<Node> {
        check_props(&ITEM_META, Self::schema, props, diagnostics);
        let clickable = props.get("onClick").is_some_and(PropValue::is_truthy);
        let target = resolve_target(
            &ITEM_META,
            props,
            clickable.then_some("a"),
            diagnostics,
        )?;

        let truthy = |prop: &str| props.get(prop).is_some_and(PropValue::is_truthy);
        let icon = props.get("icon").filter(|icon| !icon.is_nil());
        let icon_only = icon.is_some_and(|icon| {
            icon.as_bool() == Some(true)
                || (icon.is_truthy() && !(truthy("name") || truthy("content")))
        });
        let classes = ClassNames::new()
            .rules(ITEM_LEADING_RULES, props, ITEM_META.name, diagnostics)
            .maybe(icon_only.then_some("icon"))
            .rules(ITEM_TRAILING_RULES, props, ITEM_META.name, diagnostics)
            .token("item")
            .value(props.get("className"));

        let mut rest = unhandled_props_for(&ITEM_META, props);
        if !truthy("disabled") {
            if let Some(PropValue::Function(on_click)) = props.get("onClick") {
                let on_click = on_click.clone();
                let item = props.clone();
                rest.insert("onClick", PropFn::new(move |_| on_click.call(&item)));
            }
        }

        let icon = Icon::create(icon, &ShorthandOptions::new(), diagnostics).map(PropValue::from);
        let label = match props.get("content").filter(|content| !content.is_nil()) {
            Some(content) => Some(content.clone()),
            None => props
                .get("name")
                .and_then(PropValue::as_str)
                .map(|name| PropValue::from(start_case(name))),
        };
        let children = children_or(props, icon.into_iter().chain(label));

        Some(finish(target, rest, classes, children))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn item_children(node: &Node) -> Vec<PropValue> {
        match node.children() {
            Some(PropValue::Array(children)) => children.clone(),
            other => panic!("expected generated children, found {other:?}"),
        }
    }

    /// Invokes the rendered click handler the way the view bridge does.
    fn click(node: &Node) -> PropValue {
        match node.props.get("onClick") {
            Some(PropValue::Function(on_click)) => on_click.call(&node.props),
            other => panic!("expected a click handler, found {other:?}"),
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<Props>>>, PropFn) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let handler = PropFn::new(move |item: &Props| {
            sink.borrow_mut().push(item.clone());
            PropValue::Undefined
        });
        (seen, handler)
    }

    #[test]
    fn items_expand_with_index_and_active_state() {
        let (diagnostics, sink) = Diagnostics::recording();
        let props = Props::from_json(json!({
            "items": ["inbox", { "key": "spam", "name": "spam" }, null],
            "activeIndex": 1,
            "widths": 3,
            "vertical": true,
        }));
        let node = Menu::render(&props, &diagnostics).expect("menu renders");
        assert_eq!(node.class_name(), Some("ui vertical three item menu"));

        let items = item_children(&node);
        assert_eq!(items.len(), 2);
        let inbox = items[0].as_node().expect("item node");
        assert_eq!(inbox.key.as_deref(), Some("inbox"));
        assert_eq!(inbox.target, Target::Component(MenuItem::component()));
        assert_eq!(
            inbox.props,
            Props::from_json(json!({
                "active": false,
                "content": "inbox",
                "index": 0,
                "name": "inbox",
            }))
        );
        let spam = items[1].as_node().expect("item node");
        assert_eq!(spam.key.as_deref(), Some("spam"));
        assert_eq!(spam.props.get("active"), Some(&PropValue::from(true)));
        assert!(sink.is_empty());
    }

    #[test]
    fn item_name_is_start_cased_when_content_is_absent() {
        let (diagnostics, _) = Diagnostics::recording();
        let node = MenuItem::render(
            &Props::new().with("name", "sentItems").with("active", true),
            &diagnostics,
        )
        .expect("item renders");
        assert_eq!(node.target.name(), "div");
        assert_eq!(node.class_name(), Some("active item"));
        assert_eq!(item_children(&node), vec![PropValue::from("Sent Items")]);
    }

    #[test]
    fn icon_only_items_get_the_icon_class() {
        let (diagnostics, _) = Diagnostics::recording();
        let icon_only = MenuItem::render(&Props::new().with("icon", "home"), &diagnostics)
            .expect("item renders");
        assert_eq!(icon_only.class_name(), Some("icon item"));

        let labelled = MenuItem::render(
            &Props::new().with("icon", "home").with("name", "home"),
            &diagnostics,
        )
        .expect("item renders");
        assert_eq!(labelled.class_name(), Some("item"));

        let flag = MenuItem::render(
            &Props::new().with("icon", true).with("content", "x"),
            &diagnostics,
        )
        .expect("item renders");
        assert_eq!(flag.class_name(), Some("icon item"));
        assert_eq!(item_children(&flag), vec![PropValue::from("x")]);
    }

    #[test]
    fn clickable_items_render_as_anchors_unless_disabled() {
        let (diagnostics, _) = Diagnostics::recording();
        let (seen, on_click) = recorder();
        let props = Props::new()
            .with("onClick", on_click)
            .with("fitted", "vertically")
            .with("name", "home")
            .with("index", 2);

        let node = MenuItem::render(&props, &diagnostics).expect("item renders");
        assert_eq!(node.target.name(), "a");
        assert_eq!(node.class_name(), Some("vertically fitted item"));
        click(&node);
        assert_eq!(*seen.borrow(), vec![props.clone()]);

        let disabled = MenuItem::render(&props.with("disabled", true), &diagnostics)
            .expect("item renders");
        assert_eq!(disabled.target.name(), "a");
        assert_eq!(disabled.props.get("onClick"), None);
        assert_eq!(disabled.class_name(), Some("disabled vertically fitted item"));
    }

    #[test]
    fn item_clicks_report_the_clicked_item() {
        let (diagnostics, sink) = Diagnostics::recording();
        let (own_clicks, own_on_click) = recorder();
        let (menu_clicks, on_item_click) = recorder();
        let items = PropValue::Array(vec![
            PropValue::from("inbox"),
            PropValue::from(
                Props::new()
                    .with("name", "spam")
                    .with("onClick", own_on_click),
            ),
        ]);
        let props = Props::new()
            .with("items", items)
            .with("onItemClick", on_item_click);

        let menu = Menu::render(&props, &diagnostics).expect("menu renders");
        let rendered: Vec<Node> = item_children(&menu)
            .iter()
            .map(|item| {
                let item = item.as_node().expect("item node");
                let component = item.target.as_component().expect("menu item component");
                component
                    .render(&item.props, &diagnostics)
                    .expect("item renders")
            })
            .collect();
        assert!(rendered.iter().all(|item| item.target.name() == "a"));

        click(&rendered[1]);
        click(&rendered[0]);

        let clicked: Vec<(Option<PropValue>, Option<PropValue>)> = menu_clicks
            .borrow()
            .iter()
            .map(|item| (item.get("index").cloned(), item.get("name").cloned()))
            .collect();
        assert_eq!(
            clicked,
            vec![
                (Some(PropValue::from(1)), Some(PropValue::from("spam"))),
                (Some(PropValue::from(0)), Some(PropValue::from("inbox"))),
            ]
        );
        assert_eq!(own_clicks.borrow().len(), 1);
        assert_eq!(own_clicks.borrow()[0].get("index"), Some(&PropValue::from(1)));
        assert!(sink.is_empty());
    }

    #[test]
    fn invalid_items_are_reported() {
        let (diagnostics, sink) = Diagnostics::recording();
        Menu::render(
            &Props::new().with("items", PropValue::Array(vec![PropValue::from(true)])),
            &diagnostics,
        )
        .expect("menu renders");
        assert_eq!(sink.len(), 1);
    }
}
