use serde::Serialize;

/// Category a component belongs to in the CSS framework's taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// Library additions with no framework counterpart.
    Addon,
    /// Behaviors.
    Behavior,
    /// Collections (menus, grids, forms).
    Collection,
    /// Elements (icons, labels, buttons).
    Element,
    /// Modules (dropdowns, modals).
    Module,
    /// Views (cards, items).
    View,
}

/// Statically declared component descriptor.
///
/// Every component attaches one of these at definition time; conformance checks and the
/// unhandled-props extractor read it instead of introspecting the component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentMeta {
    /// Display name, e.g. `MenuItem`.
    pub name: &'static str,
    /// Taxonomy category.
    pub kind: ComponentKind,
    /// Parent component name for sub-components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<&'static str>,
    /// Props the component consumes itself; everything else is passed through.
    pub handled_props: &'static [&'static str],
    /// Tag rendered when no `as` prop is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_as: Option<&'static str>,
}

impl ComponentMeta {
    /// Starts a descriptor with no parent, no handled props and the default tag.
    pub const fn new(name: &'static str, kind: ComponentKind) -> Self {
        Self {
            name,
            kind,
            parent: None,
            handled_props: &[],
            default_as: None,
        }
    }

    /// Sets the parent component name.
    pub const fn with_parent(mut self, parent: &'static str) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the handled prop list.
    pub const fn with_handled_props(mut self, handled_props: &'static [&'static str]) -> Self {
        self.handled_props = handled_props;
        self
    }

    /// Sets the default rendered tag.
    pub const fn with_default_as(mut self, tag: &'static str) -> Self {
        self.default_as = Some(tag);
        self
    }

    /// Returns `true` when the component consumes `prop` itself.
    pub fn handles(&self, prop: &str) -> bool {
        self.handled_props.contains(&prop)
    }

    /// Default tag, `div` when none was declared.
    pub fn default_tag(&self) -> &'static str {
        self.default_as.unwrap_or("div")
    }
}
