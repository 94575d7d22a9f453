//! View names, the view seam, and the factory registry.
//!
//! Views are external, opaque renderable units. The navigation layer never
//! holds a view directly; the route table carries a [`ViewName`] and the
//! registry maps it to a factory at dispatch time.

use std::collections::HashMap;
use std::fmt;

use console_router::Params;
use serde::{Deserialize, Serialize};

/// Symbolic identifier for every renderable view in the console.
///
/// The route table stores these instead of view instances, so the table can
/// live in process-wide immutable state while views stay externally owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewName {
    Dashboard,
    Agents,
    Mcps,
    Chat,
    Tester,
    ComponentLibrary,
    Settings,
}

impl ViewName {
    /// Every view name, in route-table order.
    pub const ALL: [ViewName; 7] = [
        ViewName::Dashboard,
        ViewName::Agents,
        ViewName::Mcps,
        ViewName::Chat,
        ViewName::Tester,
        ViewName::ComponentLibrary,
        ViewName::Settings,
    ];

    /// The stable string form, matching the route names in the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::Dashboard => "Dashboard",
            ViewName::Agents => "Agents",
            ViewName::Mcps => "Mcps",
            ViewName::Chat => "Chat",
            ViewName::Tester => "Tester",
            ViewName::ComponentLibrary => "ComponentLibrary",
            ViewName::Settings => "Settings",
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque renderable unit, invoked with the parameters bound during
/// resolution. Rendering internals are out of scope for the navigation layer.
pub trait View {
    /// Human-readable title for the rendering surface.
    fn title(&self) -> &str;

    /// Renders the view with the resolved path parameters.
    fn render(&self, params: &Params) -> String;
}

/// Constructor for a view instance.
pub type ViewFactory = fn() -> Box<dyn View>;

/// Start-up-time table mapping a [`ViewName`] to its view constructor.
///
/// Built once during initialization and immutable afterwards.
///
/// # Examples
///
/// ```
/// use console_nav::{ViewName, ViewRegistry};
/// use console_nav::views::DashboardView;
///
/// let registry =
///     ViewRegistry::new().register(ViewName::Dashboard, || Box::new(DashboardView));
/// assert!(registry.contains(ViewName::Dashboard));
/// assert!(!registry.contains(ViewName::Settings));
/// ```
#[derive(Default, Clone)]
pub struct ViewRegistry {
    factories: HashMap<ViewName, ViewFactory>,
}

impl ViewRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory for a view name (chainable).
    pub fn register(mut self, name: ViewName, factory: ViewFactory) -> Self {
        self.factories.insert(name, factory);
        self
    }

    /// Whether a factory is registered for the name.
    pub fn contains(&self, name: ViewName) -> bool {
        self.factories.contains_key(&name)
    }

    /// Instantiates the view for a name, if registered.
    pub fn instantiate(&self, name: ViewName) -> Option<Box<dyn View>> {
        self.factories.get(&name).map(|factory| factory())
    }
}
