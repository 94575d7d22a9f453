//! Placeholder view implementations.
//!
//! The real rendering surface owns the actual views; these minimal stand-ins
//! keep the navigation layer exercisable end to end (and give tests something
//! concrete to dispatch into).

use console_router::Params;

use crate::view::{View, ViewName, ViewRegistry};

macro_rules! placeholder_view {
    ($ty:ident, $title:expr) => {
        pub struct $ty;

        impl View for $ty {
            fn title(&self) -> &str {
                $title
            }

            fn render(&self, params: &Params) -> String {
                if params.is_empty() {
                    format!("[{}]", self.title())
                } else {
                    let mut bound: Vec<String> =
                        params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                    bound.sort();
                    format!("[{} {}]", self.title(), bound.join(" "))
                }
            }
        }
    };
}

placeholder_view!(DashboardView, "Dashboard");
placeholder_view!(AgentsView, "Agents");
placeholder_view!(McpsView, "MCP Servers");
placeholder_view!(ChatView, "Chat");
placeholder_view!(TesterView, "Agent Tester");
placeholder_view!(ComponentLibraryView, "Component Library");
placeholder_view!(SettingsView, "Settings");

/// Registry wiring every [`ViewName`] to its placeholder view.
pub fn default_registry() -> ViewRegistry {
    ViewRegistry::new()
        .register(ViewName::Dashboard, || Box::new(DashboardView))
        .register(ViewName::Agents, || Box::new(AgentsView))
        .register(ViewName::Mcps, || Box::new(McpsView))
        .register(ViewName::Chat, || Box::new(ChatView))
        .register(ViewName::Tester, || Box::new(TesterView))
        .register(ViewName::ComponentLibrary, || Box::new(ComponentLibraryView))
        .register(ViewName::Settings, || Box::new(SettingsView))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_covers_every_view() {
        let registry = default_registry();
        for name in ViewName::ALL {
            assert!(registry.contains(name), "missing factory for {}", name);
        }
    }

    #[test]
    fn render_includes_bound_params() {
        let view = ChatView;
        let mut params = Params::new();
        params.insert("agentId".to_string(), "42".to_string());
        assert_eq!(view.render(&params), "[Chat agentId=42]");
        assert_eq!(view.render(&Params::new()), "[Chat]");
    }
}
