//! The console's literal route table.
//!
//! Seven routes, matched in this order. The `bare` meta flag marks routes
//! rendered without the application chrome (currently only the tester).

use console_router::{RouteDefinition, RouteTable};
use once_cell::sync::Lazy;

use crate::view::ViewName;

/// Process-wide immutable route table, built once on first use.
pub static ROUTES: Lazy<RouteTable<ViewName>> = Lazy::new(|| {
    RouteTable::builder()
        .route(RouteDefinition::new("/", "Dashboard", ViewName::Dashboard))
        .route(RouteDefinition::new("/agents", "Agents", ViewName::Agents))
        .route(RouteDefinition::new("/mcps", "Mcps", ViewName::Mcps))
        .route(RouteDefinition::new("/chat/:agentId?", "Chat", ViewName::Chat))
        .route(
            RouteDefinition::new("/tester/:agentId?", "Tester", ViewName::Tester)
                .with_meta("bare", true),
        )
        .route(RouteDefinition::new(
            "/components",
            "ComponentLibrary",
            ViewName::ComponentLibrary,
        ))
        .route(RouteDefinition::new("/settings", "Settings", ViewName::Settings))
        .build()
        .expect("static route table is valid")
});
