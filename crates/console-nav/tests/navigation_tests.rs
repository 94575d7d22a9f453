//! Integration tests for the console navigation layer.
//!
//! Exercises the literal route table end to end through the navigator:
//! the seven console routes, optional agent parameters, the bare tester
//! layout flag, programmatic navigation by name, and history behavior.

use console_nav::views::default_registry;
use console_nav::{MemoryHistory, NavError, Navigator, Params, ViewName, ViewRegistry};
use console_nav::table::ROUTES;
use pretty_assertions::assert_eq;

fn navigator() -> Navigator<MemoryHistory> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    Navigator::new(default_registry(), MemoryHistory::new())
}

#[test]
fn every_literal_route_resolves_to_its_view() {
    let mut nav = navigator();
    let cases = [
        ("/", ViewName::Dashboard),
        ("/agents", ViewName::Agents),
        ("/mcps", ViewName::Mcps),
        ("/chat", ViewName::Chat),
        ("/tester", ViewName::Tester),
        ("/components", ViewName::ComponentLibrary),
        ("/settings", ViewName::Settings),
    ];

    for (path, expected) in cases {
        let screen = nav.navigate(path).unwrap();
        assert_eq!(screen.name, expected, "path {}", path);
        assert!(screen.params.is_empty(), "path {}", path);
    }
}

#[test]
fn chat_binds_optional_agent_id() {
    let mut nav = navigator();

    let screen = nav.navigate("/chat/42").unwrap();
    assert_eq!(screen.name, ViewName::Chat);
    assert_eq!(screen.params.get("agentId"), Some(&"42".to_string()));

    let screen = nav.navigate("/chat").unwrap();
    assert_eq!(screen.name, ViewName::Chat);
    assert!(screen.params.is_empty());
}

#[test]
fn tester_is_bare_with_and_without_agent() {
    let mut nav = navigator();

    let screen = nav.navigate("/tester/7").unwrap();
    assert_eq!(screen.name, ViewName::Tester);
    assert_eq!(screen.params.get("agentId"), Some(&"7".to_string()));
    assert!(screen.bare);

    let screen = nav.navigate("/tester").unwrap();
    assert!(screen.bare);

    // No other route carries the flag
    let screen = nav.navigate("/chat/7").unwrap();
    assert!(!screen.bare);
}

#[test]
fn unregistered_path_fails_without_touching_history() {
    let mut nav = navigator();
    nav.navigate("/agents").unwrap();

    let err = nav.navigate("/does-not-exist").unwrap_err();
    assert!(matches!(err, NavError::NoMatch(_)));
    assert_eq!(nav.current_path(), "/agents");
}

#[test]
fn resolution_is_idempotent() {
    let mut nav = navigator();
    let first = nav.navigate("/chat/42").unwrap();
    let second = nav.navigate("/chat/42").unwrap();
    assert_eq!(first.name, second.name);
    assert_eq!(first.params, second.params);
    assert_eq!(first.bare, second.bare);
    assert_eq!(first.render(), second.render());
}

#[test]
fn navigate_by_name() {
    let mut nav = navigator();

    let screen = nav.navigate_to(ViewName::Chat, &[("agentId", "42")]).unwrap();
    assert_eq!(screen.name, ViewName::Chat);
    assert_eq!(nav.current_path(), "/chat/42");

    // Optional parameter omitted
    let screen = nav.navigate_to(ViewName::Chat, &[]).unwrap();
    assert!(screen.params.is_empty());
    assert_eq!(nav.current_path(), "/chat");
}

#[test]
fn back_re_resolves_previous_entry() {
    let mut nav = navigator();
    nav.navigate("/agents").unwrap();
    nav.navigate("/tester/7").unwrap();

    let screen = nav.back().unwrap().unwrap();
    assert_eq!(screen.name, ViewName::Agents);
    assert_eq!(nav.current_path(), "/agents");

    let screen = nav.back().unwrap().unwrap();
    assert_eq!(screen.name, ViewName::Dashboard);
    assert!(nav.back().is_none());
}

#[test]
fn navigation_normalizes_paths_before_history() {
    let mut nav = navigator();
    let screen = nav.navigate("/chat/42/").unwrap();
    assert_eq!(screen.params["agentId"], "42");
    assert_eq!(nav.current_path(), "/chat/42");
}

#[test]
fn missing_view_factory_is_an_error() {
    // Registry deliberately missing the settings view
    let registry = ViewRegistry::new();
    let mut nav = Navigator::new(registry, MemoryHistory::new());

    let err = nav.navigate("/settings").unwrap_err();
    assert!(matches!(err, NavError::UnregisteredView(ViewName::Settings)));
}

#[test]
fn url_for_matches_table_patterns() {
    let mut params = Params::new();
    assert_eq!(ROUTES.url_for("Dashboard", &params).unwrap(), "/");
    assert_eq!(ROUTES.url_for("Tester", &params).unwrap(), "/tester");

    params.insert("agentId".to_string(), "9".to_string());
    assert_eq!(ROUTES.url_for("Tester", &params).unwrap(), "/tester/9");
}

#[test]
fn placeholder_views_render_with_params() {
    let mut nav = navigator();
    assert_eq!(nav.navigate("/").unwrap().render(), "[Dashboard]");
    assert_eq!(nav.navigate("/chat/42").unwrap().render(), "[Chat agentId=42]");
}
