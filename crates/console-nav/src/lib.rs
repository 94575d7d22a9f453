//! # Console Nav
//!
//! Navigation layer for the agent console. Owns the literal route table,
//! the symbolic view names, and the dispatch glue between them:
//!
//! - [`table::ROUTES`] — the seven console routes, immutable after start-up
//! - [`ViewName`] / [`ViewRegistry`] — symbolic names mapped to view factories
//! - [`HistoryAdapter`] — seam to the external navigation-stack owner
//! - [`Navigator`] — resolves paths and hands [`Screen`]s to the surface
//!
//! Resolution itself lives in the `console-router` crate; this crate only
//! configures and drives it.
//!
//! ## Example
//!
//! ```
//! use console_nav::{MemoryHistory, Navigator, ViewName};
//! use console_nav::views::default_registry;
//!
//! let mut nav = Navigator::new(default_registry(), MemoryHistory::new());
//!
//! let screen = nav.navigate("/agents").unwrap();
//! assert_eq!(screen.name, ViewName::Agents);
//!
//! // Unregistered paths surface a no-match error; the fallback display is
//! // the rendering layer's call.
//! assert!(nav.navigate("/does-not-exist").is_err());
//! ```

pub mod history;
pub mod navigator;
pub mod table;
pub mod view;
pub mod views;

pub use history::{HistoryAdapter, MemoryHistory};
pub use navigator::{NavError, Navigator, Screen};
pub use view::{View, ViewFactory, ViewName, ViewRegistry};

// Re-export the resolver surface callers interact with directly.
pub use console_router::{NoMatchError, Params, ResolvedRoute, RouteTable, UrlError};
