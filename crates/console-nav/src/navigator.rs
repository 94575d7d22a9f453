//! Navigation dispatch: table + registry + history.
//!
//! Data flow per navigation: path string → table resolution → view
//! instantiation → [`Screen`] handed to the rendering surface. History
//! mutation happens only after resolution succeeds, so a failed navigation
//! leaves the stack untouched.

use console_router::{path, NoMatchError, Params, RouteTable, UrlError};
use thiserror::Error;
use tracing::{info, warn};

use crate::history::HistoryAdapter;
use crate::view::{View, ViewName, ViewRegistry};

/// Navigation failures surfaced to the rendering layer.
#[derive(Debug, Error)]
pub enum NavError {
    /// The path matched no route; the caller decides the fallback display.
    #[error(transparent)]
    NoMatch(#[from] NoMatchError),

    /// Programmatic navigation named an unknown route or omitted a required
    /// parameter.
    #[error(transparent)]
    Url(#[from] UrlError),

    /// The route resolved but no view factory is registered for it.
    #[error("no view registered for {0}")]
    UnregisteredView(ViewName),
}

/// What the rendering surface receives after a successful navigation.
pub struct Screen {
    /// Which route produced this screen.
    pub name: ViewName,
    /// Freshly instantiated view.
    pub view: Box<dyn View>,
    /// Parameters bound from the path.
    pub params: Params,
    /// Render without the application chrome (`bare: true` route meta).
    pub bare: bool,
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("bare", &self.bare)
            .finish_non_exhaustive()
    }
}

impl Screen {
    /// Renders the view with the bound parameters.
    pub fn render(&self) -> String {
        self.view.render(&self.params)
    }
}

/// Drives navigation for the console.
///
/// Generic over the history implementation; production wires the
/// browser-backed adapter, tests wire [`MemoryHistory`](crate::MemoryHistory).
///
/// # Examples
///
/// ```
/// use console_nav::{MemoryHistory, Navigator, ViewName};
/// use console_nav::views::default_registry;
///
/// let mut nav = Navigator::new(default_registry(), MemoryHistory::new());
///
/// let screen = nav.navigate("/chat/42").unwrap();
/// assert_eq!(screen.name, ViewName::Chat);
/// assert_eq!(screen.params["agentId"], "42");
/// assert!(!screen.bare);
/// ```
pub struct Navigator<H: HistoryAdapter> {
    table: &'static RouteTable<ViewName>,
    registry: ViewRegistry,
    history: H,
}

impl<H: HistoryAdapter> Navigator<H> {
    /// Creates a navigator over the console's static route table.
    pub fn new(registry: ViewRegistry, history: H) -> Self {
        Self::with_table(&crate::table::ROUTES, registry, history)
    }

    /// Creates a navigator over an explicit table (tests, embedded tables).
    pub fn with_table(
        table: &'static RouteTable<ViewName>,
        registry: ViewRegistry,
        history: H,
    ) -> Self {
        Self {
            table,
            registry,
            history,
        }
    }

    /// Navigates to a request path, pushing it onto history on success.
    pub fn navigate(&mut self, request_path: &str) -> Result<Screen, NavError> {
        let normalized = path::normalize(request_path).into_owned();
        let screen = match self.resolve_screen(&normalized) {
            Ok(screen) => screen,
            Err(err) => {
                warn!(path = %normalized, error = %err, "navigation failed");
                return Err(err);
            }
        };

        self.history.push(&normalized);
        info!(path = %normalized, view = %screen.name, bare = screen.bare, "navigated");
        Ok(screen)
    }

    /// Programmatic navigation: route name plus parameter values.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_nav::{MemoryHistory, Navigator, ViewName};
    /// use console_nav::views::default_registry;
    ///
    /// let mut nav = Navigator::new(default_registry(), MemoryHistory::new());
    ///
    /// let screen = nav.navigate_to(ViewName::Tester, &[("agentId", "7")]).unwrap();
    /// assert!(screen.bare);
    /// assert_eq!(nav.current_path(), "/tester/7");
    /// ```
    pub fn navigate_to(
        &mut self,
        name: ViewName,
        params: &[(&str, &str)],
    ) -> Result<Screen, NavError> {
        let params: Params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let url = self.table.url_for(name.as_str(), &params)?;
        self.navigate(&url)
    }

    /// Steps back one history entry and re-resolves it, without pushing.
    ///
    /// Returns `None` at the start of the stack.
    pub fn back(&mut self) -> Option<Result<Screen, NavError>> {
        let previous = self.history.back()?.to_string();
        info!(path = %previous, "navigated back");
        Some(self.resolve_screen(&previous))
    }

    /// The path currently on top of the history stack.
    pub fn current_path(&self) -> &str {
        self.history.current_path()
    }

    /// Resolution and view instantiation, with no history side effects.
    fn resolve_screen(&self, normalized: &str) -> Result<Screen, NavError> {
        let resolved = self.table.resolve(normalized)?;
        let name = *resolved.view;
        let view = self
            .registry
            .instantiate(name)
            .ok_or(NavError::UnregisteredView(name))?;

        let bare = resolved.meta_flag("bare");
        Ok(Screen {
            name,
            view,
            params: resolved.params,
            bare,
        })
    }
}
