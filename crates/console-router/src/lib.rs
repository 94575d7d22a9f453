//! # Console Router
//!
//! An ordered route-table resolver for single-page navigation:
//! - Literal segments (`/agents`), matched case-sensitively
//! - Required parameters (`/users/:id`)
//! - Trailing optional parameters (`/chat/:agentId?`)
//! - Open per-route metadata (`serde_json::Value` values)
//! - URL generation from a route name plus parameter values
//!
//! The table is built once at application start and is immutable thereafter.
//! Definitions are matched in insertion order and the first full match wins;
//! there is no priority re-sorting. Resolution is a pure function of the
//! table and the input path.
//!
//! The table is generic over the view handle `V` — typically a symbolic enum
//! the application maps to a renderable unit. The table holds the handle,
//! never the view itself.
//!
//! ## Example
//!
//! ```
//! use console_router::{RouteDefinition, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .route(RouteDefinition::new("/", "Home", "home-view"))
//!     .route(RouteDefinition::new("/chat/:agentId?", "Chat", "chat-view"))
//!     .build()
//!     .unwrap();
//!
//! let resolved = table.resolve("/chat/42").unwrap();
//! assert_eq!(resolved.name, "Chat");
//! assert_eq!(resolved.params.get("agentId"), Some(&"42".to_string()));
//!
//! let resolved = table.resolve("/chat").unwrap();
//! assert!(resolved.params.is_empty());
//! ```

use std::collections::HashMap;

pub mod error;
pub mod path;
pub mod route;

pub use error::{NoMatchError, TableError, UrlError};
pub use route::{ParamKind, PatternSegment};

/// Path parameters bound during resolution, keyed by parameter name.
pub type Params = HashMap<String, String>;

/// Open per-route metadata: string keys to arbitrary JSON values.
pub type RouteMeta = HashMap<String, serde_json::Value>;

// ============================================================================
// Route Definition
// ============================================================================

/// An immutable rule mapping a path pattern to a view handle.
///
/// Built with [`RouteDefinition::new`] and optionally decorated with
/// metadata via [`with_meta`](RouteDefinition::with_meta). The pattern is
/// parsed and validated when the definition is added to a table, not here.
///
/// # Examples
///
/// ```
/// use console_router::RouteDefinition;
///
/// let route = RouteDefinition::new("/tester/:agentId?", "Tester", "tester-view")
///     .with_meta("bare", true);
/// assert_eq!(route.name(), "Tester");
/// ```
#[derive(Debug, Clone)]
pub struct RouteDefinition<V> {
    pattern: String,
    name: String,
    view: V,
    meta: RouteMeta,
}

impl<V> RouteDefinition<V> {
    /// Creates a route definition.
    ///
    /// `view` is the handle the application resolves to a renderable unit;
    /// the table stores it but never interprets it.
    pub fn new(pattern: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            pattern: pattern.into(),
            name: name.into(),
            view,
            meta: RouteMeta::new(),
        }
    }

    /// Sets a metadata key-value pair (chainable).
    ///
    /// # Examples
    ///
    /// ```
    /// use console_router::RouteDefinition;
    ///
    /// let route = RouteDefinition::new("/print", "Print", "print-view")
    ///     .with_meta("bare", true)
    ///     .with_meta("title", "Print preview");
    /// ```
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// The raw pattern string, e.g. `/chat/:agentId?`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The unique symbolic identifier for programmatic navigation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view handle this route dispatches to.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The route's metadata mapping.
    pub fn meta(&self) -> &RouteMeta {
        &self.meta
    }
}

// ============================================================================
// Resolved Route
// ============================================================================

/// The outcome of a successful resolution: what to render and with what.
///
/// Borrows from the table; the only owned piece is the parameter bindings
/// extracted from the request path.
#[derive(Debug)]
pub struct ResolvedRoute<'t, V> {
    /// Name of the matched route.
    pub name: &'t str,
    /// View handle of the matched route.
    pub view: &'t V,
    /// Parameters bound from the path. Unsupplied optional parameters are
    /// absent, not empty strings.
    pub params: Params,
    /// Static metadata of the matched route.
    pub meta: &'t RouteMeta,
}

impl<V> ResolvedRoute<'_, V> {
    /// Reads a boolean metadata flag, defaulting to `false` when the key is
    /// absent or not a boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_router::{RouteDefinition, RouteTable};
    ///
    /// let table = RouteTable::builder()
    ///     .route(RouteDefinition::new("/tester", "Tester", "t").with_meta("bare", true))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(table.resolve("/tester").unwrap().meta_flag("bare"));
    /// assert!(!table.resolve("/tester").unwrap().meta_flag("missing"));
    /// ```
    pub fn meta_flag(&self, key: &str) -> bool {
        matches!(self.meta.get(key), Some(serde_json::Value::Bool(true)))
    }
}

// ============================================================================
// Route Table
// ============================================================================

/// Internal pairing of a definition with its parsed segments.
#[derive(Debug, Clone)]
struct CompiledRoute<V> {
    def: RouteDefinition<V>,
    segments: Vec<PatternSegment>,
}

impl<V> CompiledRoute<V> {
    /// Structural match against pre-split path segments.
    ///
    /// Literals compare exactly, required parameters bind one segment, a
    /// trailing optional parameter binds zero or one. The full input must be
    /// consumed for the match to count.
    fn match_segments(&self, path_segments: &[&str]) -> Option<Params> {
        let mut params = Params::new();
        let mut idx = 0;

        for segment in &self.segments {
            match segment {
                PatternSegment::Literal(literal) => match path_segments.get(idx) {
                    Some(s) if *s == literal.as_str() => idx += 1,
                    _ => return None,
                },
                PatternSegment::Param {
                    name,
                    kind: ParamKind::Required,
                } => {
                    let value = path_segments.get(idx)?;
                    params.insert(name.clone(), (*value).to_string());
                    idx += 1;
                }
                PatternSegment::Param {
                    name,
                    kind: ParamKind::Optional,
                } => {
                    if let Some(value) = path_segments.get(idx) {
                        params.insert(name.clone(), (*value).to_string());
                        idx += 1;
                    }
                }
            }
        }

        // Leftover path segments mean no match.
        if idx == path_segments.len() {
            Some(params)
        } else {
            None
        }
    }
}

/// An ordered, immutable collection of route definitions.
///
/// Constructed once via [`RouteTable::builder`] and never mutated afterwards.
/// Matching walks the table in insertion order and stops at the first
/// definition that consumes the whole path.
///
/// # Examples
///
/// ```
/// use console_router::{RouteDefinition, RouteTable};
///
/// let table = RouteTable::builder()
///     .route(RouteDefinition::new("/agents", "Agents", "agents-view"))
///     .route(RouteDefinition::new("/settings", "Settings", "settings-view"))
///     .build()
///     .unwrap();
///
/// assert_eq!(table.resolve("/agents").unwrap().name, "Agents");
/// assert!(table.resolve("/does-not-exist").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<CompiledRoute<V>>,
    by_name: HashMap<String, usize>,
}

impl<V> RouteTable<V> {
    /// Starts building a route table.
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// Resolves a request path to a route, binding path parameters.
    ///
    /// The path is normalized first (trailing slash, repeated separators),
    /// then matched structurally against each definition in table order.
    /// Pure: no side effects, resolving the same path twice yields identical
    /// results.
    ///
    /// # Errors
    ///
    /// [`NoMatchError`] when no definition matches the full path. The table
    /// defines no fallback route itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_router::{RouteDefinition, RouteTable};
    ///
    /// let table = RouteTable::builder()
    ///     .route(RouteDefinition::new("/chat/:agentId?", "Chat", "chat-view"))
    ///     .build()
    ///     .unwrap();
    ///
    /// // Trailing slash is tolerated via normalization
    /// assert_eq!(table.resolve("/chat/42/").unwrap().params["agentId"], "42");
    /// ```
    pub fn resolve(&self, request_path: &str) -> Result<ResolvedRoute<'_, V>, NoMatchError> {
        let normalized = path::normalize(request_path);
        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

        let hit = self.routes.iter().find_map(|route| {
            route
                .match_segments(&segments)
                .map(|params| ResolvedRoute {
                    name: route.def.name.as_str(),
                    view: &route.def.view,
                    params,
                    meta: &route.def.meta,
                })
        });

        match hit {
            Some(resolved) => {
                tracing::debug!(
                    route = resolved.name,
                    params = resolved.params.len(),
                    path = %normalized,
                    "resolved route"
                );
                Ok(resolved)
            }
            None => {
                tracing::debug!(path = %normalized, "no route matched");
                Err(NoMatchError {
                    path: normalized.into_owned(),
                })
            }
        }
    }

    /// Looks up a definition by its unique name.
    pub fn route_by_name(&self, name: &str) -> Option<&RouteDefinition<V>> {
        self.by_name.get(name).map(|&idx| &self.routes[idx].def)
    }

    /// Generates a URL for a named route by substituting parameters.
    ///
    /// Optional parameters are emitted when supplied and omitted otherwise.
    ///
    /// # Errors
    ///
    /// [`UrlError::UnknownRoute`] when no route has the given name;
    /// [`UrlError::MissingParam`] when a required parameter is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_router::{Params, RouteDefinition, RouteTable};
    ///
    /// let table = RouteTable::builder()
    ///     .route(RouteDefinition::new("/chat/:agentId?", "Chat", "chat-view"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut params = Params::new();
    /// assert_eq!(table.url_for("Chat", &params).unwrap(), "/chat");
    ///
    /// params.insert("agentId".to_string(), "42".to_string());
    /// assert_eq!(table.url_for("Chat", &params).unwrap(), "/chat/42");
    /// ```
    pub fn url_for(&self, name: &str, params: &Params) -> Result<String, UrlError> {
        let idx = self
            .by_name
            .get(name)
            .copied()
            .ok_or_else(|| UrlError::UnknownRoute(name.to_string()))?;
        let route = &self.routes[idx];

        let mut url = String::new();
        for segment in &route.segments {
            match segment {
                PatternSegment::Literal(literal) => {
                    url.push('/');
                    url.push_str(literal);
                }
                PatternSegment::Param {
                    name: param,
                    kind: ParamKind::Required,
                } => {
                    let value = params.get(param).ok_or_else(|| UrlError::MissingParam {
                        route: name.to_string(),
                        param: param.clone(),
                    })?;
                    url.push('/');
                    url.push_str(value);
                }
                PatternSegment::Param {
                    name: param,
                    kind: ParamKind::Optional,
                } => {
                    if let Some(value) = params.get(param) {
                        url.push('/');
                        url.push_str(value);
                    }
                }
            }
        }

        if url.is_empty() {
            url.push('/');
        }
        Ok(url)
    }

    /// All definitions, in match order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteDefinition<V>> {
        self.routes.iter().map(|route| &route.def)
    }

    /// Number of definitions in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no definitions.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`RouteTable`]; collects definitions and validates on `build`.
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    routes: Vec<RouteDefinition<V>>,
}

impl<V> RouteTableBuilder<V> {
    /// Appends a route definition. Order is significant: earlier definitions
    /// win when patterns overlap.
    pub fn route(mut self, def: RouteDefinition<V>) -> Self {
        self.routes.push(def);
        self
    }

    /// Appends several definitions at once, preserving their order.
    pub fn routes<I>(mut self, defs: I) -> Self
    where
        I: IntoIterator<Item = RouteDefinition<V>>,
    {
        self.routes.extend(defs);
        self
    }

    /// Validates and finalizes the table.
    ///
    /// # Errors
    ///
    /// [`TableError::DuplicateName`] when two routes share a name;
    /// [`TableError::InvalidPattern`] when a pattern fails to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_router::{RouteDefinition, RouteTable, TableError};
    ///
    /// let err = RouteTable::builder()
    ///     .route(RouteDefinition::new("/a", "Dup", "a"))
    ///     .route(RouteDefinition::new("/b", "Dup", "b"))
    ///     .build()
    ///     .unwrap_err();
    /// assert_eq!(err, TableError::DuplicateName("Dup".to_string()));
    /// ```
    pub fn build(self) -> Result<RouteTable<V>, TableError> {
        let mut routes = Vec::with_capacity(self.routes.len());
        let mut by_name = HashMap::with_capacity(self.routes.len());

        for def in self.routes {
            let segments = route::parse_pattern(&def.pattern)?;
            if by_name.insert(def.name.clone(), routes.len()).is_some() {
                return Err(TableError::DuplicateName(def.name));
            }
            routes.push(CompiledRoute { def, segments });
        }

        Ok(RouteTable { routes, by_name })
    }
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        RouteTable::builder()
    }
}
