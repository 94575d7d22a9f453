//! Pattern parsing for route segments.
//!
//! Pure parsing of `:name` / `:name?` route patterns into typed segments.
//! Parsing happens once, at table construction; matching works on the parsed
//! form and never re-inspects the pattern string.

use crate::error::TableError;

/// Whether a parameter segment must be present in the request path.
///
/// An explicit tag instead of a `?`-suffix convention on the name: once the
/// pattern is parsed, nothing downstream string-sniffs for optionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Binds exactly one path segment.
    Required,
    /// Binds zero or one path segment; only valid as the trailing segment.
    Optional,
}

/// One parsed segment of a route pattern.
///
/// # Examples
///
/// ```
/// use console_router::route::pattern::{parse_pattern, ParamKind, PatternSegment};
///
/// let segments = parse_pattern("/chat/:agentId?").unwrap();
/// assert_eq!(segments[0], PatternSegment::Literal("chat".to_string()));
/// assert_eq!(
///     segments[1],
///     PatternSegment::Param {
///         name: "agentId".to_string(),
///         kind: ParamKind::Optional,
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Static text; must match the request segment exactly (case-sensitive).
    Literal(String),
    /// Named parameter; binds the request segment to `name`.
    Param { name: String, kind: ParamKind },
}

impl PatternSegment {
    /// Returns the parameter name, if this is a parameter segment.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegment::Param { name, .. } => Some(name),
            PatternSegment::Literal(_) => None,
        }
    }
}

/// Parses a route pattern into typed segments (pure function).
///
/// # Pattern syntax
///
/// - `/agents` — literal segments, matched case-sensitively
/// - `/users/:id` — required parameter
/// - `/chat/:agentId?` — optional parameter, trailing position only
///
/// The root pattern `/` parses to an empty segment list.
///
/// # Errors
///
/// Returns [`TableError::InvalidPattern`] when the pattern does not start
/// with `/`, a parameter has an empty name, an optional parameter is not the
/// trailing segment, or two parameters share a name.
///
/// # Examples
///
/// ```
/// use console_router::route::pattern::parse_pattern;
///
/// assert_eq!(parse_pattern("/").unwrap().len(), 0);
/// assert_eq!(parse_pattern("/agents").unwrap().len(), 1);
/// assert!(parse_pattern("agents").is_err());
/// assert!(parse_pattern("/:id?/edit").is_err());
/// ```
pub fn parse_pattern(pattern: &str) -> Result<Vec<PatternSegment>, TableError> {
    let invalid = |reason: &'static str| TableError::InvalidPattern {
        pattern: pattern.to_string(),
        reason,
    };

    if !pattern.starts_with('/') {
        return Err(invalid("pattern must start with '/'"));
    }

    let raw: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let mut segments = Vec::with_capacity(raw.len());
    let mut seen_params: Vec<&str> = Vec::new();

    for (idx, seg) in raw.iter().enumerate() {
        let parsed = match seg.strip_prefix(':') {
            Some(param) => {
                let (name, kind) = match param.strip_suffix('?') {
                    Some(name) => (name, ParamKind::Optional),
                    None => (param, ParamKind::Required),
                };
                if name.is_empty() {
                    return Err(invalid("parameter segment has an empty name"));
                }
                if kind == ParamKind::Optional && idx != raw.len() - 1 {
                    return Err(invalid("optional parameter must be the trailing segment"));
                }
                if seen_params.contains(&name) {
                    return Err(invalid("duplicate parameter name in pattern"));
                }
                seen_params.push(name);
                PatternSegment::Param {
                    name: name.to_string(),
                    kind,
                }
            }
            None => PatternSegment::Literal(seg.to_string()),
        };
        segments.push(parsed);
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_root() {
        assert_eq!(parse_pattern("/").unwrap(), vec![]);
    }

    #[test]
    fn parse_literal() {
        let segments = parse_pattern("/agents").unwrap();
        assert_eq!(segments, vec![PatternSegment::Literal("agents".to_string())]);
    }

    #[test]
    fn parse_required_param() {
        let segments = parse_pattern("/users/:id").unwrap();
        assert_eq!(
            segments[1],
            PatternSegment::Param {
                name: "id".to_string(),
                kind: ParamKind::Required,
            }
        );
    }

    #[test]
    fn parse_trailing_optional_param() {
        let segments = parse_pattern("/chat/:agentId?").unwrap();
        assert_eq!(
            segments[1],
            PatternSegment::Param {
                name: "agentId".to_string(),
                kind: ParamKind::Optional,
            }
        );
    }

    #[test]
    fn reject_missing_leading_slash() {
        let err = parse_pattern("agents").unwrap_err();
        assert!(matches!(err, TableError::InvalidPattern { .. }));
    }

    #[test]
    fn reject_empty_param_name() {
        assert!(parse_pattern("/:").is_err());
        assert!(parse_pattern("/chat/:?").is_err());
    }

    #[test]
    fn reject_non_trailing_optional() {
        assert!(parse_pattern("/:id?/edit").is_err());
    }

    #[test]
    fn reject_duplicate_param_names() {
        assert!(parse_pattern("/:id/x/:id").is_err());
    }

    #[test]
    fn param_name_accessor() {
        let segments = parse_pattern("/users/:id").unwrap();
        assert_eq!(segments[0].param_name(), None);
        assert_eq!(segments[1].param_name(), Some("id"));
    }
}
