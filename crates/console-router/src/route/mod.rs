//! Route pattern model.
//!
//! Pure components for parsing route patterns into typed segments. Matching
//! lives on [`RouteTable`](crate::RouteTable); this module only defines the
//! parsed form.

pub mod pattern;

pub use pattern::{parse_pattern, ParamKind, PatternSegment};
