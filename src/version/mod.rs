//! Version parsing, ordering and pattern resolution
//!
//! This module turns loosely structured version strings (not limited to
//! semantic versioning) into a structural model that can be ordered, matched
//! against wildcard patterns and resolved against a list of available versions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │   Segment   │────▶│ Identifier  │────▶│     Resolver     │
//! │  (parse)    │     │(order/match)│     │ (newest match)   │
//! └─────────────┘     └─────────────┘     └──────────────────┘
//!        │                   │                      ▲
//!        ▼                   ▼                      │
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │   Letters   │     │    Range    │     │     Catalog      │
//! │  (phases)   │     │ ([1.0,2.0)) │     │ (sorted versions)│
//! └─────────────┘     └─────────────┘     └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Catalog trait supplying sorted versions per tool
//! - [`error`]: Error types for parsing and resolution
//! - [`identifier`]: `VersionIdentifier`, the parsed version or pattern
//! - [`letters`]: Letter suffix of a segment and wildcard markers
//! - [`phase`]: Ranked release phases (snapshot, alpha, beta, ...)
//! - [`range`]: `GenericVersionRange` trait and interval ranges
//! - [`resolver`]: Pattern resolution and descending sort
//! - [`result`]: Comparison and match result vocabularies
//! - [`segment`]: Segment chain produced by parsing
//! - [`specifier`]: Version-or-range specification entered by users

pub mod catalog;
pub mod error;
pub mod identifier;
pub mod letters;
pub mod phase;
pub mod range;
pub mod resolver;
pub mod result;
pub mod segment;
pub mod specifier;

pub use error::VersionError;
pub use identifier::{LATEST, LATEST_UNSTABLE, VersionIdentifier};
pub use letters::VersionLetters;
pub use phase::VersionPhase;
pub use range::{BoundaryType, GenericVersionRange, VersionRange};
pub use resolver::{resolve_version_pattern, sort_descending};
pub use result::{VersionComparisonResult, VersionMatchResult};
pub use specifier::VersionSpecifier;
