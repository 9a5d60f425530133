//! Split-attribute editing: one timestamp, four facet fields.
//!
//! # Responsibility
//! - Define the facet vocabulary, input coercions, and per-attribute
//!   configuration for split editing.
//! - Provide the accessor that merges facet writes into a host-owned
//!   composite and derives facet reads from it.
//!
//! # Invariants
//! - The composite slot on the host is the single source of truth; cached
//!   facets are presentation state and never outlive a composite write they
//!   did not initiate.
//!
//! # See also
//! - docs/architecture/split-editing.md

pub mod accessor;
pub mod config;
pub mod facets;
pub mod input;
pub mod params;
pub mod parse;
