//! Version resolution layer for peer-reported protocol versions
//!
//! This module provides the core functionality for normalizing irregular
//! peer-reported version strings and selecting the closest matching entry
//! from a catalog of protocol definition versions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Normalizer  │────▶│  Selector   │◀────│   Config    │
//! │  (clean)    │     │   (rank)    │     │  (bounds)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                   ▲
//!        └─────────┬─────────┘
//!            ┌─────────────┐
//!            │  Resolver   │
//!            │ (orchestrate)│
//!            └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`normalizer`]: Peer version string cleanup into comparable semver
//! - [`selector`]: Closest-candidate ranking with build-number refinement
//! - [`resolver`]: Public resolution surface tying the two together
//! - [`semver`]: Shared loose-parsing utilities
//! - [`error`]: Error types for normalization

pub mod error;
pub mod normalizer;
pub mod resolver;
pub mod selector;
pub mod semver;
