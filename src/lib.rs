//! Resolves the closest available protocol definition for a peer-reported
//! version string.
//!
//! Peers report versions in an irregular format that mixes semver syntax
//! with a commit-hash suffix (e.g. `"0.5.1-beta commit=abcdef-0.5.1-beta.rc2"`).
//! This crate normalizes such strings into comparable semantic versions and
//! picks the best matching entry from a catalog of protocol definition files.

pub mod catalog;
pub mod config;
pub mod version;
