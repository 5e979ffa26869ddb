//! Peer version string normalization
//!
//! Peers report their version as `"<version> commit=<hash>-<suffix>"` where
//! the suffix is itself a malformed semver string. Normalization cleans the
//! commit suffix into a canonical comparable version and extracts a numeric
//! build number when the suffix carries one.
//!
//! Normalization never fails fatally: any parse error is logged and the
//! first raw token is kept verbatim so resolution can continue with
//! degraded precision.

use semver::{BuildMetadata, Prerelease, Version};
use tracing::warn;

use crate::version::error::NormalizeError;
use crate::version::semver::{coerce_version, parse_version};

/// Prefix marking the commit token in a peer version string.
const COMMIT_MARKER: &str = "commit=";

/// Prerelease sub-token stripped during normalization.
const BETA_MARKER: &str = "beta";

/// Outcome of normalizing a peer-reported version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedVersion {
    /// The commit suffix cleaned up into a plain comparable version.
    Version(Version),
    /// Cleaned version plus the numeric build dimension from the suffix.
    VersionWithBuild(Version, u64),
    /// Normalization failed; the raw first token is kept verbatim.
    Degraded(String),
}

impl NormalizedVersion {
    /// The numeric build number extracted from the commit suffix, if any.
    pub fn build_number(&self) -> Option<u64> {
        match self {
            Self::VersionWithBuild(_, build) => Some(*build),
            _ => None,
        }
    }

    /// Best-effort comparable version.
    ///
    /// For the degraded variant this falls back to a loose parse (leading
    /// `v`, partial cores like "0.5"); returns `None` when even that fails.
    pub fn comparable(&self) -> Option<Version> {
        match self {
            Self::Version(version) | Self::VersionWithBuild(version, _) => Some(version.clone()),
            Self::Degraded(raw) => parse_version(raw),
        }
    }
}

/// Normalize a raw peer-reported version string.
///
/// The first whitespace-separated token is the loosely-formed version, the
/// second (when present) the `commit=`-prefixed suffix. Any failure while
/// cleaning the suffix logs a warning and degrades to the first token.
pub fn normalize(raw: &str) -> NormalizedVersion {
    let mut tokens = raw.split_whitespace();
    let Some(version_token) = tokens.next() else {
        warn!(raw, "empty peer version string");
        return NormalizedVersion::Degraded(raw.to_string());
    };
    let Some(commit_token) = tokens.next() else {
        // Plain versions are a legal peer format, no cleanup needed.
        return match Version::parse(version_token) {
            Ok(version) => NormalizedVersion::Version(version),
            Err(_) => NormalizedVersion::Degraded(version_token.to_string()),
        };
    };

    match normalize_commit_token(commit_token) {
        Ok(normalized) => normalized,
        Err(error) => {
            warn!(raw, %error, "failed to normalize peer version, keeping raw token");
            NormalizedVersion::Degraded(version_token.to_string())
        }
    }
}

fn normalize_commit_token(token: &str) -> Result<NormalizedVersion, NormalizeError> {
    let suffix = token
        .strip_prefix(COMMIT_MARKER)
        .ok_or_else(|| NormalizeError::MissingCommitMarker(token.to_string()))?;
    let coerced =
        coerce_version(suffix).ok_or_else(|| NormalizeError::Uncoercible(suffix.to_string()))?;

    let mut version = Version::parse(&coerced)?;
    version.build = BuildMetadata::EMPTY;
    if version.pre.is_empty() {
        return Ok(NormalizedVersion::Version(version));
    }

    // The first prerelease identifier may carry a non-standard embedded
    // dash, e.g. "beta-3" in "0.5.2-beta-3".
    let pre = version.pre.as_str().to_string();
    let identifiers: Vec<&str> = pre.split('.').collect();
    let sub_tokens: Vec<&str> = identifiers[0]
        .split('-')
        .filter(|sub| *sub != BETA_MARKER)
        .collect();

    if let Some(first) = sub_tokens.first() {
        if let Ok(build) = first.parse::<u64>() {
            // Numeric first sub-token is a build number, not a prerelease.
            version.pre = Prerelease::EMPTY;
            return Ok(NormalizedVersion::VersionWithBuild(version, build));
        }
    }

    let mut kept = Vec::with_capacity(identifiers.len());
    let rebuilt_first = sub_tokens.join("-");
    if !rebuilt_first.is_empty() {
        kept.push(rebuilt_first);
    }
    kept.extend(identifiers[1..].iter().map(|id| id.to_string()));
    version.pre = if kept.is_empty() {
        Prerelease::EMPTY
    } else {
        Prerelease::new(&kept.join("."))?
    };
    Ok(NormalizedVersion::Version(version))
}
