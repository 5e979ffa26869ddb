//! Public resolution surface
//!
//! Ties normalization and selection together: normalize the peer-reported
//! version string, then pick the closest catalog entry. Always returns;
//! "nothing old enough" is `None`, never an error.

use tracing::debug;

use crate::config::ResolverConfig;
use crate::version::normalizer::normalize;
use crate::version::selector::select;

/// Resolves peer-reported version strings against a catalog of protocol
/// definition versions.
///
/// Resolution is a pure function of its inputs; concurrent calls are
/// independent and need no locking.
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Find the catalog entry that best matches `raw`.
    ///
    /// Returns `None` when no candidate is at or below the peer's version,
    /// or when the peer version cannot be compared at all.
    pub fn resolve_closest_version(&self, raw: &str, catalog: &[String]) -> Option<String> {
        let normalized = normalize(raw);
        let Some(version) = normalized.comparable() else {
            debug!(raw, "peer version is not comparable, no match");
            return None;
        };

        let resolved = select(&version, normalized.build_number(), catalog, &self.config);
        debug!(raw, %version, ?resolved, "resolved peer version");
        resolved
    }
}

/// Resolve with the default (unbounded) configuration.
pub fn resolve_closest_version(raw: &str, catalog: &[String]) -> Option<String> {
    Resolver::new(ResolverConfig::default()).resolve_closest_version(raw, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_closest_prerelease_candidate() {
        let entries = catalog(&["0.5.0", "0.5.1-beta.rc1", "0.5.1-beta.rc2", "0.5.2-beta.rc3"]);

        let result =
            resolve_closest_version("0.5.1-beta commit=abcdef-0.5.1-beta.rc2", &entries);

        assert_eq!(result, Some("0.5.1-beta.rc2".to_string()));
    }

    #[test]
    fn resolves_build_number_to_closest_lower_build() {
        let entries = catalog(&["0.5.2", "0.5.2+1", "0.5.2+5"]);

        let result = resolve_closest_version("0.5.2 commit=abcdef-0.5.2-3", &entries);

        assert_eq!(result, Some("0.5.2+1".to_string()));
    }

    #[test]
    fn malformed_commit_token_still_resolves_best_effort() {
        let entries = catalog(&["0.5.0", "0.5.1"]);

        // Missing commit= marker, normalization degrades to "0.5.1".
        let result = resolve_closest_version("0.5.1 abcdef-0.5.1", &entries);

        assert_eq!(result, Some("0.5.1".to_string()));
    }

    #[test]
    fn empty_catalog_yields_no_match() {
        assert_eq!(resolve_closest_version("0.5.1", &[]), None);
    }

    #[test]
    fn uncomparable_peer_version_yields_no_match() {
        let entries = catalog(&["0.5.0"]);

        assert_eq!(resolve_closest_version("garbage", &entries), None);
    }

    #[test]
    fn bounded_resolver_skips_candidates_outside_range() {
        use semver::Version;

        let entries = catalog(&["0.2.0", "0.5.0", "0.5.1"]);
        let resolver = Resolver::new(ResolverConfig {
            lowest_supported: Some(Version::new(0, 5, 0)),
            highest_supported: None,
        });

        assert_eq!(
            resolver.resolve_closest_version("0.4.0", &entries),
            None,
            "only out-of-range candidates are old enough"
        );
        assert_eq!(
            resolver.resolve_closest_version("0.5.0", &entries),
            Some("0.5.0".to_string())
        );
    }
}
