//! Closest-candidate selection
//!
//! Ranks a catalog of candidate version strings against a normalized peer
//! version and picks the highest candidate that does not exceed it. When
//! the peer version carries a numeric build number, the pick is refined to
//! the candidate with the closest build number at or below it.

use std::cmp::Ordering;

use semver::Version;

use crate::config::ResolverConfig;

/// A catalog entry split into its semver portion and optional build number.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate<'a> {
    raw: &'a str,
    version: Version,
    build: Option<u64>,
}

/// Parse a catalog entry of the form `<semver>` or `<semver>+<N>`.
///
/// Entries whose semver portion does not parse, or whose `+` suffix is not
/// a non-negative integer, are malformed and excluded from ranking.
fn parse_candidate(raw: &str) -> Option<Candidate<'_>> {
    let (version_part, build_part) = match raw.split_once('+') {
        Some((version, build)) => (version, Some(build)),
        None => (raw, None),
    };
    let version = Version::parse(version_part).ok()?;
    let build = match build_part {
        Some(build) => Some(build.parse::<u64>().ok()?),
        None => None,
    };
    Some(Candidate { raw, version, build })
}

/// Ranking within the catalog: semver precedence first; at equal versions
/// a bare entry outranks build-suffixed ones, then higher builds win.
fn rank(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    a.version.cmp(&b.version).then_with(|| match (a.build, b.build) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(&b),
    })
}

/// Select the catalog entry that best matches a normalized peer version.
///
/// Primary match: the maximum candidate whose semver portion is at or
/// below `normalized` under standard semver precedence (prerelease
/// candidates participate and order below their release). Candidates
/// outside the configured version bounds are skipped, as are malformed
/// entries. Returns `None` when no candidate qualifies.
///
/// Build refinement: when `build_number` is present, candidates whose
/// semver portion equals `normalized` exactly are searched for the
/// closest build number at or below it; a hit overrides the primary
/// match as `<normalized>+<build>`.
pub fn select(
    normalized: &Version,
    build_number: Option<u64>,
    catalog: &[String],
    config: &ResolverConfig,
) -> Option<String> {
    let candidates: Vec<Candidate<'_>> = catalog
        .iter()
        .filter_map(|entry| parse_candidate(entry))
        .filter(|candidate| config.allows(&candidate.version))
        .collect();

    let primary = candidates
        .iter()
        .filter(|candidate| candidate.version <= *normalized)
        .max_by(|a, b| rank(a, b))?;

    if let Some(target) = build_number {
        let builds: Vec<u64> = candidates
            .iter()
            .filter(|candidate| candidate.version == *normalized)
            .filter_map(|candidate| candidate.build)
            .collect();
        if let Some(closest) = closest_at_most(&builds, target) {
            return Some(format!("{normalized}+{closest}"));
        }
    }

    Some(primary.raw.to_string())
}

/// Largest value in `values` that does not exceed `target`.
///
/// The largest value at or below the target is by construction the
/// numerically closest one from below.
pub fn closest_at_most(values: &[u64], target: u64) -> Option<u64> {
    values.iter().copied().filter(|value| *value <= target).max()
}
