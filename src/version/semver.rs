use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

/// Matches a bare dotted numeric version core like "0", "0.5" or "0.5.1".
static VERSION_CORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+){0,2}$").unwrap());

/// Maximum dash-separated segments kept after coercion: the version core
/// plus at most two suffix segments. Anything beyond is typically a
/// trailing commit hash and gets discarded.
const MAX_SEGMENTS: usize = 3;

/// Coerce a noisy version token into valid semver syntax.
///
/// Splits the input on `-`, locates the first segment that is a bare
/// dotted numeric core, zero-pads it to major.minor.patch and re-attaches
/// at most two following dash-delimited segments.
///
/// Examples:
/// - "abcdef-0.5.1-beta.rc2" -> "0.5.1-beta.rc2"
/// - "abcdef-0.5.2-beta-3-gabcdef" -> "0.5.2-beta-3" (trailing hash dropped)
/// - "abcdef" -> None (no version core)
pub fn coerce_version(input: &str) -> Option<String> {
    let segments: Vec<&str> = input.split('-').filter(|s| !s.is_empty()).collect();
    let core_index = segments.iter().position(|s| VERSION_CORE.is_match(s))?;

    let mut coerced = pad_version_core(segments[core_index]);
    for segment in segments[core_index + 1..].iter().take(MAX_SEGMENTS - 1) {
        coerced.push('-');
        coerced.push_str(segment);
    }
    Some(coerced)
}

/// Parse a version string into a semver::Version, normalizing loose forms.
///
/// Strips a leading `v` and pads partial cores with zeros, keeping any
/// prerelease or build suffix intact.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "0.5.1-beta" -> Version(0, 5, 1, pre "beta")
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let (core, suffix) = match version.find(['-', '+']) {
        Some(index) => version.split_at(index),
        None => (version, ""),
    };
    if !VERSION_CORE.is_match(core) {
        return None;
    }
    Version::parse(&format!("{}{suffix}", pad_version_core(core))).ok()
}

fn pad_version_core(core: &str) -> String {
    match core.split('.').count() {
        1 => format!("{core}.0.0"),
        2 => format!("{core}.0"),
        _ => core.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abcdef-0.5.1-beta.rc2", Some("0.5.1-beta.rc2"))]
    #[case("abcdef-0.5.2-3", Some("0.5.2-3"))]
    #[case("abcdef-0.5.2-beta-3-gabcdef", Some("0.5.2-beta-3"))]
    #[case("0.5.1-beta.rc2", Some("0.5.1-beta.rc2"))]
    #[case("abcdef-0.5", Some("0.5.0"))]
    #[case("abcdef-7-rc1", Some("7.0.0-rc1"))]
    #[case("a1b2c3-0.5.1", Some("0.5.1"))] // hash with digits is not a core
    #[case("abcdef", None)]
    #[case("", None)]
    fn coerce_version_returns_expected(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(coerce_version(input), expected.map(|s| s.to_string()));
    }

    #[rstest]
    #[case("1", Some("1.0.0"))]
    #[case("1.2", Some("1.2.0"))]
    #[case("v1.2.3", Some("1.2.3"))]
    #[case("0.5.1-beta", Some("0.5.1-beta"))]
    #[case("0.5-rc.1", Some("0.5.0-rc.1"))]
    #[case("not-a-version", None)]
    #[case("", None)]
    fn parse_version_normalizes_loose_forms(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            parse_version(input),
            expected.map(|s| Version::parse(s).unwrap())
        );
    }
}
