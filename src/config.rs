use semver::Version;
use serde::Deserialize;

/// Resolver configuration
///
/// Bounds the range of protocol versions the resolver is willing to hand
/// out. Both bounds are inclusive and optional; the default configuration
/// is unbounded.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Lowest protocol version the resolver will hand out
    pub lowest_supported: Option<Version>,
    /// Highest protocol version the resolver will hand out
    pub highest_supported: Option<Version>,
}

impl ResolverConfig {
    /// Check whether a candidate version falls within the configured bounds.
    pub fn allows(&self, version: &Version) -> bool {
        self.lowest_supported
            .as_ref()
            .is_none_or(|lowest| version >= lowest)
            && self
                .highest_supported
                .as_ref()
                .is_none_or(|highest| version <= highest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<ResolverConfig>(json!({
            "lowestSupported": "0.3.0"
        }))
        .unwrap();

        assert_eq!(result.lowest_supported, Some(Version::new(0, 3, 0)));
        assert_eq!(result.highest_supported, None);
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<ResolverConfig>(json!({
            "lowestSupported": "0.3.0",
            "highestSupported": "0.5.2"
        }))
        .unwrap();

        assert_eq!(
            result,
            ResolverConfig {
                lowest_supported: Some(Version::new(0, 3, 0)),
                highest_supported: Some(Version::new(0, 5, 2)),
            }
        );
    }

    #[rstest]
    #[case(None, None, "0.4.0", true)]
    #[case(Some("0.3.0"), None, "0.2.9", false)]
    #[case(Some("0.3.0"), None, "0.3.0", true)]
    #[case(None, Some("0.5.0"), "0.5.0", true)]
    #[case(None, Some("0.5.0"), "0.5.1", false)]
    #[case(Some("0.3.0"), Some("0.5.0"), "0.4.2", true)]
    fn allows_checks_inclusive_bounds(
        #[case] lowest: Option<&str>,
        #[case] highest: Option<&str>,
        #[case] version: &str,
        #[case] expected: bool,
    ) {
        let config = ResolverConfig {
            lowest_supported: lowest.map(|v| Version::parse(v).unwrap()),
            highest_supported: highest.map(|v| Version::parse(v).unwrap()),
        };

        assert_eq!(config.allows(&Version::parse(version).unwrap()), expected);
    }
}
