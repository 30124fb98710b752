use std::fmt;
use std::str::FromStr;

use crate::ParsePolicyError;

/// Determines how the pool treats resources that are handed back to it.
///
/// By default, the pool verifies that every released resource was created by the same pool and
/// is currently checked out.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use resource_pool::{ReleasePolicy, ResourcePool};
///
/// // The release policy is set at pool creation time.
/// let pool = ResourcePool::builder()
///     .capacity(NonZero::new(4).unwrap())
///     .release_policy(ReleasePolicy::Lenient)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum ReleasePolicy {
    /// The pool rejects resources that belong to a different pool and resources that are not
    /// currently checked out. The number of available and outstanding resources always adds
    /// up to the capacity of the pool. This is the default.
    #[default]
    Strict,

    /// The pool accepts any resource as long as there is room for it and silently discards
    /// the resource otherwise.
    ///
    /// Releasing the same resource twice while there is room stores it twice, after which
    /// it can be handed out to two callers at once.
    Lenient,
}

impl ReleasePolicy {
    /// The name used for this policy in textual configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ReleasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleasePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ParsePolicyError {
                invalid_value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict() {
        assert_eq!(ReleasePolicy::default(), ReleasePolicy::Strict);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("strict".parse::<ReleasePolicy>().unwrap(), ReleasePolicy::Strict);
        assert_eq!("LENIENT".parse::<ReleasePolicy>().unwrap(), ReleasePolicy::Lenient);
    }

    #[test]
    fn parse_rejects_unknown() {
        let error = "sloppy".parse::<ReleasePolicy>().unwrap_err();

        assert_eq!(error.invalid_value, "sloppy");
        assert!(error.to_string().contains("sloppy"));
    }

    #[test]
    fn display_matches_parse() {
        for policy in [ReleasePolicy::Strict, ReleasePolicy::Lenient] {
            assert_eq!(policy.to_string().parse::<ReleasePolicy>().unwrap(), policy);
        }
    }
}
