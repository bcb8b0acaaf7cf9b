//! The semantic version value type
//!
//! Parses `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` with an optional single-character
//! prefix (e.g. `v1.2.3`), supports in-place mutation with cascading resets, and orders
//! versions by semver precedence. See https://semver.org/#spec-item-11

use crate::error::{Result, SemverError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Prefix used by [`Version::prefix`] when none is given
pub const DEFAULT_PREFIX: &str = "v";

lazy_static! {
    // At most one leading non-digit is accepted as a prefix and discarded.
    static ref VERSION_RE: Regex = Regex::new(
        r"^[^0-9]?([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    )
    .unwrap();

    static ref IDENTIFIERS_RE: Regex =
        Regex::new(r"^[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*$").unwrap();
}

/// Semantic version representation
///
/// Equality, ordering and hashing ignore `build`: two versions differing only in build
/// metadata are equal.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<String>,
    pub build: Option<String>,
}

impl Version {
    /// Create a version from a string (e.g., "v1.2.3-beta.1+007")
    pub fn new(input: &str) -> Result<Self> {
        Self::parse(input)
    }

    /// Create a bare `major.minor.patch` version without pre-release or build metadata
    pub fn from_parts(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Parse a version string
    ///
    /// # Arguments
    /// * `input` - Version string, optionally preceded by one non-digit character
    ///
    /// # Returns
    /// * `Ok(Version)` - Successfully parsed version
    /// * `Err(SemverError::InvalidVersion)` - If the input doesn't match the grammar or a
    ///   numeric component doesn't fit in a `u64`
    ///
    /// # Example
    /// ```
    /// use semverkit::Version;
    ///
    /// let v = Version::parse("v1.3.37-alpha.5+007").unwrap();
    /// assert_eq!(v.patch, 37);
    /// assert_eq!(v.pre_release.as_deref(), Some("alpha.5"));
    /// assert_eq!(v.build.as_deref(), Some("007"));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let captures = VERSION_RE.captures(input).ok_or_else(|| {
            tracing::debug!(input, "version string does not match grammar");
            SemverError::invalid_version(input)
        })?;

        let numeric = |index: usize| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|_| {
                tracing::debug!(input, component = index, "numeric component out of range");
                SemverError::invalid_version(input)
            })
        };

        Ok(Version {
            major: numeric(1)?,
            minor: numeric(2)?,
            patch: numeric(3)?,
            pre_release: captures.get(4).map(|m| m.as_str().to_string()),
            build: captures.get(5).map(|m| m.as_str().to_string()),
        })
    }

    /// Replace every field by re-parsing `input`
    ///
    /// On failure the version is left untouched.
    pub fn set_version(&mut self, input: &str) -> Result<&mut Self> {
        *self = Version::parse(input)?;
        Ok(self)
    }

    /// Set the major version, resetting minor, patch, pre-release and build
    pub fn set_major(&mut self, major: u64) -> &mut Self {
        self.major = major;
        self.minor = 0;
        self.patch = 0;
        self.clear_qualifiers()
    }

    /// Set the minor version, resetting patch, pre-release and build
    pub fn set_minor(&mut self, minor: u64) -> &mut Self {
        self.minor = minor;
        self.patch = 0;
        self.clear_qualifiers()
    }

    /// Set the patch version, resetting pre-release and build
    pub fn set_patch(&mut self, patch: u64) -> &mut Self {
        self.patch = patch;
        self.clear_qualifiers()
    }

    /// Bump major as [`Version::set_major`] does; `InvalidVersion` if major is `u64::MAX`
    pub fn increment_major(&mut self) -> Result<&mut Self> {
        let major = self.bumped(self.major)?;
        Ok(self.set_major(major))
    }

    /// Bump minor as [`Version::set_minor`] does; `InvalidVersion` if minor is `u64::MAX`
    pub fn increment_minor(&mut self) -> Result<&mut Self> {
        let minor = self.bumped(self.minor)?;
        Ok(self.set_minor(minor))
    }

    /// Bump patch as [`Version::set_patch`] does; `InvalidVersion` if patch is `u64::MAX`
    pub fn increment_patch(&mut self) -> Result<&mut Self> {
        let patch = self.bumped(self.patch)?;
        Ok(self.set_patch(patch))
    }

    /// Set or clear (`None`) the pre-release tag
    ///
    /// A present value must be dot-separated `[0-9A-Za-z-]+` identifiers; otherwise
    /// `InvalidVersion` is returned and the version is unchanged.
    pub fn set_pre_release(&mut self, pre_release: Option<&str>) -> Result<&mut Self> {
        self.pre_release = validate_identifiers(pre_release)?;
        Ok(self)
    }

    /// Set or clear (`None`) the build metadata, validated like [`Version::set_pre_release`]
    pub fn set_build(&mut self, build: Option<&str>) -> Result<&mut Self> {
        self.build = validate_identifiers(build)?;
        Ok(self)
    }

    /// Render with a leading prefix, `"v"` when `prefix` is `None`
    ///
    /// # Example
    /// ```
    /// use semverkit::Version;
    ///
    /// let v = Version::parse("1.3.37").unwrap();
    /// assert_eq!(v.prefix(None), "v1.3.37");
    /// assert_eq!(v.prefix(Some("release-")), "release-1.3.37");
    /// ```
    pub fn prefix(&self, prefix: Option<&str>) -> String {
        format!("{}{}", prefix.unwrap_or(DEFAULT_PREFIX), self)
    }

    // Relational predicates, all derived from `Ord::cmp`.

    pub fn gt(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    pub fn lt(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Less
    }

    #[allow(clippy::should_implement_trait)]
    pub fn eq(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Equal
    }

    pub fn neq(&self, other: &Version) -> bool {
        self.cmp(other) != Ordering::Equal
    }

    pub fn gte(&self, other: &Version) -> bool {
        self.cmp(other) != Ordering::Less
    }

    pub fn lte(&self, other: &Version) -> bool {
        self.cmp(other) != Ordering::Greater
    }

    // The version is left untouched when the component is already at its maximum.
    fn bumped(&self, component: u64) -> Result<u64> {
        component.checked_add(1).ok_or_else(|| {
            tracing::debug!(version = %self, "version component overflow");
            SemverError::invalid_version(self.to_string())
        })
    }

    fn clear_qualifiers(&mut self) -> &mut Self {
        self.pre_release = None;
        self.build = None;
        self
    }
}

fn validate_identifiers(value: Option<&str>) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(identifiers) if IDENTIFIERS_RE.is_match(identifiers) => {
            Ok(Some(identifiers.to_string()))
        }
        Some(identifiers) => {
            tracing::debug!(identifiers, "rejected pre-release/build identifiers");
            Err(SemverError::invalid_version(identifiers))
        }
    }
}

/// A version without a pre-release tag ranks above one with; two tags compare as plain
/// strings, so "10" sorts before "2".
fn compare_pre_release(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => left.cmp(right),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| {
                compare_pre_release(self.pre_release.as_deref(), other.pre_release.as_deref())
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}", pre_release)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = SemverError;

    fn try_from(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = SemverError;

    fn try_from(s: String) -> Result<Self> {
        Version::parse(&s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}
