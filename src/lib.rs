//! Parse, mutate, render and compare semantic version strings.

pub mod error;
mod interop;
pub mod version;

pub use error::{Result, SemverError};
pub use version::Version;

/// Shorthand for [`Version::parse`]
///
/// ```
/// let v = semverkit::semver("v1.3.37").unwrap();
/// assert_eq!(v.to_string(), "1.3.37");
/// ```
pub fn semver(input: &str) -> Result<Version> {
    Version::parse(input)
}
