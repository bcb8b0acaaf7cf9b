//! Conversions to and from `semver::Version`
//!
//! The `semver` crate enforces the strict grammar (no leading zeros in numeric pre-release
//! identifiers), so converting into it can fail where parsing here succeeded.

use crate::error::{Result, SemverError};
use crate::version::Version;

impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre_release: (!v.pre.is_empty()).then(|| v.pre.to_string()),
            build: (!v.build.is_empty()).then(|| v.build.to_string()),
        }
    }
}

impl TryFrom<&Version> for semver::Version {
    type Error = SemverError;

    fn try_from(v: &Version) -> Result<Self> {
        let rejected = |_| SemverError::invalid_version(v.to_string());

        let pre = match &v.pre_release {
            Some(pre_release) => semver::Prerelease::new(pre_release).map_err(rejected)?,
            None => semver::Prerelease::EMPTY,
        };
        let build = match &v.build {
            Some(build) => semver::BuildMetadata::new(build).map_err(rejected)?,
            None => semver::BuildMetadata::EMPTY,
        };

        Ok(semver::Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre,
            build,
        })
    }
}
