//! Semantic version parsing and ordering for release tags.

use semver::{Prerelease, Version};

use crate::error::{CairnError, Result};

fn malformed(tag: &str) -> CairnError {
    CairnError::MalformedVersion {
        tag: tag.to_string(),
    }
}

/// Parse a `v`-prefixed semantic version tag.
///
/// A missing `v` prefix or non-numeric components are an input error, never
/// a silent default. Core components are parsed as plain integers, so tags
/// with leading zeros like `v0.2.09` are accepted.
pub fn parse(tag: &str) -> Result<Version> {
    let body = tag.strip_prefix('v').ok_or_else(|| malformed(tag))?;

    let (core, pre) = match body.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (body, None),
    };

    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() != 3 {
        return Err(malformed(tag));
    }

    let mut numbers = [0u64; 3];
    for (number, part) in numbers.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(tag));
        }
        *number = part.parse().map_err(|_| malformed(tag))?;
    }

    let mut version = Version::new(numbers[0], numbers[1], numbers[2]);
    if let Some(pre) = pre {
        version.pre = Prerelease::new(pre).map_err(|_| malformed(tag))?;
    }

    Ok(version)
}

/// Whether `candidate` is strictly newer than `current` for upgrade purposes.
///
/// Ordering is numeric over (major, minor, patch). At an equal tuple a
/// pre-release is strictly older than the plain version, and two
/// pre-releases count as equal regardless of suffix.
pub fn is_newer(candidate: &Version, current: &Version) -> bool {
    let tuple = |v: &Version| (v.major, v.minor, v.patch);

    if tuple(candidate) == tuple(current) {
        return !current.pre.is_empty() && candidate.pre.is_empty();
    }

    tuple(candidate) > tuple(current)
}
