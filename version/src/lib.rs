//! Loose semantic version.
//!
//! Companion version struct for the loose_semver_parser parser.
//! Compared to [`semver::Version`], this version:
//!  - Stores the build type (pre-release) and build as plain labels, without validating them
//!  - Never holds negative numbers, negative input is clamped to 0
//!  - Only defines structural equality, there is no precedence ordering
#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use std::{
    convert::TryFrom,
    fmt::{self, Display, Write},
};

/// Represents a loose semantic version number.
///
/// A version has five fields: major, minor, patch, build type and build.
/// The build type is also known as the pre-release label and can be accessed under that name as well.
///
/// An empty build type or build is the same as a missing one.
/// Two versions are equal if all five fields are equal; hashing is consistent with that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    build_type: String,
    build: String,
}

impl Version {
    /// Constructs a new, empty version
    ///
    /// ## Examples
    ///
    /// ```
    /// # use loose_version::Version;
    /// let version = Version::empty();
    /// assert_eq!(version.to_string(), "0.0.0")
    /// ```
    pub const fn empty() -> Self {
        Version {
            major: 0,
            minor: 0,
            patch: 0,
            build_type: String::new(),
            build: String::new(),
        }
    }

    /// Constructs a new version out of the three numeric version components.
    ///
    /// Negative numbers are clamped to 0.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use loose_version::Version;
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(version.to_string(), "1.2.3");
    ///
    /// let version = Version::new(1, -2, 3);
    /// assert_eq!(version.to_string(), "1.0.3");
    /// ```
    pub fn new(major: i64, minor: i64, patch: i64) -> Self {
        Version {
            major: non_negative(major),
            minor: non_negative(minor),
            patch: non_negative(patch),
            build_type: String::new(),
            build: String::new(),
        }
    }

    /// Constructs a new version out of all five components.
    ///
    /// Negative numbers are clamped to 0, an empty build type or build is treated as missing.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use loose_version::Version;
    /// let version = Version::with_metadata(1, 2, 3, "beta", "007");
    /// assert_eq!(version.to_string(), "1.2.3-beta+007");
    ///
    /// let version = Version::with_metadata(1, 2, 3, "", "007");
    /// assert_eq!(version.to_string(), "1.2.3+007");
    /// ```
    pub fn with_metadata(
        major: i64,
        minor: i64,
        patch: i64,
        build_type: impl Into<String>,
        build: impl Into<String>,
    ) -> Self {
        Version {
            build_type: build_type.into(),
            build: build.into(),
            ..Version::new(major, minor, patch)
        }
    }

    /// Parse a string slice into a Version.
    ///
    /// This never fails, malformed input is degraded into default values.
    /// For more information, see [`loose_semver_parser::parse`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use loose_version::Version;
    /// assert_eq!(Version::parse("1.2"), Version::new(1, 2, 0));
    /// assert_eq!(Version::parse("1.2.3-beta+007"), Version::with_metadata(1, 2, 3, "beta", "007"));
    /// assert_eq!(Version::parse("1.2x.3"), Version::with_metadata(1, 2, 0, "x.3", ""));
    /// ```
    #[cfg(feature = "parser")]
    pub fn parse(input: &str) -> Self {
        loose_semver_parser::parse::<Self>(input)
    }

    /// Parse a string slice into a Version, requiring a full semantic version.
    ///
    /// For more information, see [`loose_semver_parser::parse_strict`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use loose_version::Version;
    /// assert_eq!(Version::parse_strict("2.0.0"), Ok(Version::new(2, 0, 0)));
    /// assert!(Version::parse_strict("v2.0").is_err());
    /// ```
    #[cfg(feature = "parser")]
    pub fn parse_strict(input: &str) -> Result<Self, loose_semver_parser::Error<'_>> {
        loose_semver_parser::parse_strict::<Self>(input)
    }

    /// The major version.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor version.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch version.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The build type, if there is one.
    pub fn build_type(&self) -> Option<&str> {
        non_empty(&self.build_type)
    }

    /// The pre-release label, which is the same as [`Version::build_type`].
    pub fn pre_release(&self) -> Option<&str> {
        self.build_type()
    }

    /// The build metadata, if there is one.
    pub fn build(&self) -> Option<&str> {
        non_empty(&self.build)
    }

    /// Sets the major version, negative numbers are stored as 0.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use loose_version::Version;
    /// let mut version = Version::new(1, 2, 3);
    /// version.set_major(-4);
    /// assert_eq!(version.major(), 0);
    /// ```
    pub fn set_major(&mut self, major: i64) {
        self.major = non_negative(major);
    }

    /// Sets the minor version, negative numbers are stored as 0.
    pub fn set_minor(&mut self, minor: i64) {
        self.minor = non_negative(minor);
    }

    /// Sets the patch version, negative numbers are stored as 0.
    pub fn set_patch(&mut self, patch: i64) {
        self.patch = non_negative(patch);
    }

    /// Sets the build type, an empty string removes it.
    pub fn set_build_type(&mut self, build_type: impl Into<String>) {
        self.build_type = build_type.into();
    }

    /// Sets the pre-release label, which is the same as [`Version::set_build_type`].
    pub fn set_pre_release(&mut self, pre_release: impl Into<String>) {
        self.set_build_type(pre_release);
    }

    /// Sets the build metadata, an empty string removes it.
    pub fn set_build(&mut self, build: impl Into<String>) {
        self.build = build.into();
    }

    /// Returns true if this version has a build type, i.e. it represents a pre-release.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use loose_version::Version;
    /// assert!(!Version::parse("1").is_pre_release());
    /// assert!(Version::parse("1-pre").is_pre_release());
    /// assert!(!Version::parse("1+build").is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        !self.build_type.is_empty()
    }

    /// Bumps the major version.
    ///
    /// Sets minor and patch to 0, removes build type and build.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use loose_version::Version;
    /// let mut version = Version::parse("1.2.3-pre+build");
    /// version.bump_major();
    /// assert_eq!(version.to_string(), "2.0.0");
    /// ```
    pub fn bump_major(&mut self) {
        self.major = self.major.saturating_add(1);
        self.minor = 0;
        self.patch = 0;
        self.clear_metadata();
    }

    /// Bumps the minor version.
    ///
    /// Sets patch to 0, removes build type and build.
    pub fn bump_minor(&mut self) {
        self.minor = self.minor.saturating_add(1);
        self.patch = 0;
        self.clear_metadata();
    }

    /// Bumps the patch version.
    ///
    /// Removes build type and build.
    pub fn bump_patch(&mut self) {
        self.patch = self.patch.saturating_add(1);
        self.clear_metadata();
    }

    /// Renders the version as `major.minor.patch[-build_type][+build]`.
    ///
    /// This is the canonical text form, the same as the [`Display`] implementation,
    /// and it can be read back with [`Version::parse`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use loose_version::Version;
    /// let version = Version::with_metadata(1, 2, 3, "beta", "007");
    /// assert_eq!(version.to_display_string(), "1.2.3-beta+007");
    /// assert_eq!(Version::parse(&version.to_display_string()), version);
    /// ```
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Converts into a numeric 4-component version for systems that
    /// do not support any labels.
    ///
    /// This conversion loses data: the build type and the build are dropped.
    /// The fourth component (the revision) is always 0.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use loose_version::Version;
    /// let version = Version::with_metadata(1, 2, 3, "beta", "x");
    /// assert_eq!(version.to_legacy_triplet(), (1, 2, 3, 0));
    /// ```
    pub fn to_legacy_triplet(&self) -> (u64, u64, u64, u64) {
        (self.major, self.minor, self.patch, 0)
    }

    fn clear_metadata(&mut self) {
        self.build_type.clear();
        self.build.clear();
    }
}

fn non_negative(num: i64) -> u64 {
    u64::try_from(num).unwrap_or(0)
}

fn non_empty(s: &str) -> Option<&str> {
    Some(s).filter(|s| !s.is_empty())
}

impl From<i64> for Version {
    fn from(x: i64) -> Self {
        Version::new(x, 0, 0)
    }
}

impl From<(i64, i64)> for Version {
    fn from((x, y): (i64, i64)) -> Self {
        Version::new(x, y, 0)
    }
}

impl From<(i64, i64, i64)> for Version {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Version::new(x, y, z)
    }
}

impl From<(i64, i64, i64, &str)> for Version {
    fn from((x, y, z, build_type): (i64, i64, i64, &str)) -> Self {
        Version::with_metadata(x, y, z, build_type, "")
    }
}

impl From<[i64; 1]> for Version {
    fn from(v: [i64; 1]) -> Self {
        Version::new(v[0], 0, 0)
    }
}

impl From<[i64; 2]> for Version {
    fn from(v: [i64; 2]) -> Self {
        Version::new(v[0], v[1], 0)
    }
}

impl From<[i64; 3]> for Version {
    fn from(v: [i64; 3]) -> Self {
        Version::new(v[0], v[1], v[2])
    }
}

#[cfg(feature = "parser")]
impl<'input> TryFrom<&'input str> for Version {
    type Error = loose_semver_parser::Error<'input>;

    fn try_from(value: &'input str) -> Result<Self, Self::Error> {
        Self::parse_strict(value)
    }
}

#[cfg(feature = "parser")]
impl std::str::FromStr for Version {
    type Err = loose_semver_parser::OwnedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s).map_err(|e| e.owned())
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(16);
        write!(result, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.build_type.is_empty() {
            result.push('-');
            result.push_str(&self.build_type);
        }
        if !self.build.is_empty() {
            result.push('+');
            result.push_str(&self.build);
        }

        f.pad(&result)
    }
}

#[cfg(feature = "parser")]
impl<'input> loose_semver_version_builder::VersionBuilder<'input> for Version {
    type Out = Self;

    fn new() -> Self {
        Version::empty()
    }

    fn set_major(&mut self, major: u64) {
        self.major = major;
    }

    fn set_minor(&mut self, minor: u64) {
        self.minor = minor;
    }

    fn set_patch(&mut self, patch: u64) {
        self.patch = patch;
    }

    fn set_build_type(&mut self, build_type: &'input str) {
        self.build_type = build_type.into();
    }

    fn set_build(&mut self, build: &'input str) {
        self.build = build.into();
    }

    fn build(self) -> Self::Out {
        self
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{Serialize, Serializer};
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse_strict(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

#[cfg(feature = "semver")]
impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            build_type: v.pre.as_str().into(),
            build: v.build.as_str().into(),
        }
    }
}

/// Fails if the build type or build are not valid semver identifiers.
#[cfg(feature = "semver")]
impl TryFrom<&Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(v: &Version) -> Result<Self, Self::Error> {
        Ok(semver::Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre: semver::Prerelease::new(&v.build_type)?,
            build: semver::BuildMetadata::new(&v.build)?,
        })
    }
}
