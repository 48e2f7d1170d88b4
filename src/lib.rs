//! Loose parser for Semantic Version numbers.
//!
//! ## Motivation
//!
//! This crate parses, validates and renders versions of the form `Major.Minor.Patch[-BuildType][+Build]`.
//!
//! Instead of rejecting everything that is not a semantic version, the default parser is lenient
//! and degrades malformed input into default values:
//!
//! - Minor and Patch are optional and default to 0 (e.g. "1" parses as "1.0.0")
//! - A character that does not belong into the numeric part starts the build type (e.g. "1.2x.3" parses as "1.2.0-x.3")
//! - A space or an unsupported character ends the parsing, the rest is ignored (e.g. "1.2.3 final" parses as "1.2.3")
//!
//! Strict parsing is available as well and rejects anything that is not a full semantic version.
//!
//! ## Examples
//!
//! ```rust
//! use loose_semver::{parse, parse_strict, Version};
//!
//! assert_eq!(parse("1.2.3"), Version::new(1, 2, 3));
//! assert_eq!(parse("1"), Version::new(1, 0, 0));
//! assert_eq!(parse("1.2.3-beta+007").to_string(), "1.2.3-beta+007");
//!
//! // examples of a version that would not be accepted by the strict parser
//! assert_eq!(parse("1.2"), Version::new(1, 2, 0));
//! assert!(parse_strict("1.2").is_err());
//!
//! assert_eq!(parse("1.2x.3"), Version::with_metadata(1, 2, 0, "x.3", ""));
//! assert!(parse_strict("1.2x.3").is_err());
//! ```
//!
//! ## Parsing into other types
//!
//! The parser writes into any [`VersionBuilder`], with the `semver` feature that includes [`semver::Version`].
//!
//! ```rust
//! # #[cfg(feature = "semver")]
//! # {
//! let version = loose_semver::parse_into::<semver::Version>("1.2.3-rc.1");
//! assert_eq!(version, semver::Version::parse("1.2.3-rc.1").unwrap());
//! # }
//! ```

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

pub use loose_semver_parser::{is_semantic, Error, ErrorKind, Mode, OwnedError};
pub use loose_semver_version_builder::VersionBuilder;
pub use loose_version::Version;

/// Parse a string slice into a [`Version`].
///
/// This never fails, see [`loose_semver_parser::parse`] for how malformed input is treated.
///
/// ## Examples
///
/// ```rust
/// use loose_semver::Version;
///
/// assert_eq!(loose_semver::parse("1.2.3-beta"), Version::with_metadata(1, 2, 3, "beta", ""));
/// assert_eq!(loose_semver::parse("v2.0"), Version::with_metadata(0, 0, 0, "v2.0", ""));
/// ```
pub fn parse(input: &str) -> Version {
    Version::parse(input)
}

/// Parse a string slice into a [`Version`], requiring a full semantic version.
///
/// ## Examples
///
/// ```rust
/// use loose_semver::{ErrorKind, Version};
///
/// assert_eq!(loose_semver::parse_strict("2.0.0"), Ok(Version::new(2, 0, 0)));
///
/// let error = loose_semver::parse_strict("v2.0").unwrap_err();
/// assert_eq!(error.error_kind(), ErrorKind::InvalidFormat);
/// ```
pub fn parse_strict(input: &str) -> Result<Version, Error<'_>> {
    Version::parse_strict(input)
}

/// Parse a string slice into a [`Version`], choosing the [`Mode`] at runtime.
///
/// ## Examples
///
/// ```rust
/// use loose_semver::{Mode, Version};
///
/// assert_eq!(loose_semver::parse_with("1.2", Mode::Lenient), Ok(Version::new(1, 2, 0)));
/// assert!(loose_semver::parse_with("1.2", Mode::Strict).is_err());
/// ```
pub fn parse_with(input: &str, mode: Mode) -> Result<Version, Error<'_>> {
    loose_semver_parser::parse_with::<Version>(input, mode)
}

/// Parse a string slice into any [`VersionBuilder`].
///
/// ## Examples
///
/// ```rust
/// use loose_semver::VersionBuilder;
///
/// struct IsPreRelease(bool);
///
/// impl<'input> VersionBuilder<'input> for IsPreRelease {
///     type Out = bool;
///
///     fn new() -> Self {
///        IsPreRelease(false)
///     }
///
///     fn set_build_type(&mut self, _input: &'input str) {
///         self.0 = true;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// assert!(loose_semver::parse_into::<IsPreRelease>("1.2.3-pre"));
/// assert!(!loose_semver::parse_into::<IsPreRelease>("1.2.3"));
/// assert!(!loose_semver::parse_into::<IsPreRelease>("1.2.3+build"));
/// ```
pub fn parse_into<'input, V>(input: &'input str) -> V::Out
where
    V: VersionBuilder<'input>,
{
    loose_semver_parser::parse::<V>(input)
}

/// Parse a string slice into any [`VersionBuilder`], requiring a full semantic version.
pub fn parse_strict_into<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    loose_semver_parser::parse_strict::<V>(input)
}
