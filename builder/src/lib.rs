//! VersionBuilder trait for the loose parser for Semantic Version numbers.
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

/// Trait to abstract over version building.
///
/// The methods of this trait are the five fields of a loose semantic version:
/// major, minor, patch, build type (pre-release) and build metadata.
/// The parser calls them while it scans the input, so one can parse into a custom type.
///
/// The trait is generic over the lifetime of the input string, so that one could
/// parse into a version without having to allocate.
///
/// Every setter has a default implementation that ignores its input.
/// This can be used to implement some form of validation without needing to keep the result.
pub trait VersionBuilder<'input> {
    /// The return type of the final version.
    type Out;

    /// Construct a new version builder.
    ///
    /// The function must not fail and the version (if returned from [`VersionBuilder::build`] at this point)
    /// should represent something akin to "0.0.0"
    fn new() -> Self;

    /// Set the major version component.
    ///
    /// Called once the major field is closed, which happens for every input,
    /// even if the field was empty (in which case the value is `0`).
    #[allow(unused)]
    fn set_major(&mut self, major: u64) {}

    /// Set the minor version component.
    ///
    /// This component is optional and might not be called
    /// before [`VersionBuilder::build`].
    #[allow(unused)]
    fn set_minor(&mut self, minor: u64) {}

    /// Set the patch version component.
    ///
    /// This component is optional and might not be called
    /// before [`VersionBuilder::build`].
    #[allow(unused)]
    fn set_patch(&mut self, patch: u64) {}

    /// Set the build type, also known as the pre-release label.
    ///
    /// The string is passed on as found in the input and may contain
    /// any of `[0-9A-Za-z-.]`. It is never empty.
    ///
    /// This component is optional and might not be called
    /// before [`VersionBuilder::build`].
    #[allow(unused)]
    fn set_build_type(&mut self, build_type: &'input str) {}

    /// Set the build metadata.
    ///
    /// The string is passed on as found in the input and may contain
    /// any of `[0-9A-Za-z-.]`. It is never empty.
    ///
    /// This component is optional and might not be called
    /// before [`VersionBuilder::build`].
    #[allow(unused)]
    fn set_build(&mut self, build: &'input str) {}

    /// Construct the final version.
    fn build(self) -> Self::Out;
}

#[cfg(feature = "semver")]
impl<'input> VersionBuilder<'input> for semver::Version {
    type Out = Self;

    fn new() -> Self {
        semver::Version::new(0, 0, 0)
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
        self.pre = semver::Prerelease::new(&sanitize_pre_release(build_type))
            .unwrap_or(semver::Prerelease::EMPTY);
    }

    fn set_build(&mut self, build: &'input str) {
        self.build = semver::BuildMetadata::new(&sanitize_build(build))
            .unwrap_or(semver::BuildMetadata::EMPTY);
    }

    fn build(self) -> Self::Out {
        self
    }
}

/// Sanitizes a build type to be a valid pre-release for [`semver::Version`].
///
/// This includes:
///   - Replacing every character outside of `[0-9A-Za-z-]` with `-`
///   - Dropping empty dot-separated segments
///   - Removing leading zeroes from all-numeric segments
///
/// ## Examples
///
/// ```rust
/// # use loose_semver_version_builder::sanitize_pre_release;
/// assert_eq!(sanitize_pre_release("rc..01"), "rc.1");
/// assert_eq!(sanitize_pre_release("beta"), "beta");
/// ```
#[cfg(feature = "semver")]
pub fn sanitize_pre_release(s: &str) -> std::borrow::Cow<'_, str> {
    sanitize(s, true)
}

/// Sanitizes a build to be valid build metadata for [`semver::Version`].
///
/// Same as [`sanitize_pre_release`], except that leading zeroes are allowed.
#[cfg(feature = "semver")]
pub fn sanitize_build(s: &str) -> std::borrow::Cow<'_, str> {
    sanitize(s, false)
}

#[cfg(feature = "semver")]
fn sanitize(s: &str, strip_zeroes: bool) -> std::borrow::Cow<'_, str> {
    if s.is_empty()
        || s
            .split('.')
            .all(|segment| is_clean_segment(segment, strip_zeroes))
    {
        return std::borrow::Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    for segment in s.split('.').filter(|segment| !segment.is_empty()) {
        if !out.is_empty() {
            out.push('.');
        }
        let start = out.len();
        out.extend(segment.chars().map(|c| if is_identifier_char(c) { c } else { '-' }));
        if strip_zeroes && has_leading_zero(&out[start..]) {
            // an all-zero segment keeps its last zero
            let zeroes = out[start..].bytes().take_while(|&b| b == b'0').count();
            let zeroes = zeroes.min(out.len() - start - 1);
            let _ = out.drain(start..start + zeroes);
        }
    }
    std::borrow::Cow::Owned(out)
}

#[cfg(feature = "semver")]
fn is_clean_segment(segment: &str, strip_zeroes: bool) -> bool {
    !segment.is_empty()
        && segment.chars().all(is_identifier_char)
        && !(strip_zeroes && has_leading_zero(segment))
}

#[cfg(feature = "semver")]
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

#[cfg(feature = "semver")]
fn has_leading_zero(segment: &str) -> bool {
    segment.len() > 1 && segment.starts_with('0') && segment.bytes().all(|b| b.is_ascii_digit())
}
