//! Loose parser for Semantic Version numbers.
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

use once_cell::sync::Lazy;
use regex::Regex;
use std::{fmt::Display, ops::Range};

pub use loose_semver_version_builder::VersionBuilder;

/// The full semantic version grammar, used for strict validation.
///
/// ```text
/// version        := triplet (dash build_type)? (plus build)?
/// triplet        := digits "." digits "." digits
/// build_type     := alnum_dash+ ("." alnum_dash_dot+)*
/// build          := alnum_dash_dot+
/// ```
const SEMANTIC_VERSION_PATTERN: &str = concat!(
    r"^[0-9]+\.[0-9]+\.[0-9]+",
    r"(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z.-]+)*)?",
    r"(?:\+[0-9A-Za-z.-]+)?$"
);

static SEMANTIC_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(SEMANTIC_VERSION_PATTERN).expect("Invalid regex literal."));

/// Parse a string slice into a Version.
///
/// This parser never fails. It does not require input that conforms to semver.org
/// and degrades malformed input into default values instead:
///
/// - Minor and Patch are optional and default to 0 (e.g. "1" parses as "1.0.0")
/// - Missing or non-numeric numbers default to 0 (e.g. "1..3" parses as "1.0.3")
/// - A character that does not belong into the numeric part starts the build type (e.g. "1.2x.3" parses as "1.2.0-x.3")
/// - A space or an unsupported character in the build type or build ends the parsing, the rest is ignored
///   (e.g. "1.2.3-beta nightly" parses as "1.2.3-beta")
/// - Leading and trailing whitespace is ignored
///
/// Use [`parse_strict`] to reject anything that is not a semantic version.
///
/// ## Examples
///
/// ```rust
/// use semver::Version;
///
/// let version = loose_semver_parser::parse::<Version>("1.2.3-beta+007");
/// assert_eq!(version, Version::parse("1.2.3-beta+007").unwrap());
///
/// assert_eq!(
///     loose_semver_parser::parse::<Version>("1.2"),
///     Version::new(1, 2, 0)
/// );
///
/// assert_eq!(
///     loose_semver_parser::parse::<Version>("1.2x.3"),
///     Version::parse("1.2.0-x.3").unwrap()
/// );
/// ```
pub fn parse<'input, V>(input: &'input str) -> V::Out
where
    V: VersionBuilder<'input>,
{
    scan::<V>(input.trim())
}

/// Parse a string slice into a Version, requiring a full semantic version.
///
/// The trimmed input must match `Major.Minor.Patch[-BuildType][+Build]`, otherwise
/// an [`ErrorKind::InvalidFormat`] error is returned before any parsing happens.
///
/// ## Examples
///
/// ```rust
/// use semver::Version;
///
/// let version = loose_semver_parser::parse_strict::<Version>("2.0.0");
/// assert_eq!(version, Ok(Version::new(2, 0, 0)));
///
/// let error = loose_semver_parser::parse_strict::<Version>("v2.0").unwrap_err();
/// assert_eq!(error.error_kind(), loose_semver_parser::ErrorKind::InvalidFormat);
/// ```
pub fn parse_strict<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    let span = Span::trimmed(input);
    let version = span.at(input);
    if !SEMANTIC_VERSION.is_match(version) {
        #[cfg(feature = "tracing")]
        tracing::debug!(input = %input, "rejected input that is not a semantic version");
        return Err(Error {
            input,
            span,
            error: ErrorKind::InvalidFormat,
        });
    }
    Ok(scan::<V>(version))
}

/// Parse a string slice into a Version, choosing between [`parse`] and [`parse_strict`] at runtime.
///
/// ## Examples
///
/// ```rust
/// use loose_semver_parser::{parse_with, Mode};
/// use semver::Version;
///
/// assert!(parse_with::<Version>("1.2", Mode::Lenient).is_ok());
/// assert!(parse_with::<Version>("1.2", Mode::Strict).is_err());
/// ```
pub fn parse_with<'input, V>(input: &'input str, mode: Mode) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    match mode {
        Mode::Lenient => Ok(parse::<V>(input)),
        Mode::Strict => parse_strict::<V>(input),
    }
}

/// Returns true if the trimmed input is a full semantic version.
///
/// ## Examples
///
/// ```rust
/// assert!(loose_semver_parser::is_semantic("1.0.0-rc.1+build.5"));
/// assert!(!loose_semver_parser::is_semantic("1.0"));
/// ```
pub fn is_semantic(input: &str) -> bool {
    SEMANTIC_VERSION.is_match(input.trim())
}

/// How much the parser accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Accept anything and fall back to default values, see [`parse`].
    Lenient,
    /// Reject anything that is not a full semantic version, see [`parse_strict`].
    Strict,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Lenient
    }
}

/// Possible errors that happen during strict parsing
/// and the location of the input that was rejected.
///
/// # Example
///
/// ```rust
/// use semver::Version;
///
/// let error = loose_semver_parser::parse_strict::<Version>("1.2").unwrap_err();
/// assert_eq!(error.to_string(), "Invalid format: `1.2` is not a semantic version");
///
/// let error = loose_semver_parser::parse_strict::<Version>("  ").unwrap_err();
/// assert_eq!(error.to_string(), "Invalid format: No input");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Error<'input> {
    input: &'input str,
    span: Span,
    error: ErrorKind,
}

impl<'input> Error<'input> {
    /// Creates a new [`OwnedError`] out of this [`Error`].
    ///
    /// This is specialized version of [`Clone`] which returns a different type.
    #[inline]
    pub fn owned(&self) -> OwnedError {
        OwnedError {
            input: self.input.into(),
            span: self.span,
            error: self.error,
        }
    }

    /// Returns the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = loose_semver_parser::parse_strict::<semver::Version>(" 1+ ").unwrap_err();
    /// assert_eq!(error.input(), " 1+ ");
    /// ```
    #[inline]
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns range into the input string that points to the rejected input.
    ///
    /// Surrounding whitespace is not part of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = loose_semver_parser::parse_strict::<semver::Version>(" 1+ ").unwrap_err();
    /// assert_eq!(error.error_span(), 1..3);
    /// ```
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// Returns the kind of error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// assert_eq!(
    ///     loose_semver_parser::parse_strict::<semver::Version>("v1").unwrap_err().error_kind(),
    ///     loose_semver_parser::ErrorKind::InvalidFormat
    /// );
    /// ```
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.error
    }

    /// Returns a slice from the original input line that triggered the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = loose_semver_parser::parse_strict::<semver::Version>(" 1+ ").unwrap_err();
    /// assert_eq!(error.erroneous_input(), "1+");
    /// ```
    #[inline]
    pub fn erroneous_input(&self) -> &'input str {
        self.span.at(self.input)
    }

    /// Returns a text representation of the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = loose_semver_parser::parse_strict::<semver::Version>("1.").unwrap_err();
    /// assert_eq!(error.error_line(), String::from("Invalid format: `1.` is not a semantic version"));
    /// ```
    ///
    /// This is equivalent to the [`Display`] implementation, which can be further customized with format specifiers.
    ///
    /// ```rust
    /// let error = loose_semver_parser::parse_strict::<semver::Version>("").unwrap_err();
    /// assert_eq!(format!("{:!^28}", error), String::from("!!Invalid format: No input!!"));
    /// ```
    pub fn error_line(&self) -> String {
        match self.error {
            ErrorKind::InvalidFormat if self.span.is_empty() => {
                String::from("Invalid format: No input")
            }
            ErrorKind::InvalidFormat => format!(
                "Invalid format: `{}` is not a semantic version",
                self.erroneous_input()
            ),
        }
    }

    /// Returns a caret line indication the erroneous input if it was written under the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = loose_semver_parser::parse_strict::<semver::Version>("foo").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "^^^");
    ///
    /// let error = loose_semver_parser::parse_strict::<semver::Version>("   1.2 ").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~^^^");
    /// ```
    pub fn indicate_erroneous_input(&self) -> String {
        format!(
            "{0:~<start$}{0:^<width$}",
            "",
            start = self.span.start,
            width = self.span.end - self.span.start
        )
    }
}

/// Owned version of [`Error`] which clones the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedError {
    input: String,
    span: Span,
    error: ErrorKind,
}

impl OwnedError {
    /// Return a borrowed version of this error.
    pub fn borrowed(&self) -> Error<'_> {
        Error {
            input: &self.input,
            span: self.span,
            error: self.error,
        }
    }

    /// See [`Error::input`].
    #[inline]
    pub fn input(&self) -> &str {
        self.borrowed().input()
    }

    /// See [`Error::error_span`].
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.borrowed().error_span()
    }

    /// See [`Error::error_kind`].
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.error
    }

    /// See [`Error::erroneous_input`].
    #[inline]
    pub fn erroneous_input(&self) -> &str {
        self.borrowed().erroneous_input()
    }

    /// See [`Error::error_line`].
    #[inline]
    pub fn error_line(&self) -> String {
        self.borrowed().error_line()
    }

    /// See [`Error::indicate_erroneous_input`].
    #[inline]
    pub fn indicate_erroneous_input(&self) -> String {
        self.borrowed().indicate_erroneous_input()
    }
}

impl From<Error<'_>> for OwnedError {
    fn from(error: Error<'_>) -> Self {
        error.owned()
    }
}

/// Possible errors that can happen.
/// These don't include an information as those are covered by various
/// error methods like [`Error::erroneous_input`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Strict parsing was requested and the input is not a full semantic version
    InvalidFormat,
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.error_line())?;
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "|    {}", self.input)?;
            writeln!(f, "|    {}", self.indicate_erroneous_input())?;
        }
        Ok(())
    }
}

impl Display for OwnedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.borrowed().fmt(f)
    }
}

impl std::error::Error for Error<'_> {}

impl std::error::Error for OwnedError {}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The range of `input` without leading and trailing whitespace.
    fn trimmed(input: &str) -> Self {
        let start = input.len() - input.trim_start().len();
        let end = start + input.trim().len();
        Self::new(start, end)
    }

    fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn at<'input>(&self, input: &'input str) -> &'input str {
        &input[self.start..self.end]
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}

/// The five fields of a version, in the order they appear in the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Field {
    Major,
    Minor,
    Patch,
    BuildType,
    Build,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Major => Field::Minor,
            Field::Minor => Field::Patch,
            Field::Patch => Field::BuildType,
            Field::BuildType | Field::Build => Field::Build,
        }
    }

    fn is_numeric(self) -> bool {
        self <= Field::Patch
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Step {
    Continue,
    Stop,
}

/// Single forward scan over an already trimmed input.
///
/// Every field is a contiguous slice of the input, starting at `start`
/// and ending at the character that closes the field.
#[derive(Debug)]
struct Scanner<'input, V> {
    input: &'input str,
    version: V,
    field: Field,
    start: usize,
}

impl<'input, V> Scanner<'input, V>
where
    V: VersionBuilder<'input>,
{
    fn new(input: &'input str) -> Self {
        Scanner {
            input,
            version: V::new(),
            field: Field::Major,
            start: 0,
        }
    }

    fn step(&mut self, at: usize, c: char) -> Step {
        if c == ' ' {
            self.close(at);
            return Step::Stop;
        }
        if self.field.is_numeric() {
            self.numeric(at, c)
        } else {
            self.tail(at, c)
        }
    }

    fn numeric(&mut self, at: usize, c: char) -> Step {
        match c {
            '0'..='9' => Step::Continue,
            '.' => {
                self.close(at);
                self.advance(self.field.next(), at + 1);
                Step::Continue
            }
            '-' => {
                self.close(at);
                self.advance(Field::BuildType, at + 1);
                Step::Continue
            }
            // anything else starts the build type with this very character,
            // a `+` is picked up by the tail and moves on to the build.
            _ => {
                self.close(at);
                self.advance(Field::BuildType, at);
                self.tail(at, c)
            }
        }
    }

    fn tail(&mut self, at: usize, c: char) -> Step {
        match c {
            '+' if self.field == Field::BuildType => {
                self.close(at);
                self.advance(Field::Build, at + 1);
                Step::Continue
            }
            c if is_tail_char(c) => Step::Continue,
            _ => {
                self.close(at);
                Step::Stop
            }
        }
    }

    fn advance(&mut self, field: Field, start: usize) {
        self.field = field;
        self.start = start;
    }

    fn close(&mut self, end: usize) {
        let input = self.input;
        let value = &input[self.start..end];
        match self.field {
            Field::Major => self.version.set_major(parse_number(value)),
            Field::Minor => self.version.set_minor(parse_number(value)),
            Field::Patch => self.version.set_patch(parse_number(value)),
            Field::BuildType if !value.is_empty() => self.version.set_build_type(value),
            Field::Build if !value.is_empty() => self.version.set_build(value),
            Field::BuildType | Field::Build => {}
        }
    }

    fn finish(mut self) -> V::Out {
        self.close(self.input.len());
        self.version.build()
    }
}

fn scan<'input, V>(input: &'input str) -> V::Out
where
    V: VersionBuilder<'input>,
{
    let mut scanner: Scanner<'_, V> = Scanner::new(input);
    for (at, c) in input.char_indices() {
        if scanner.step(at, c) == Step::Stop {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                input = %input,
                ignored = %&input[at..],
                "stopped parsing at an unsupported character"
            );
            return scanner.version.build();
        }
    }
    scanner.finish()
}

/// Numbers that are empty or too large for an u64 become 0.
#[inline]
fn parse_number(value: &str) -> u64 {
    value.parse::<u64>().unwrap_or(0)
}

#[inline]
fn is_tail_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// Records every field the parser produced, borrowing from the input.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct Parts<'input> {
        major: u64,
        minor: u64,
        patch: u64,
        build_type: Option<&'input str>,
        build: Option<&'input str>,
    }

    impl<'input> VersionBuilder<'input> for Parts<'input> {
        type Out = Self;

        fn new() -> Self {
            Self::default()
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
            self.build_type = Some(build_type);
        }

        fn set_build(&mut self, build: &'input str) {
            self.build = Some(build);
        }

        fn build(self) -> Self::Out {
            self
        }
    }

    fn parts(
        major: u64,
        minor: u64,
        patch: u64,
        build_type: Option<&'static str>,
        build: Option<&'static str>,
    ) -> Parts<'static> {
        Parts {
            major,
            minor,
            patch,
            build_type,
            build,
        }
    }

    #[test_case("1" => parts(1, 0, 0, None, None); "major only")]
    #[test_case("1.2" => parts(1, 2, 0, None, None); "major minor only")]
    #[test_case("1.2.3" => parts(1, 2, 3, None, None); "major minor patch")]
    #[test_case("  1.2.3  " => parts(1, 2, 3, None, None); "with whitespace")]
    #[test_case("\t1.2.3\n" => parts(1, 2, 3, None, None); "with tab and newline")]
    #[test_case("01.002.0003" => parts(1, 2, 3, None, None); "leading zeroes")]
    #[test_case("" => parts(0, 0, 0, None, None); "empty")]
    #[test_case("   " => parts(0, 0, 0, None, None); "blank")]
    fn test_simple(input: &str) -> Parts<'_> {
        parse::<Parts<'_>>(input)
    }

    #[test_case("1.2.3-beta" => parts(1, 2, 3, Some("beta"), None); "build type")]
    #[test_case("1.2.3+001" => parts(1, 2, 3, None, Some("001")); "build")]
    #[test_case("1.2.3-beta+007" => parts(1, 2, 3, Some("beta"), Some("007")); "build type and build")]
    #[test_case("1.0.0-rc.1+build.5" => parts(1, 0, 0, Some("rc.1"), Some("build.5")); "dotted metadata")]
    #[test_case("1.2.3-rc-1" => parts(1, 2, 3, Some("rc-1"), None); "hyphen in build type")]
    #[test_case("1.2.3+b-7" => parts(1, 2, 3, None, Some("b-7")); "hyphen in build")]
    #[test_case("1-alpha" => parts(1, 0, 0, Some("alpha"), None); "build type after major")]
    #[test_case("1.2+build" => parts(1, 2, 0, None, Some("build")); "build after minor")]
    #[test_case("1.2.3.4" => parts(1, 2, 3, Some("4"), None); "fourth number")]
    #[test_case("1.2.3.beta" => parts(1, 2, 3, Some("beta"), None); "dot before build type")]
    #[test_case("1.2.3-+b" => parts(1, 2, 3, None, Some("b")); "empty build type")]
    #[test_case("1.2.3-" => parts(1, 2, 3, None, None); "trailing hyphen")]
    #[test_case("1.2.3+" => parts(1, 2, 3, None, None); "trailing plus")]
    fn test_metadata(input: &str) -> Parts<'_> {
        parse::<Parts<'_>>(input)
    }

    #[test_case("1.2x.3" => parts(1, 2, 0, Some("x.3"), None); "letter in minor")]
    #[test_case("1x" => parts(1, 0, 0, Some("x"), None); "letter in major")]
    #[test_case("v2.0" => parts(0, 0, 0, Some("v2.0"), None); "leading v")]
    #[test_case("1..3" => parts(1, 0, 3, None, None); "empty minor")]
    #[test_case("99999999999999999999999.1" => parts(0, 1, 0, None, None); "overflowing major")]
    #[test_case("1.2.3 abc" => parts(1, 2, 3, None, None); "space after patch")]
    #[test_case("1.2 .3" => parts(1, 2, 0, None, None); "space in triplet")]
    #[test_case("1.2.3-beta nightly" => parts(1, 2, 3, Some("beta"), None); "space in build type")]
    #[test_case("1.2.3-be!ta" => parts(1, 2, 3, Some("be"), None); "unsupported char in build type")]
    #[test_case("1.2.3+b+c" => parts(1, 2, 3, None, Some("b")); "second plus")]
    #[test_case("1.2.3-b\tc" => parts(1, 2, 3, Some("b"), None); "tab in build type")]
    #[test_case("1.2!" => parts(1, 2, 0, None, None); "unsupported char in minor")]
    #[test_case("1.2ü.3" => parts(1, 2, 0, None, None); "non ascii char in minor")]
    #[test_case("1.2.3-αβ" => parts(1, 2, 3, None, None); "non ascii build type")]
    fn test_malformed(input: &str) -> Parts<'_> {
        parse::<Parts<'_>>(input)
    }

    #[test_case(0, 0, 0, "", ""; "zero")]
    #[test_case(1, 2, 3, "", ""; "plain")]
    #[test_case(1, 2, 3, "beta", ""; "with build type")]
    #[test_case(1, 2, 3, "", "007"; "with build")]
    #[test_case(10, 20, 30, "rc1", "sha5114f85"; "with both")]
    #[test_case(18446744073709551615, 0, 1, "alpha", "x"; "max major")]
    fn test_round_trip(major: u64, minor: u64, patch: u64, build_type: &str, build: &str) {
        let mut text = format!("{}.{}.{}", major, minor, patch);
        if !build_type.is_empty() {
            text.push('-');
            text.push_str(build_type);
        }
        if !build.is_empty() {
            text.push('+');
            text.push_str(build);
        }
        let expected = Parts {
            major,
            minor,
            patch,
            build_type: Some(build_type).filter(|s| !s.is_empty()),
            build: Some(build).filter(|s| !s.is_empty()),
        };
        assert_eq!(parse::<Parts<'_>>(&text), expected);
        assert_eq!(parse_strict::<Parts<'_>>(&text), Ok(expected));
    }

    #[test_case("2.0.0"; "plain")]
    #[test_case("  2.0.0  "; "with whitespace")]
    #[test_case("1.0.0-rc.1+build.5"; "dotted metadata")]
    #[test_case("1.0.0-alpha"; "build type")]
    #[test_case("1.0.0+001"; "build")]
    #[test_case("01.02.03"; "leading zeroes")]
    #[test_case("1.0.0-x-y.z..w"; "hyphens and dots in build type")]
    fn test_is_semantic(input: &str) {
        assert!(is_semantic(input));
    }

    #[test_case(""; "empty")]
    #[test_case("1"; "major only")]
    #[test_case("1.0"; "no patch")]
    #[test_case("v2.0.0"; "leading v")]
    #[test_case("1.0.0-"; "empty build type")]
    #[test_case("1.0.0-.beta"; "build type starts with dot")]
    #[test_case("1.0.0+"; "empty build")]
    #[test_case("1.0.0 beta"; "inner space")]
    #[test_case("1.0.0-beta+b+c"; "two plus")]
    #[test_case("1.0.0.0"; "four numbers")]
    #[test_case("1.0.0\n1.0.0"; "two lines")]
    fn test_is_not_semantic(input: &str) {
        assert!(!is_semantic(input));
    }

    #[test]
    fn test_strict_parses_like_lenient() {
        let input = "  1.2.3-beta+007 ";
        assert_eq!(
            parse_strict::<Parts<'_>>(input),
            Ok(parse::<Parts<'_>>(input))
        );
    }

    #[test_case("v2.0" => (0..4, "v2.0"); "leading v")]
    #[test_case("  v2.0 " => (2..6, "v2.0"); "with whitespace")]
    #[test_case("" => (0..0, ""); "empty")]
    #[test_case("   " => (3..3, ""); "blank")]
    #[test_case("1.2.3 abc" => (0..9, "1.2.3 abc"); "inner space")]
    fn test_strict_error_span(input: &str) -> (Range<usize>, &str) {
        let error = parse_strict::<Parts<'_>>(input).unwrap_err();
        assert_eq!(error.error_kind(), ErrorKind::InvalidFormat);
        (error.error_span(), error.erroneous_input())
    }

    #[test_case("" => "Invalid format: No input\n|    \n|    \n"; "empty string")]
    #[test_case("v2.0" => "Invalid format: `v2.0` is not a semantic version\n|    v2.0\n|    ^^^^\n"; "leading v")]
    #[test_case("  1.2 " => "Invalid format: `1.2` is not a semantic version\n|      1.2 \n|    ~~^^^\n"; "with whitespace")]
    fn test_full_errors(input: &str) -> String {
        format!("{:#}", parse_strict::<Parts<'_>>(input).unwrap_err())
    }

    #[test]
    fn test_owned_error() {
        let input = String::from(" 1.x ");
        let error = parse_strict::<Parts<'_>>(&input).unwrap_err().owned();
        drop(input);

        assert_eq!(error.input(), " 1.x ");
        assert_eq!(error.error_span(), 1..4);
        assert_eq!(error.erroneous_input(), "1.x");
        assert_eq!(error.error_kind(), ErrorKind::InvalidFormat);
        assert_eq!(error.indicate_erroneous_input(), "~^^^");
        assert_eq!(
            error.to_string(),
            "Invalid format: `1.x` is not a semantic version"
        );
        assert_eq!(error.borrowed().owned(), error);
    }

    #[test]
    fn test_parse_with() {
        assert_eq!(Mode::default(), Mode::Lenient);
        assert_eq!(
            parse_with::<Parts<'_>>("v2.0", Mode::Lenient),
            Ok(parts(0, 0, 0, Some("v2.0"), None))
        );
        assert_eq!(
            parse_with::<Parts<'_>>("2.0.0", Mode::Strict),
            Ok(parts(2, 0, 0, None, None))
        );
        assert!(parse_with::<Parts<'_>>("v2.0", Mode::Strict).is_err());
    }

    #[test]
    fn test_parse_semver() {
        let actual = parse::<semver::Version>("  1.2.3-rc..01+build.007  ");
        let expected = semver::Version::parse("1.2.3-rc.1+build.007").unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_field_order() {
        assert_eq!(Field::Major.next(), Field::Minor);
        assert_eq!(Field::Patch.next(), Field::BuildType);
        assert_eq!(Field::Build.next(), Field::Build);
        assert!(Field::Patch.is_numeric());
        assert!(!Field::BuildType.is_numeric());
    }

    #[test]
    fn test_span_trimmed() {
        assert_eq!(Span::trimmed("  1.2.3 "), Span::new(2, 7));
        assert_eq!(Span::trimmed("1.2.3"), Span::new(0, 5));
        assert_eq!(Span::trimmed(""), Span::new(0, 0));
    }
}
