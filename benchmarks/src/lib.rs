use loose_semver_parser::{is_semantic, parse, parse_strict};
use loose_version::Version as LooseVersion;
use regex::Regex;
use semver::Version;

const INPUT_S: &str = "1.0.0";
const INPUT_XL: &str = "  1.2.3-1.alpha1.9+build5.7.3aedf.01337  ";
pub const INPUTS: [&str; 2] = [INPUT_S, INPUT_XL];

/// Inputs that only the lenient path accepts.
pub const LOOSE_INPUTS: [&str; 3] = ["1", "1.2x.3", "v2.0 final"];

#[inline(always)]
pub fn loose_semver(input: &str) -> Version {
    parse::<Version>(input)
}

#[inline(always)]
pub fn loose_version(input: &str) -> LooseVersion {
    parse::<LooseVersion>(input)
}

#[inline(always)]
pub fn loose_version_strict(input: &str) -> LooseVersion {
    parse_strict::<LooseVersion>(input).unwrap()
}

#[inline(always)]
pub fn strict_check(input: &str) -> bool {
    is_semantic(input)
}

#[inline(always)]
pub fn semver(input: &str) -> Version {
    Version::parse(input.trim()).unwrap()
}

#[inline(always)]
pub fn regex(re: &Regex, input: &str) -> Version {
    regex_parser(re, input).unwrap()
}

pub fn parsing_regex() -> Regex {
    Regex::new(r"^\s*(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?\s*$").unwrap()
}

pub fn regex_parser(re: &Regex, input: &str) -> Option<Version> {
    let caps = re.captures(input)?;
    let number = |name: &str| caps.name(name)?.as_str().parse::<u64>().ok();

    let mut version = Version::new(number("major")?, number("minor")?, number("patch")?);

    if let Some(pre) = caps.name("prerelease") {
        version.pre = semver::Prerelease::new(pre.as_str()).ok()?;
    }
    if let Some(build) = caps.name("buildmetadata") {
        version.build = semver::BuildMetadata::new(build.as_str()).ok()?;
    }

    Some(version)
}
