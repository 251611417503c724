use std::fmt::Display;

/// Maximum allowed byte length for a git tag.
pub const MAX_TAG_LENGTH: usize = 128;

/// The tag does not meet git ref naming rules or security requirements.
///
/// Carries no payload; callers match on the kind, not on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTagFormat;

impl Display for InvalidTagFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid tag format")
    }
}

impl std::error::Error for InvalidTagFormat {}

/// Validates that a tag name conforms to git ref naming rules and security
/// requirements. Slashes are allowed in tag names (e.g. release/v1.0).
///
/// Rules enforced:
/// - Byte length must be <= MAX_TAG_LENGTH
/// - No control characters (< 0x20 or 0x7F)
/// - No space, ~, ^, :, ?, *, [, \
/// - No consecutive dots (..)
/// - No @{ sequence
/// - Cannot start with - or /
/// - Cannot end with /, ., or .lock
/// - Cannot be a single @ character
/// - Path components cannot be empty or start or end with .
///
/// The checks run over bytes, not chars; the forbidden set is ASCII so the
/// two views agree on any UTF-8 input.
pub fn validate_tag(tag: &str) -> Result<(), InvalidTagFormat> {
    if tag.is_empty() {
        return Err(InvalidTagFormat);
    }
    if tag.len() > MAX_TAG_LENGTH {
        return Err(InvalidTagFormat);
    }
    if tag == "@" {
        return Err(InvalidTagFormat);
    }

    let bytes = tag.as_bytes();
    if bytes[0] == b'-' || bytes[0] == b'/' {
        return Err(InvalidTagFormat);
    }
    if bytes[bytes.len() - 1] == b'/' || bytes[bytes.len() - 1] == b'.' {
        return Err(InvalidTagFormat);
    }

    if tag.starts_with("refs/") {
        return Err(InvalidTagFormat);
    }
    if tag.ends_with(".lock") {
        return Err(InvalidTagFormat);
    }
    if tag.contains("..") {
        return Err(InvalidTagFormat);
    }
    if tag.contains("@{") {
        return Err(InvalidTagFormat);
    }

    for segment in tag.split('/') {
        if segment.is_empty() {
            return Err(InvalidTagFormat);
        }
        if segment.starts_with('.') || segment.ends_with('.') {
            return Err(InvalidTagFormat);
        }

        for &c in segment.as_bytes() {
            if c < 0x20 || c == 0x7F {
                return Err(InvalidTagFormat);
            }
            match c {
                b' ' | b'~' | b'^' | b':' | b'?' | b'*' | b'[' | b'\\' => {
                    return Err(InvalidTagFormat)
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// A tag name that has passed [`validate_tag`]. Carrying this type is proof
/// the string is safe to interpolate into a git invocation or path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Tag {
    type Error = InvalidTagFormat;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate_tag(value)?;
        Ok(Tag(value.to_string()))
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_tags() {
        let valid = [
            "v1.0.0",
            "v2.3.4",
            "release-2025-11-15",
            "rc/1.2",
            "feature/x/y",
            "v1.0.0-alpha",
            "v1.0.0-beta.1",
            "123",
            "v1_0_0",
            "v1-0-0",
            "V1.0.0",
            "v",
        ];

        for tag in valid {
            assert_eq!(validate_tag(tag), Ok(()), "{:?} should be valid", tag);
        }
    }

    #[test]
    fn accepts_real_world_tags() {
        let valid = [
            "v1.0.0",
            "v2.3.4-rc1",
            "release-1.2.3",
            "1.0.0",
            "v1.0.0-alpha.1",
            "v1.0.0-beta",
            "20251115",
            "v1.0.0+build.123",
            "chart-1.2.3",
            "operator-v1.0.0",
            "pkg/apis/monitoring/v0.65.2",
        ];

        for tag in valid {
            assert_eq!(validate_tag(tag), Ok(()), "{:?} should be valid", tag);
        }
    }

    #[test]
    fn rejects_injection_attempts() {
        let invalid = [
            "refs/branches/master",
            "refs/heads/main",
            "refs/tags/v1.0.0",
            "../master",
            "foo/../bar",
            "./master",
            ".hidden",
        ];

        for tag in invalid {
            assert_eq!(
                validate_tag(tag),
                Err(InvalidTagFormat),
                "{:?} should be rejected",
                tag
            );
        }
    }

    #[test]
    fn rejects_ref_rule_violations() {
        let invalid = [
            "v1..0",
            "bad@{1}",
            "trailing.",
            "trailing/",
            "foo.lock",
            "-start",
            "/start",
            "@",
            "space tag",
            "v1~2",
            "v1^2",
            "foo:bar",
            "foo?bar",
            "foo*bar",
            "foo[bar",
            "foo\\bar",
            "",
            "foo//bar",
            "foo./bar",
            "foo/.bar",
            "foo\x00bar",
            "foo\nbar",
            "foo\tbar",
        ];

        for tag in invalid {
            assert_eq!(
                validate_tag(tag),
                Err(InvalidTagFormat),
                "{:?} should be rejected",
                tag
            );
        }
    }

    #[test]
    fn length_boundary() {
        let max = "a".repeat(MAX_TAG_LENGTH);
        assert_eq!(validate_tag(&max), Ok(()));

        let over = "a".repeat(MAX_TAG_LENGTH + 1);
        assert_eq!(validate_tag(&over), Err(InvalidTagFormat));
    }

    #[test]
    fn repeated_calls_agree() {
        for tag in ["v1.0.0", "../master", ""] {
            assert_eq!(validate_tag(tag), validate_tag(tag));
        }
    }

    #[test]
    fn newtype_round_trip() {
        let tag = Tag::try_from("v1.2.3").unwrap();
        assert_eq!(tag.as_str(), "v1.2.3");
        assert_eq!(tag.to_string(), "v1.2.3");

        assert!(Tag::try_from("refs/tags/v1.2.3").is_err());
    }
}
