use serde::Serialize;
use url::Url;

use crate::error::ServerError;
use crate::ServerResult;

const GITHUB_HOST: &str = "github.com";
const PATH_ELEMENTS: usize = 6;

/// A decomposed `github.com/{org}/{repo}/{group}/{version}/{kind}[@{tag}]`
/// reference path. `tag` is empty when no `@` suffix was present.
///
/// Decomposition makes no judgement about the tag content; that is
/// `crd_validation`'s job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GhPath
{
    pub org: String,
    pub repo: String,
    pub group: String,
    pub version: String,
    pub kind: String,
    pub tag: String,
}

impl TryFrom<&str> for GhPath
{
    type Error = ServerError;

    fn try_from(raw: &str) -> Result<Self, Self::Error>
    {
        let path = path_portion(raw)?;

        let trimmed = path.strip_prefix('/').unwrap_or(&path);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        // A stop-after-6 split: extra slashes stay inside the last piece.
        let elements: Vec<&str> = trimmed.splitn(PATH_ELEMENTS, '/').collect();
        if elements.len() != PATH_ELEMENTS || elements.iter().any(|e| e.is_empty()) {
            return Err(ServerError::InvalidPath);
        }
        if elements[0] != GITHUB_HOST {
            return Err(ServerError::InvalidPath);
        }

        // Split on the first '@' only, so a tag may itself contain '@'.
        let (kind, tag) = match elements[5].split_once('@') {
            Some((kind, tag)) => (kind, tag),
            None => (elements[5], ""),
        };

        Ok(GhPath {
            org: elements[1].to_string(),
            repo: elements[2].to_string(),
            group: elements[3].to_string(),
            version: elements[4].to_string(),
            kind: kind.to_string(),
            tag: tag.to_string(),
        })
    }
}

/// Extracts the path portion of the request string; scheme and query are
/// irrelevant to decomposition.
fn path_portion(raw: &str) -> ServerResult<String>
{
    match Url::parse(raw) {
        Ok(url) => Ok(url.path().to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            // Scheme-less input: the path runs to the query or fragment.
            let end = raw.find(['?', '#']).unwrap_or(raw.len());
            Ok(raw[..end].to_string())
        }
        Err(e) => Err(ServerError::from(e)),
    }
}
