#[derive(Debug)]
pub enum ServerError
{
    IOError(std::io::Error),
    /// The request string could not be parsed as a URL or path at all.
    UrlParsingError(url::ParseError),
    /// Parsed, but not a 6-segment github.com reference path.
    InvalidPath,
}

impl std::error::Error for ServerError {}

impl std::fmt::Display for ServerError
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self {
            Self::IOError(e) => write!(f, "io error: {}", e),
            Self::UrlParsingError(e) => write!(f, "malformed url: {}", e),
            Self::InvalidPath => write!(f, "invalid path"),
        }
    }
}

impl From<std::io::Error> for ServerError
{
    fn from(value: std::io::Error) -> Self
    {
        Self::IOError(value)
    }
}

impl From<url::ParseError> for ServerError
{
    fn from(value: url::ParseError) -> Self
    {
        Self::UrlParsingError(value)
    }
}
