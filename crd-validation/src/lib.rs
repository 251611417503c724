mod tag;

pub use tag::{validate_tag, InvalidTagFormat, Tag, MAX_TAG_LENGTH};
