//! Embedded blog-post schema definitions.

use std::fmt;
use std::str::FromStr;

/// Blog-post schema served by default.
pub const POST_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-04/schema#",
  "type": "object",
  "title": "post",
  "description": "a blog post",
  "properties": {
    "title": {
      "type": "string",
      "minLength": 1,
      "maxLength": 50,
      "pattern": "^[A-Z].*"
    },
    "date": {
      "type": "string"
    },
    "body": {
      "type": "string"
    },
    "views": {
      "type": "integer",
      "minimum": 1
    },
    "post_type": {
      "type": "string",
      "enum": ["cross-post", "original"]
    },
    "tags": {
      "type": "array",
      "items": {
        "type": "string"
      }
    }
  },
  "required": ["title", "date", "body", "post_type"]
}"#;

/// Documented variant that also requires `author_email`.
///
/// `author_email` is not declared under `properties`, so clients must send it
/// with no constraint on its value.
pub const POST_SCHEMA_WITH_AUTHOR_EMAIL: &str = r#"{
  "$schema": "http://json-schema.org/draft-04/schema#",
  "type": "object",
  "title": "post",
  "description": "a blog post",
  "properties": {
    "title": {
      "type": "string",
      "minLength": 1,
      "maxLength": 50,
      "pattern": "^[A-Z].*"
    },
    "date": {
      "type": "string"
    },
    "body": {
      "type": "string"
    },
    "views": {
      "type": "integer",
      "minimum": 1
    },
    "post_type": {
      "type": "string",
      "enum": ["cross-post", "original"]
    },
    "tags": {
      "type": "array",
      "items": {
        "type": "string"
      }
    }
  },
  "required": ["title", "date", "body", "author_email", "post_type"]
}"#;

/// Which embedded schema the server enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaVariant {
    #[default]
    Post,
    PostWithAuthorEmail,
}

impl SchemaVariant {
    pub fn definition(&self) -> &'static str {
        match self {
            Self::Post => POST_SCHEMA,
            Self::PostWithAuthorEmail => POST_SCHEMA_WITH_AUTHOR_EMAIL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::PostWithAuthorEmail => "post-with-author-email",
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "post" => Ok(Self::Post),
            "post-with-author-email" => Ok(Self::PostWithAuthorEmail),
            other => Err(format!(
                "unknown schema variant {other:?} (expected \"post\" or \"post-with-author-email\")"
            )),
        }
    }
}
