use async_trait::async_trait;
use thiserror::Error;

use crate::models::Post;
use crate::trend::{Granularity, TrendBucket};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A literal substring to look for in post text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPattern {
    needle: String,
    case_sensitive: bool,
}

impl TextPattern {
    pub fn new(needle: impl Into<String>, case_sensitive: bool) -> Self {
        Self {
            needle: needle.into(),
            case_sensitive,
        }
    }

    /// Case-insensitive, unanchored match of `needle`.
    pub fn contains(needle: impl Into<String>) -> Self {
        Self::new(needle, false)
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn matches(&self, text: &str) -> bool {
        if self.case_sensitive {
            text.contains(&self.needle)
        } else {
            text.to_lowercase().contains(&self.needle.to_lowercase())
        }
    }

    /// `LIKE` pattern with `\` as the escape character.
    pub fn to_like(&self) -> String {
        let mut out = String::with_capacity(self.needle.len() + 2);
        out.push('%');
        for c in self.needle.chars() {
            if matches!(c, '%' | '_' | '\\') {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('%');
        out
    }
}

/// Read-only access to the post collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_posts(&self, pattern: &TextPattern) -> Result<Vec<Post>, StoreError>;

    /// Buckets posts by `granularity`, over the whole collection unless
    /// `filter` narrows it.
    async fn trend(
        &self,
        granularity: Granularity,
        filter: Option<&TextPattern>,
    ) -> Result<Vec<TrendBucket>, StoreError>;

    async fn close(&self);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignoring_case_anywhere_in_the_text() {
        let p = TextPattern::contains("rust");
        assert!(p.matches("I love Rust!"));
        assert!(p.matches("TRUSTED"));
        assert!(!p.matches("rus t"));
    }

    #[test]
    fn case_sensitive_flag_is_honored() {
        let p = TextPattern::new("Rust", true);
        assert!(p.is_case_sensitive());
        assert!(p.matches("Rustacean"));
        assert!(!p.matches("rustacean"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(TextPattern::contains("abc").to_like(), "%abc%");
        assert_eq!(TextPattern::contains("50%").to_like(), r"%50\%%");
        assert_eq!(TextPattern::contains("a_b").to_like(), r"%a\_b%");
        assert_eq!(TextPattern::contains(r"c:\x").to_like(), r"%c:\\x%");
    }

    #[test]
    fn metacharacters_match_literally() {
        let p = TextPattern::contains("a.b");
        assert!(p.matches("xa.by"));
        assert!(!p.matches("axb"));
    }
}
