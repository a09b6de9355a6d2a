use crate::error::AppError;
use crate::store::TextPattern;
use crate::trend::Granularity;
use serde::Deserialize;

pub const KEYWORD_REQUIRED: &str = "Keyword is required.";
pub const INVALID_AGGREGATION: &str = "Invalid aggregation level. Use 'hourly' or 'daily'.";

/// Rejects blanks. Surrounding spaces of a non-blank value are part of it.
fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}

#[derive(Deserialize, Debug, Default)]
pub struct KeywordParams {
    pub keyword: Option<String>,
}

impl KeywordParams {
    pub fn keyword(&self) -> Result<&str, AppError> {
        non_blank(self.keyword.as_deref()).ok_or(AppError::bad_request(KEYWORD_REQUIRED))
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct TrendParams {
    pub aggregation: Option<String>,
    pub keyword: Option<String>,
}

impl TrendParams {
    pub fn granularity(&self) -> Result<Granularity, AppError> {
        let raw = self
            .aggregation
            .as_deref()
            .ok_or(AppError::bad_request(INVALID_AGGREGATION))?;

        raw.parse()
            .map_err(|e| AppError::bad_request(INVALID_AGGREGATION).with_debug(format!("{e}")))
    }

    /// A blank keyword means no filter.
    pub fn filter(&self) -> Option<TextPattern> {
        non_blank(self.keyword.as_deref()).map(TextPattern::contains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(aggregation: Option<&str>, keyword: Option<&str>) -> TrendParams {
        TrendParams {
            aggregation: aggregation.map(String::from),
            keyword: keyword.map(String::from),
        }
    }

    #[test]
    fn keyword_keeps_surrounding_spaces() {
        let params = KeywordParams {
            keyword: Some("  rust ".into()),
        };
        assert_eq!(params.keyword().unwrap(), "  rust ");
    }

    #[test]
    fn blank_keyword_is_rejected() {
        for raw in [None, Some(""), Some("   ")] {
            let params = KeywordParams {
                keyword: raw.map(String::from),
            };
            assert!(params.keyword().is_err());
        }
    }

    #[test]
    fn granularity_must_be_hourly_or_daily() {
        assert_eq!(
            trend(Some("hourly"), None).granularity().unwrap(),
            Granularity::Hourly
        );
        assert_eq!(
            trend(Some("daily"), None).granularity().unwrap(),
            Granularity::Daily
        );

        let err = trend(Some("weekly"), None).granularity().unwrap_err();
        assert_eq!(err.to_string(), INVALID_AGGREGATION);
        assert!(trend(None, None).granularity().is_err());
    }

    #[test]
    fn blank_trend_keyword_disables_the_filter() {
        assert_eq!(trend(Some("daily"), Some(" ")).filter(), None);
        assert_eq!(
            trend(Some("daily"), Some(" Rust ")).filter(),
            Some(TextPattern::contains(" Rust "))
        );
    }
}
