use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentBreakdown {
    pub positive: u32,
    pub negative: u32,
    pub normal: u32,
}

pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, keyword: &str) -> SentimentBreakdown;
}

/// Stand-in until a real classifier exists. Ignores the keyword.
pub struct FixedSentiment;

impl SentimentAnalyzer for FixedSentiment {
    fn analyze(&self, _keyword: &str) -> SentimentBreakdown {
        SentimentBreakdown {
            positive: 50,
            negative: 30,
            normal: 20,
        }
    }
}
