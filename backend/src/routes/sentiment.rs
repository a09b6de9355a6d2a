use crate::{extractors::Keyword, sentiment::{SentimentAnalyzer, SentimentBreakdown}};
use axum::{Json, extract::State};
use std::sync::Arc;

pub async fn get_sentiment(
    State(analyzer): State<Arc<dyn SentimentAnalyzer>>,
    Keyword(keyword): Keyword,
) -> Json<SentimentBreakdown> {
    Json(analyzer.analyze(&keyword))
}
