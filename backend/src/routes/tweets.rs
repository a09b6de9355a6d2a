use crate::{
    error::AppError,
    extractors::Keyword,
    geo::MapView,
    models::Post,
    params::{INVALID_AGGREGATION, TrendParams},
    store::{PostStore, TextPattern},
    trend::{BucketKey, TrendBucket},
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Serialize)]
pub struct TweetsResponse {
    tweets: Vec<Post>,
}

#[derive(Serialize)]
pub struct TrendBucketResponse {
    #[serde(rename = "_id")]
    key: BucketKey,
    count: u64,
    label: String,
}

impl From<TrendBucket> for TrendBucketResponse {
    fn from(bucket: TrendBucket) -> Self {
        Self {
            label: bucket.key.label(),
            key: bucket.key,
            count: bucket.count,
        }
    }
}

#[derive(Serialize)]
pub struct TrendsResponse {
    trends: Vec<TrendBucketResponse>,
}

pub async fn search_tweets(
    State(store): State<Arc<dyn PostStore>>,
    Keyword(keyword): Keyword,
) -> Result<Json<TweetsResponse>, AppError> {
    let pattern = TextPattern::contains(keyword);
    let tweets = store
        .find_posts(&pattern)
        .await
        .map_err(|e| AppError::from(e).with_message("Failed to fetch tweets."))?;

    debug!(keyword = pattern.needle(), matches = tweets.len(), "Keyword search done");
    Ok(Json(TweetsResponse { tweets }))
}

pub async fn get_trends(
    State(store): State<Arc<dyn PostStore>>,
    params: Result<Query<TrendParams>, QueryRejection>,
) -> Result<Json<TrendsResponse>, AppError> {
    let Query(params) = params
        .map_err(|e| AppError::bad_request(INVALID_AGGREGATION).with_debug(e.to_string()))?;

    let granularity = params.granularity()?;
    let filter = params.filter();

    let trends = store
        .trend(granularity, filter.as_ref())
        .await
        .map_err(|e| AppError::from(e).with_message("Failed to fetch trend data."))?
        .into_iter()
        .map(TrendBucketResponse::from)
        .collect::<Vec<_>>();

    debug!(
        aggregation = granularity.as_str(),
        buckets = trends.len(),
        "Trend computed"
    );
    Ok(Json(TrendsResponse { trends }))
}

pub async fn get_map(
    State(store): State<Arc<dyn PostStore>>,
    Keyword(keyword): Keyword,
) -> Result<Json<MapView>, AppError> {
    let posts = store
        .find_posts(&TextPattern::contains(keyword))
        .await
        .map_err(|e| AppError::from(e).with_message("Failed to fetch tweets."))?;

    Ok(Json(MapView::from_posts(posts)))
}
