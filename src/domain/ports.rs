use crate::domain::model::{FeatureCollection, FilterCriteria, SearchPoint, SearchReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn feed_urls(&self) -> Vec<String>;
    fn add_uuid_parameter(&self) -> bool;
    fn search_point(&self) -> SearchPoint;
    fn filter_criteria(&self) -> FilterCriteria;
    fn result_limit(&self) -> usize;
}

/// Source of feature collections, one per feed URL.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FeatureCollection>;
}

pub trait Reporter: Send + Sync {
    fn report(&self, report: &SearchReport);
}
