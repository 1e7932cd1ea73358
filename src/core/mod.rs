pub mod distance;
pub mod engine;
pub mod filters;
pub mod pipeline;

pub use crate::domain::model::{
    FeatureCollection, FilterCriteria, LocationFeature, RankedLocation, SearchOutcome,
    SearchPoint, SearchReport,
};
pub use crate::domain::ports::{ConfigProvider, FeedSource, Reporter};
pub use crate::utils::error::Result;
