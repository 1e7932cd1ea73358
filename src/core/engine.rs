use crate::core::pipeline::SearchPipeline;
use crate::domain::model::{FeedSummary, SearchReport};
use crate::domain::ports::{ConfigProvider, FeedSource, Reporter};
use crate::utils::error::Result;

/// One linear pass: fetch every feed, filter, rank, report.
pub struct SearchEngine<F: FeedSource, C: ConfigProvider, R: Reporter> {
    source: F,
    config: C,
    reporter: R,
}

impl<F: FeedSource, C: ConfigProvider, R: Reporter> SearchEngine<F, C, R> {
    pub fn new(source: F, config: C, reporter: R) -> Self {
        Self {
            source,
            config,
            reporter,
        }
    }

    pub async fn run(&self) -> Result<SearchReport> {
        tracing::info!("🚀 Starting appointment search");

        // Fetch：任何一個 feed 失敗就中止
        let mut feeds = Vec::new();
        let mut features = Vec::new();
        for url in self.config.feed_urls() {
            let collection = self.source.fetch(&url).await?;
            tracing::info!(
                "📥 Got {} features in response from {}",
                collection.features.len(),
                url
            );
            feeds.push(FeedSummary {
                url,
                feature_count: collection.features.len(),
            });
            features.extend(collection.features);
        }

        // Filter + rank，一次處理所有 feed
        let search_point = self.config.search_point();
        let criteria = self.config.filter_criteria();
        let limit = self.config.result_limit();
        let pipeline = SearchPipeline::new(search_point, criteria.clone(), limit);
        let outcome = pipeline.run(features);

        let report = SearchReport {
            search_point,
            criteria,
            limit,
            feeds,
            outcome,
        };

        self.reporter.report(&report);
        tracing::info!("✅ Appointment search finished");

        Ok(report)
    }
}
