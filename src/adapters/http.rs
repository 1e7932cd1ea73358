use crate::domain::model::FeatureCollection;
use crate::domain::ports::FeedSource;
use crate::utils::error::{FinderError, Result};
use rand::Rng;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const EXPECTED_STATUS: u16 = 200;

/// 記錄這些標頭以判斷回應是否來自 CDN 快取
const CACHE_DIAGNOSTIC_HEADERS: [&str; 4] = ["last-modified", "cf-cache-status", "cf-ray", "age"];

pub struct HttpFeedClient {
    client: Client,
    add_uuid_parameter: bool,
}

impl HttpFeedClient {
    pub fn new(add_uuid_parameter: bool, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            add_uuid_parameter,
        })
    }

    /// Resolves the URL actually requested, appending `q=<random>` when
    /// cache-busting is enabled.
    pub fn request_url(&self, url: &str) -> Result<Url> {
        let mut parsed = Url::parse(url).map_err(|source| FinderError::InvalidUrlError {
            url: url.to_string(),
            source,
        })?;

        if self.add_uuid_parameter {
            let token = format!("{:032x}", rand::thread_rng().gen::<u128>());
            parsed.query_pairs_mut().append_pair("q", &token);
        }

        Ok(parsed)
    }
}

#[async_trait::async_trait]
impl FeedSource for HttpFeedClient {
    async fn fetch(&self, url: &str) -> Result<FeatureCollection> {
        let request_url = self.request_url(url)?;
        tracing::info!("🌐 GET {}", request_url);

        let response = self.client.get(request_url.clone()).send().await?;

        for name in CACHE_DIAGNOSTIC_HEADERS {
            let values: Vec<&str> = response
                .headers()
                .get_all(name)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .collect();
            tracing::debug!("response header {} = {:?}", name, values);
        }

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if status.as_u16() != EXPECTED_STATUS {
            return Err(FinderError::UnexpectedStatusError {
                url: request_url.to_string(),
                status: status.as_u16(),
                expected: EXPECTED_STATUS,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| FinderError::ParseError {
            url: request_url.to_string(),
            source,
        })
    }
}
