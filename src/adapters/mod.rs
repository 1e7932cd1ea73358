// Adapters layer: concrete implementations for external systems (http feeds, report output).

pub mod http;
pub mod reporter;

pub use http::HttpFeedClient;
pub use reporter::TracingReporter;
