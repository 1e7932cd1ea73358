use crate::domain::model::{RankedLocation, SearchReport};
use crate::domain::ports::Reporter;

/// Emits the search report as log lines.
#[derive(Debug, Clone, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

/// 單行摘要：距離、名稱、地址與預約數
pub fn format_location(rank: usize, location: &RankedLocation) -> String {
    let p = &location.feature.properties;
    let mut line = format!(
        "#{} {:.2} mi | {} [{}] | {}, {}, {} {}",
        rank, location.distance_miles, p.name, p.provider, p.address, p.city, p.state, p.postal_code
    );

    if !p.appointments.is_empty() {
        line.push_str(&format!(" | {} appointments", p.appointments.len()));
        if let Some(first) = p.appointments.first() {
            line.push_str(&format!(" (first {})", first.time));
        }
    }
    if !p.url.is_empty() {
        line.push_str(&format!(" | {}", p.url));
    }
    line
}

impl Reporter for TracingReporter {
    fn report(&self, report: &SearchReport) {
        let stats = &report.outcome.stats;

        tracing::info!(
            "📍 Search point: lat {}, lon {}",
            report.search_point.latitude,
            report.search_point.longitude
        );
        for feed in &report.feeds {
            tracing::info!("📥 {} features from {}", feed.feature_count, feed.url);
        }
        tracing::info!(
            "🔎 {} of {} locations with appointments passed filters",
            stats.survivors,
            stats.considered
        );
        tracing::debug!(
            "excluded: no appointments {}, provider mismatch {}, bad geometry {}, too far {}",
            stats.no_appointments,
            stats.provider_mismatch,
            stats.bad_geometry,
            stats.too_far
        );

        tracing::info!(
            "🏥 Nearest {} locations with appointments passing filters:",
            report.limit
        );
        for (i, location) in report.outcome.nearest.iter().enumerate() {
            tracing::info!("{}", format_location(i + 1, location));
            for appointment in &location.feature.properties.appointments {
                tracing::debug!(
                    "    {} {} vaccines {:?} types {:?}",
                    appointment.time,
                    appointment.r#type,
                    appointment.vaccine_types,
                    appointment.appointment_types
                );
            }
        }
    }
}
