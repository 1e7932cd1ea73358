use crate::core::filters::{evaluate, Exclusion, ProviderFilter};
use crate::domain::model::{
    FilterCriteria, FilterStats, LocationFeature, RankedLocation, SearchOutcome, SearchPoint,
};

/// Filter, rank and truncate the combined feature set of every feed.
pub struct SearchPipeline {
    origin: SearchPoint,
    criteria: FilterCriteria,
    provider: ProviderFilter,
    limit: usize,
}

impl SearchPipeline {
    pub fn new(origin: SearchPoint, criteria: FilterCriteria, limit: usize) -> Self {
        let provider = ProviderFilter::new(&criteria.provider);
        Self {
            origin,
            criteria,
            provider,
            limit,
        }
    }

    pub fn run<I>(&self, features: I) -> SearchOutcome
    where
        I: IntoIterator<Item = LocationFeature>,
    {
        let mut stats = FilterStats::default();
        let mut survivors = Vec::new();

        for feature in features {
            stats.considered += 1;
            match evaluate(&feature, self.origin, &self.provider, &self.criteria) {
                Ok(distance_miles) => survivors.push(RankedLocation {
                    feature,
                    distance_miles,
                }),
                Err(Exclusion::NoAppointments) => stats.no_appointments += 1,
                Err(Exclusion::ProviderMismatch) => stats.provider_mismatch += 1,
                Err(Exclusion::BadGeometry { coordinate_count }) => {
                    tracing::warn!(
                        "⚠️ Skipping '{}' ({}): unexpected coordinates length {}",
                        feature.properties.name,
                        feature.properties.provider,
                        coordinate_count
                    );
                    stats.bad_geometry += 1;
                }
                Err(Exclusion::TooFar { .. }) => stats.too_far += 1,
            }
        }

        stats.survivors = survivors.len();
        tracing::debug!("{} of {} features passed filters", stats.survivors, stats.considered);

        SearchOutcome {
            nearest: nearest(survivors, self.limit),
            stats,
        }
    }
}

/// Stable ascending sort by distance, then keep the first `limit`.
pub fn nearest(mut locations: Vec<RankedLocation>, limit: usize) -> Vec<RankedLocation> {
    locations.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    locations.truncate(limit);
    locations
}
