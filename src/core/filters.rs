//! Per-feature predicates applied before ranking.
//!
//! Order matters only for which exclusion reason is recorded: availability,
//! provider, geometry, then distance.

use crate::core::distance::haversine_miles;
use crate::domain::model::{FilterCriteria, LocationFeature, SearchPoint};

/// Why a feature was dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exclusion {
    NoAppointments,
    ProviderMismatch,
    BadGeometry { coordinate_count: usize },
    TooFar { distance_miles: f64 },
}

/// Normalised provider filter. Empty means pass-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFilter(String);

impl ProviderFilter {
    pub fn new(provider: &str) -> Self {
        Self(normalize_provider(provider))
    }

    pub fn is_active(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn matches(&self, feature_provider: &str) -> bool {
        !self.is_active() || self.0 == normalize_provider(feature_provider)
    }
}

fn normalize_provider(provider: &str) -> String {
    provider.trim().to_lowercase()
}

pub fn passes_distance_filter(distance_miles: f64, max_distance_miles: f64) -> bool {
    max_distance_miles <= 0.0 || distance_miles <= max_distance_miles
}

/// Runs the full predicate chain for one feature and returns its distance
/// from `origin` when it survives.
pub fn evaluate(
    feature: &LocationFeature,
    origin: SearchPoint,
    provider: &ProviderFilter,
    criteria: &FilterCriteria,
) -> Result<f64, Exclusion> {
    if !feature.has_appointments() {
        return Err(Exclusion::NoAppointments);
    }

    if !provider.matches(&feature.properties.provider) {
        return Err(Exclusion::ProviderMismatch);
    }

    let location = feature.geometry.point().ok_or(Exclusion::BadGeometry {
        coordinate_count: feature.geometry.coordinates.len(),
    })?;

    let distance_miles = haversine_miles(origin, location);
    if !passes_distance_filter(distance_miles, criteria.max_distance_miles) {
        return Err(Exclusion::TooFar { distance_miles });
    }

    Ok(distance_miles)
}
