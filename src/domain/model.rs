use serde::{Deserialize, Deserializer, Serialize};

/// `null` 與缺少欄位一律視為預設值
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Point the search is centred on, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl SearchPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// GeoJSON geometry. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub coordinates: Vec<f64>,
}

impl Geometry {
    /// Reads index 0 as longitude and index 1 as latitude. Any other
    /// coordinate count yields `None`.
    pub fn point(&self) -> Option<SearchPoint> {
        match self.coordinates.as_slice() {
            [longitude, latitude] => Some(SearchPoint::new(*latitude, *longitude)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub r#type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vaccine_types: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointment_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationProperties {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider_location_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointments_last_fetched: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointments_last_modified: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointments_available: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointments_available_all_doses: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointments_available_2nd_dose_only: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationFeature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub geometry: Geometry,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: LocationProperties,
}

impl LocationFeature {
    /// At least one slot, or the explicit availability flag.
    pub fn has_appointments(&self) -> bool {
        !self.properties.appointments.is_empty() || self.properties.appointments_available
    }
}

/// One feed response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<LocationFeature>,
}

/// A feature that survived filtering, tagged with its distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedLocation {
    pub feature: LocationFeature,
    pub distance_miles: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Empty means no provider filter.
    pub provider: String,
    /// `<= 0` means no distance filter.
    pub max_distance_miles: f64,
}

impl FilterCriteria {
    pub fn new(provider: impl Into<String>, max_distance_miles: f64) -> Self {
        Self {
            provider: provider.into(),
            max_distance_miles,
        }
    }
}

/// 各過濾條件排除的數量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub considered: usize,
    pub no_appointments: usize,
    pub provider_mismatch: usize,
    pub bad_geometry: usize,
    pub too_far: usize,
    pub survivors: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub nearest: Vec<RankedLocation>,
    pub stats: FilterStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedSummary {
    pub url: String,
    pub feature_count: usize,
}

/// Everything the reporter needs after one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub search_point: SearchPoint,
    pub criteria: FilterCriteria,
    pub limit: usize,
    pub feeds: Vec<FeedSummary>,
    pub outcome: SearchOutcome,
}
