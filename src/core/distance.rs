use crate::domain::model::SearchPoint;

/// Mean Earth radius used by the spherical approximation.
pub const EARTH_RADIUS_MILES: f64 = 3958.0;

/// Great-circle distance in miles between two points, haversine formula.
pub fn haversine_miles(from: SearchPoint, to: SearchPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // 浮點誤差可能讓 a 稍微超過 1
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().atan2((1.0 - a).max(0.0).sqrt());

    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn test_identical_points_are_zero() {
        let p = SearchPoint::new(37.7749, -122.4194);
        assert_eq!(haversine_miles(p, p), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_miles(SearchPoint::new(0.0, 0.0), SearchPoint::new(1.0, 0.0));
        assert!(approx_eq(d, 69.08, 0.05), "got {}", d);
    }

    #[test]
    fn test_quarter_of_equator() {
        let d = haversine_miles(SearchPoint::new(0.0, 0.0), SearchPoint::new(0.0, 90.0));
        assert!(approx_eq(d, std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_MILES, 1e-6));
    }

    #[test]
    fn test_san_francisco_to_oakland() {
        let sf = SearchPoint::new(37.7749, -122.4194);
        let oakland = SearchPoint::new(37.8044, -122.2712);
        let d = haversine_miles(sf, oakland);
        assert!(d > 7.5 && d < 9.0, "got {}", d);
    }

    #[test]
    fn test_antipodal_points() {
        let d = haversine_miles(SearchPoint::new(0.0, 0.0), SearchPoint::new(0.0, 180.0));
        assert!(approx_eq(d, std::f64::consts::PI * EARTH_RADIUS_MILES, 1e-6));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        prop_compose! {
            fn valid_point()(latitude in -90.0f64..=90.0, longitude in -180.0f64..=180.0) -> SearchPoint {
                SearchPoint::new(latitude, longitude)
            }
        }

        proptest! {
            /// Distance from a point to itself is zero
            #[test]
            fn identity_is_zero(p in valid_point()) {
                prop_assert!(haversine_miles(p, p).abs() < 1e-9);
            }

            /// Distance does not depend on argument order
            #[test]
            fn symmetric(a in valid_point(), b in valid_point()) {
                let ab = haversine_miles(a, b);
                let ba = haversine_miles(b, a);
                prop_assert!((ab - ba).abs() < 1e-6);
            }

            /// Never negative, never longer than half the circumference
            #[test]
            fn bounded(a in valid_point(), b in valid_point()) {
                let d = haversine_miles(a, b);
                prop_assert!(d >= 0.0);
                prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_MILES + 1e-6);
            }
        }
    }
}
