//! # Distance
//!
//! Trait and implementations for measuring how far apart two coordinates are.
//!
//! Distance functions are pluggable. [`Haversine`] is the default and the
//! one [`distance_km`] uses; [`Equirectangular`] trades accuracy for speed
//! over short ranges.

use super::{Coordinate, CoordinateError};

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Trait for measuring the distance between coordinates
///
/// Implementations may assume both inputs already passed
/// [`Coordinate::validate`].
pub trait Distance: Send + Sync {
    /// Distance in kilometres, never negative
    fn distance_km(&self, a: &Coordinate, b: &Coordinate) -> f64;

    /// Name of this distance function (for debugging/config)
    fn name(&self) -> &'static str;
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

/// Great-circle distance via the haversine formula
///
/// Exact for a spherical Earth of the given radius.
#[derive(Clone, Copy, Debug)]
pub struct Haversine {
    pub radius_km: f64,
}

impl Haversine {
    pub fn with_radius(radius_km: f64) -> Self {
        Self { radius_km }
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::with_radius(EARTH_RADIUS_KM)
    }
}

impl Distance for Haversine {
    fn distance_km(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        let d_lat = (b.latitude - a.latitude).to_radians();
        let d_lon = (b.longitude - a.longitude).to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + a.latitude_rad().cos() * b.latitude_rad().cos() * (d_lon / 2.0).sin().powi(2);

        // Rounding can push h a hair past 1 for antipodal points
        let h = h.clamp(0.0, 1.0);

        2.0 * self.radius_km * h.sqrt().atan2((1.0 - h).sqrt())
    }

    fn name(&self) -> &'static str {
        "haversine"
    }
}

/// Equirectangular projection distance
///
/// Within a fraction of a percent of haversine over a few tens of
/// kilometres, cheaper to compute. Degrades towards the poles and across
/// the antimeridian.
#[derive(Clone, Copy, Debug)]
pub struct Equirectangular {
    pub radius_km: f64,
}

impl Default for Equirectangular {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Distance for Equirectangular {
    fn distance_km(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        let mean_lat = (a.latitude_rad() + b.latitude_rad()) / 2.0;
        let x = (b.longitude - a.longitude).to_radians() * mean_lat.cos();
        let y = (b.latitude - a.latitude).to_radians();

        self.radius_km * x.hypot(y)
    }

    fn name(&self) -> &'static str {
        "equirectangular"
    }
}

/// Haversine distance in kilometres between two validated coordinates
///
/// Fails with the first invalid coordinate found.
///
/// # Example
/// ```
/// use nearest_place::{Coordinate, distance_km};
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// let d = distance_km(&a, &b).unwrap();
/// assert!((d - 111.195).abs() < 0.001);
/// ```
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> Result<f64, CoordinateError> {
    a.validate()?;
    b.validate()?;
    Ok(Haversine::default().distance_km(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn paris() -> Coordinate {
        Coordinate::new(48.8566, 2.3522)
    }

    #[test]
    fn test_same_point_is_zero() {
        for c in [paris(), Coordinate::new(-90.0, 180.0), Coordinate::new(0.0, 0.0)] {
            let d = distance_km(&c, &c).unwrap();
            assert!(d.abs() < EPSILON);
        }
    }

    #[test]
    fn test_symmetric() {
        let a = paris();
        let b = Coordinate::new(-33.8688, 151.2093);
        let ab = distance_km(&a, &b).unwrap();
        let ba = distance_km(&b, &a).unwrap();
        assert!((ab - ba).abs() < EPSILON);
    }

    #[test]
    fn test_non_negative() {
        let points = [
            paris(),
            Coordinate::new(90.0, 0.0),
            Coordinate::new(-90.0, 0.0),
            Coordinate::new(0.0, 180.0),
            Coordinate::new(0.0, -180.0),
            Coordinate::new(-6.2088, 106.8456),
        ];
        for a in &points {
            for b in &points {
                assert!(distance_km(a, b).unwrap() >= 0.0);
            }
        }
    }

    #[test]
    fn test_one_degree_on_equator() {
        let d = distance_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 1.0)).unwrap();
        assert!((d - 111.1949).abs() < 0.001);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = distance_km(&Coordinate::new(90.0, 0.0), &Coordinate::new(-90.0, 0.0)).unwrap();
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half).abs() < 1e-6);
        assert!(d.is_finite());
    }

    #[test]
    fn test_jakarta_bandung() {
        let jakarta = Coordinate::new(-6.2088, 106.8456);
        let bandung = Coordinate::new(-6.9175, 107.6191);
        let d = distance_km(&jakarta, &bandung).unwrap();
        assert!(d > 110.0 && d < 125.0);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let bad = Coordinate::new(91.0, 0.0);
        assert_eq!(
            distance_km(&paris(), &bad),
            Err(CoordinateError::LatitudeOutOfRange(91.0))
        );
        assert!(distance_km(&Coordinate::new(0.0, f64::NAN), &paris()).is_err());
    }

    #[test]
    fn test_moving_away_increases_distance() {
        let origin = paris();
        let target = Coordinate::new(48.8606, 2.3376);
        let base = distance_km(&origin, &target).unwrap();

        // target lies west of origin, so decreasing longitude moves it away
        let further = distance_km(&origin, &target.offset(0.0, -0.00001)).unwrap();
        let closer = distance_km(&origin, &target.offset(0.0, 0.00001)).unwrap();

        assert!(further > base);
        assert!(closer < base);
    }

    #[test]
    fn test_custom_radius_scales() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(10.0, 10.0);
        let earth = Haversine::default().distance_km(&a, &b);
        let unit = Haversine::with_radius(1.0).distance_km(&a, &b);
        assert!((earth / unit - EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_equirectangular_close_to_haversine() {
        let a = paris();
        let b = Coordinate::new(48.8584, 2.2945);
        let h = Haversine::default().distance_km(&a, &b);
        let e = Equirectangular::default().distance_km(&a, &b);
        assert!((h - e).abs() / h < 0.001);
    }

    #[test]
    fn test_distance_names() {
        assert_eq!(Haversine::default().name(), "haversine");
        assert_eq!(Equirectangular::default().name(), "equirectangular");
    }
}
