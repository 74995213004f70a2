//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  Geofence
//! classification compares distances against zone boundaries padded by
//! ~10 m noise buffers, so sub-metre distance fidelity matters; f32
//! haversine rounds by several metres at city scale.

/// A WGS-84 geographic coordinate stored as double-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` when both coordinates are finite and within WGS-84 ranges
    /// (lat ∈ [-90, 90], lon ∈ [-180, 180]).
    ///
    /// (0, 0) is a legal coordinate; "zero means no fix" filtering is the
    /// location source's concern, not this type's.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Spherical-earth approximation (mean radius 6 371 000 m): accurate to
    /// well under boundary-buffer precision at the metres-to-kilometres
    /// distances a safe zone spans.  Ellipsoidal geodesy buys nothing here.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
