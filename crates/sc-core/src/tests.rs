//! Unit tests for sc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ListenerId, SubjectId};

    #[test]
    fn index_roundtrip() {
        let id = SubjectId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SubjectId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(SubjectId(0) < SubjectId(1));
        assert!(ListenerId(100) > ListenerId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(SubjectId::INVALID.0, u32::MAX);
        assert_eq!(ListenerId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(SubjectId(7).to_string(), "SubjectId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance_iff_identical() {
        let p = GeoPoint::new(30.694, -88.043);
        assert!(p.distance_m(p) < 1e-6);

        let q = GeoPoint::new(30.695, -88.043);
        assert!(p.distance_m(q) > 1.0);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(0.001, 0.002);
        let b = GeoPoint::new(-0.003, 0.004);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn metre_scale_precision() {
        // 0.00135° of latitude from the equator ≈ 150 m — the scale zone
        // boundaries are judged at.
        let center = GeoPoint::new(0.0, 0.0);
        let p = GeoPoint::new(0.001_35, 0.0);
        let d = center.distance_m(p);
        assert!((d - 150.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn validity_ranges() {
        assert!(GeoPoint::new(0.0, 0.0).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod time {
    use crate::Millis;

    #[test]
    fn arithmetic() {
        let t = Millis(10);
        assert_eq!(t + 5, Millis(15));
        assert_eq!(t.offset(3), Millis(13));
        assert_eq!(Millis(15).saturating_since(Millis(10)), 5);
    }

    #[test]
    fn since_saturates_on_reordered_samples() {
        assert_eq!(Millis(10).saturating_since(Millis(15)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Millis(250).to_string(), "250ms");
    }
}
