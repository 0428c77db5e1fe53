use foundation::math::Vec3;

/// Fraction of the endpoint chord length used as peak arc elevation.
const ELEVATION_RATIO: f64 = 0.1;

/// Sample a flight path between two points on the unit sphere.
///
/// Chord lerp re-normalized back onto the sphere (a small-angle stand-in
/// for slerp), lifted by a sinusoidal elevation profile: zero at both
/// endpoints, peaking mid-arc at `ELEVATION_RATIO` of the chord length.
/// Longer routes bulge further out. Returns `segments + 1` points.
///
/// Identical endpoints degrade to a constant zero-elevation polyline; an
/// antipodal pair has a zero midpoint (the lerp passes through the sphere
/// center and the zero-safe normalize keeps it there).
pub fn sample_arc(a: Vec3, b: Vec3, segments: usize) -> Vec<Vec3> {
    assert!(segments >= 1, "sample_arc requires at least one segment");

    let max_elevation = a.distance(b) * ELEVATION_RATIO;
    let mut points = Vec::with_capacity(segments + 1);
    for s in 0..=segments {
        let t = s as f64 / segments as f64;
        let point = a.lerp(b, t).normalized();
        let elevation = (t * std::f64::consts::PI).sin() * max_elevation;
        points.push(point.scale(1.0 + elevation));
    }
    points
}

#[cfg(test)]
mod tests {
    use foundation::math::{Vec3, lat_lon_to_unit};

    use super::sample_arc;

    #[test]
    fn returns_segments_plus_one_points() {
        let a = lat_lon_to_unit(0.0, 0.0);
        let b = lat_lon_to_unit(0.0, 90.0);
        assert_eq!(sample_arc(a, b, 48).len(), 49);
        assert_eq!(sample_arc(a, b, 1).len(), 2);
    }

    #[test]
    fn midpoint_bulges_and_endpoints_do_not() {
        let a = lat_lon_to_unit(40.71, -74.01);
        let b = lat_lon_to_unit(51.51, -0.13);
        let points = sample_arc(a, b, 2);

        // Elevation is exactly zero at t = 0 and t = 1.
        assert!((points[0].length() - 1.0).abs() < 1e-12);
        assert!((points[2].length() - 1.0).abs() < 1e-12);
        // Strictly above the surface at the midpoint.
        assert!(points[1].length() > 1.0);
    }

    #[test]
    fn peak_elevation_scales_with_chord_length() {
        let a = lat_lon_to_unit(0.0, 0.0);
        let near = sample_arc(a, lat_lon_to_unit(0.0, 20.0), 2)[1].length();
        let far = sample_arc(a, lat_lon_to_unit(0.0, 120.0), 2)[1].length();
        assert!(far > near);
    }

    #[test]
    fn identical_endpoints_degrade_to_a_constant_polyline() {
        let a = lat_lon_to_unit(47.38, 8.54);
        let points = sample_arc(a, a, 8);
        for p in &points {
            assert!(p.distance(a) < 1e-12);
        }
    }

    #[test]
    fn antipodal_midpoint_collapses_to_the_origin() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(-1.0, 0.0, 0.0);
        let points = sample_arc(a, b, 2);
        assert_eq!(points[1], Vec3::new(0.0, 0.0, 0.0));
    }
}
