use foundation::math::{Vec3, lat_lon_to_unit};

use crate::layer::{Layer, LayerId};
use crate::symbology::{DepthFade, GRATICULE_FADE};

/// Degrees between neighboring grid lines.
const STEP_DEG: usize = 30;
/// Segments per grid line; enough that the polyline hugs the sphere.
const LINE_SEGMENTS: usize = 120;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GraticuleLayer {
    id: LayerId,
}

/// Parallels and meridians as unit-sphere polylines.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GraticuleSnapshot {
    pub parallels: Vec<Vec<Vec3>>,
    pub meridians: Vec<Vec<Vec3>>,
}

impl GraticuleLayer {
    pub fn new(id: u64) -> Self {
        Self { id: LayerId(id) }
    }

    pub fn build(&self) -> GraticuleSnapshot {
        let mut snapshot = GraticuleSnapshot::default();

        // Parallels stop short of the poles; the polar rings degenerate to
        // points and render as noise.
        for lat in (-60..=60).step_by(STEP_DEG) {
            let line = (0..=LINE_SEGMENTS)
                .map(|i| {
                    let lon = (i as f64 / LINE_SEGMENTS as f64) * 360.0 - 180.0;
                    lat_lon_to_unit(lat as f64, lon)
                })
                .collect();
            snapshot.parallels.push(line);
        }

        // Meridians: -180 inclusive, 180 exclusive (it is the same line).
        for lon in (-180..180).step_by(STEP_DEG) {
            let line = (0..=LINE_SEGMENTS)
                .map(|i| {
                    let lat = (i as f64 / LINE_SEGMENTS as f64) * 180.0 - 90.0;
                    lat_lon_to_unit(lat, lon as f64)
                })
                .collect();
            snapshot.meridians.push(line);
        }

        snapshot
    }
}

impl Layer for GraticuleLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn fade(&self) -> DepthFade {
        GRATICULE_FADE
    }
}

#[cfg(test)]
mod tests {
    use super::{GraticuleLayer, LINE_SEGMENTS};

    #[test]
    fn line_counts_match_the_grid_spacing() {
        let snapshot = GraticuleLayer::new(1).build();
        assert_eq!(snapshot.parallels.len(), 5);
        assert_eq!(snapshot.meridians.len(), 12);
        for line in snapshot.parallels.iter().chain(&snapshot.meridians) {
            assert_eq!(line.len(), LINE_SEGMENTS + 1);
        }
    }

    #[test]
    fn grid_lines_sit_on_the_unit_sphere() {
        let snapshot = GraticuleLayer::new(1).build();
        for line in snapshot.parallels.iter().chain(&snapshot.meridians) {
            for p in line {
                assert!((p.length() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn parallels_close_on_themselves() {
        let snapshot = GraticuleLayer::new(1).build();
        for line in &snapshot.parallels {
            let first = line.first().unwrap();
            let last = line.last().unwrap();
            assert!(first.distance(*last) < 1e-9);
        }
    }
}
