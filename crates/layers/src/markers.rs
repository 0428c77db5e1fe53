use flight::routes::City;
use foundation::math::Vec3;

use crate::layer::{Layer, LayerId};
use crate::symbology::{DepthFade, MARKER_FADE};

/// City marker dimensions in globe-radius units: a filled disc plus a
/// concentric ring, both facing outward along the surface normal.
pub const DOT_RADIUS: f64 = 0.005;
pub const RING_INNER_RADIUS: f64 = 0.009;
pub const RING_OUTER_RADIUS: f64 = 0.011;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MarkersLayer {
    id: LayerId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityMarker {
    pub name: String,
    /// Surface position; on the unit sphere it doubles as the outward
    /// normal the marker discs face along.
    pub position: Vec3,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MarkersSnapshot {
    pub markers: Vec<CityMarker>,
}

impl MarkersLayer {
    pub fn new(id: u64) -> Self {
        Self { id: LayerId(id) }
    }

    pub fn build(&self, cities: &[City]) -> MarkersSnapshot {
        MarkersSnapshot {
            markers: cities
                .iter()
                .map(|city| CityMarker {
                    name: city.name.clone(),
                    position: city.position(),
                })
                .collect(),
        }
    }
}

impl Layer for MarkersLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn fade(&self) -> DepthFade {
        MARKER_FADE
    }
}

#[cfg(test)]
mod tests {
    use flight::routes::builtin_cities;

    use super::{DOT_RADIUS, MarkersLayer, RING_INNER_RADIUS, RING_OUTER_RADIUS};

    #[test]
    fn one_marker_per_city_on_the_surface() {
        let cities = builtin_cities();
        let snapshot = MarkersLayer::new(2).build(&cities);
        assert_eq!(snapshot.markers.len(), cities.len());
        for (marker, city) in snapshot.markers.iter().zip(&cities) {
            assert_eq!(marker.name, city.name);
            assert!((marker.position.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn ring_encloses_the_dot() {
        assert!(DOT_RADIUS < RING_INNER_RADIUS);
        assert!(RING_INNER_RADIUS < RING_OUTER_RADIUS);
    }
}
