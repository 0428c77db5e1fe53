use formats::feature::FeatureCollection;
use foundation::math::{Vec3, lat_lon_to_unit};

use crate::layer::{Layer, LayerId};
use crate::symbology::{BORDER_FADE, DepthFade};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BordersLayer {
    id: LayerId,
}

/// Country borders as unit-sphere polylines, one per decoded ring.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BordersSnapshot {
    pub lines: Vec<Vec<Vec3>>,
}

impl BordersLayer {
    pub fn new(id: u64) -> Self {
        Self { id: LayerId(id) }
    }

    /// Flatten every feature's rings into line strips. Rings with fewer
    /// than two points cannot form a segment and are dropped.
    pub fn build(&self, collection: &FeatureCollection) -> BordersSnapshot {
        let mut snapshot = BordersSnapshot::default();
        for feature in &collection.features {
            for ring in feature.geometry.rings() {
                if ring.len() < 2 {
                    continue;
                }
                let line = ring
                    .iter()
                    .map(|p| lat_lon_to_unit(p.lat_deg, p.lon_deg))
                    .collect();
                snapshot.lines.push(line);
            }
        }
        snapshot
    }
}

impl Layer for BordersLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn fade(&self) -> DepthFade {
        BORDER_FADE
    }
}

#[cfg(test)]
mod tests {
    use formats::feature::{Feature, FeatureCollection, FeatureGeometry, GeoPoint};
    use serde_json::Map;

    use super::BordersLayer;

    fn feature(geometry: FeatureGeometry) -> Feature {
        Feature {
            properties: Map::new(),
            geometry,
        }
    }

    #[test]
    fn one_line_per_ring_across_features() {
        let collection = FeatureCollection {
            features: vec![
                feature(FeatureGeometry::Polygon(vec![
                    vec![
                        GeoPoint::new(0.0, 0.0),
                        GeoPoint::new(1.0, 0.0),
                        GeoPoint::new(0.0, 1.0),
                    ],
                    vec![GeoPoint::new(0.2, 0.2), GeoPoint::new(0.4, 0.2)],
                ])),
                feature(FeatureGeometry::LineString(vec![
                    GeoPoint::new(10.0, 10.0),
                    GeoPoint::new(11.0, 10.0),
                ])),
            ],
        };

        let snapshot = BordersLayer::new(4).build(&collection);
        assert_eq!(snapshot.lines.len(), 3);
        assert_eq!(snapshot.lines[0].len(), 3);
    }

    #[test]
    fn degenerate_rings_are_dropped() {
        let collection = FeatureCollection {
            features: vec![feature(FeatureGeometry::MultiLineString(vec![
                vec![GeoPoint::new(0.0, 0.0)],
                vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)],
                vec![],
            ]))],
        };

        let snapshot = BordersLayer::new(4).build(&collection);
        assert_eq!(snapshot.lines.len(), 1);
    }

    #[test]
    fn border_vertices_sit_on_the_unit_sphere() {
        let collection = FeatureCollection {
            features: vec![feature(FeatureGeometry::LineString(vec![
                GeoPoint::new(-74.01, 40.71),
                GeoPoint::new(-0.13, 51.51),
            ]))],
        };
        let snapshot = BordersLayer::new(4).build(&collection);
        for p in &snapshot.lines[0] {
            assert!((p.length() - 1.0).abs() < 1e-12);
        }
    }
}
