use serde_json::{Map, Value};

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

/// Decoded feature geometry. Only the line-like kinds the border renderer
/// consumes; anything else in the source document produces no feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureGeometry {
    LineString(Vec<GeoPoint>),
    MultiLineString(Vec<Vec<GeoPoint>>),
    Polygon(Vec<Vec<GeoPoint>>),
    MultiPolygon(Vec<Vec<Vec<GeoPoint>>>),
}

impl FeatureGeometry {
    /// Every ring or line of the geometry as one flat list, in input order.
    /// Polygon nesting levels collapse; the renderer draws each entry as a
    /// single line strip either way.
    pub fn rings(&self) -> Vec<&[GeoPoint]> {
        match self {
            FeatureGeometry::LineString(line) => vec![line.as_slice()],
            FeatureGeometry::MultiLineString(lines) => {
                lines.iter().map(Vec::as_slice).collect()
            }
            FeatureGeometry::Polygon(rings) => rings.iter().map(Vec::as_slice).collect(),
            FeatureGeometry::MultiPolygon(polys) => polys
                .iter()
                .flat_map(|rings| rings.iter().map(Vec::as_slice))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub properties: Map<String, Value>,
    pub geometry: FeatureGeometry,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[cfg(test)]
mod tests {
    use super::{FeatureGeometry, GeoPoint};

    fn pt(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon, lat)
    }

    #[test]
    fn rings_flatten_multi_polygon() {
        let geom = FeatureGeometry::MultiPolygon(vec![
            vec![vec![pt(0.0, 0.0), pt(1.0, 0.0)], vec![pt(2.0, 2.0)]],
            vec![vec![pt(5.0, 5.0), pt(6.0, 5.0)]],
        ]);
        let rings = geom.rings();
        assert_eq!(rings.len(), 3);
        assert_eq!(rings[2][0], pt(5.0, 5.0));
    }

    #[test]
    fn rings_wrap_single_line_string() {
        let geom = FeatureGeometry::LineString(vec![pt(0.0, 0.0), pt(1.0, 1.0)]);
        assert_eq!(geom.rings().len(), 1);
        assert_eq!(geom.rings()[0].len(), 2);
    }
}
