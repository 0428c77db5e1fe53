use serde::Deserialize;
use serde_json::{Map, Value};

use crate::feature::{Feature, FeatureCollection, FeatureGeometry, GeoPoint};

/// Linear quantization transform: `position = running_sum * scale + translate`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TopoTransform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

/// A parsed topology document.
///
/// Arcs are shared, delta-encoded polylines: the first point of an arc is
/// absolute, every following point is a delta from the previous one.
/// Objects reference arcs by signed index; a negative reference is the
/// bitwise complement of the true index and means "traverse reversed". Objects
/// are kept as raw JSON and interpreted per object at decode time, so a
/// document mixing supported and unsupported geometry kinds still parses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<TopoTransform>,
    pub arcs: Vec<Vec<[f64; 2]>>,
    pub objects: Map<String, Value>,
}

#[derive(Debug)]
pub enum TopologyError {
    NoObjects,
    UnknownObject { name: String },
    ArcOutOfRange { reference: i32, arc_count: usize },
    Malformed { reason: String },
}

impl std::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyError::NoObjects => {
                write!(f, "topology has no objects")
            }
            TopologyError::UnknownObject { name } => {
                write!(f, "topology has no object named {name:?}")
            }
            TopologyError::ArcOutOfRange { reference, arc_count } => {
                write!(
                    f,
                    "arc reference {reference} is outside the arc table (len {arc_count})"
                )
            }
            TopologyError::Malformed { reason } => {
                write!(f, "malformed topology: {reason}")
            }
        }
    }
}

impl std::error::Error for TopologyError {}

/// One geometry entry of a topology object, as references into the arc
/// table. Kinds the decoder does not handle fall into `Unsupported` and
/// yield no feature rather than failing the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
enum TopoObject {
    GeometryCollection {
        geometries: Vec<TopoObject>,
    },
    LineString {
        arcs: Vec<i32>,
        #[serde(default)]
        properties: Option<Map<String, Value>>,
    },
    MultiLineString {
        arcs: Vec<Vec<i32>>,
        #[serde(default)]
        properties: Option<Map<String, Value>>,
    },
    Polygon {
        arcs: Vec<Vec<i32>>,
        #[serde(default)]
        properties: Option<Map<String, Value>>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i32>>>,
        #[serde(default)]
        properties: Option<Map<String, Value>>,
    },
    #[serde(other)]
    Unsupported,
}

impl TopoObject {
    fn take_properties(&mut self) -> Map<String, Value> {
        match self {
            TopoObject::LineString { properties, .. }
            | TopoObject::MultiLineString { properties, .. }
            | TopoObject::Polygon { properties, .. }
            | TopoObject::MultiPolygon { properties, .. } => {
                properties.take().unwrap_or_default()
            }
            TopoObject::GeometryCollection { .. } | TopoObject::Unsupported => Map::new(),
        }
    }
}

impl Topology {
    pub fn from_json_str(payload: &str) -> Result<Self, TopologyError> {
        serde_json::from_str(payload).map_err(|e| TopologyError::Malformed {
            reason: e.to_string(),
        })
    }

    pub fn from_json_value(value: Value) -> Result<Self, TopologyError> {
        serde_json::from_value(value).map_err(|e| TopologyError::Malformed {
            reason: e.to_string(),
        })
    }

    /// Decode the first named object in document order.
    ///
    /// Convenience for single-object exports (the common case for border
    /// files); use [`Topology::decode_object`] when the document carries
    /// more than one object.
    pub fn decode(&self) -> Result<FeatureCollection, TopologyError> {
        let (_, value) = self.objects.iter().next().ok_or(TopologyError::NoObjects)?;
        self.decode_value(value)
    }

    /// Decode the named object.
    pub fn decode_object(&self, name: &str) -> Result<FeatureCollection, TopologyError> {
        let value = self
            .objects
            .get(name)
            .ok_or_else(|| TopologyError::UnknownObject {
                name: name.to_string(),
            })?;
        self.decode_value(value)
    }

    fn decode_value(&self, value: &Value) -> Result<FeatureCollection, TopologyError> {
        let object: TopoObject =
            serde_json::from_value(value.clone()).map_err(|e| TopologyError::Malformed {
                reason: e.to_string(),
            })?;

        let members = match object {
            TopoObject::GeometryCollection { geometries } => geometries,
            single => vec![single],
        };

        let mut features = Vec::new();
        for mut member in members {
            let Some(geometry) = self.decode_member(&member)? else {
                continue;
            };
            features.push(Feature {
                properties: member.take_properties(),
                geometry,
            });
        }
        Ok(FeatureCollection { features })
    }

    fn decode_member(
        &self,
        object: &TopoObject,
    ) -> Result<Option<FeatureGeometry>, TopologyError> {
        let geometry = match object {
            TopoObject::LineString { arcs, .. } => {
                FeatureGeometry::LineString(self.decode_ring(arcs)?)
            }
            TopoObject::MultiLineString { arcs, .. } => FeatureGeometry::MultiLineString(
                arcs.iter()
                    .map(|line| self.decode_ring(line))
                    .collect::<Result<_, _>>()?,
            ),
            TopoObject::Polygon { arcs, .. } => FeatureGeometry::Polygon(
                arcs.iter()
                    .map(|ring| self.decode_ring(ring))
                    .collect::<Result<_, _>>()?,
            ),
            TopoObject::MultiPolygon { arcs, .. } => FeatureGeometry::MultiPolygon(
                arcs.iter()
                    .map(|rings| {
                        rings
                            .iter()
                            .map(|ring| self.decode_ring(ring))
                            .collect::<Result<_, _>>()
                    })
                    .collect::<Result<_, _>>()?,
            ),
            // Nested collections are not part of the format; kinds without
            // arc references cannot be decoded against the arc table.
            TopoObject::GeometryCollection { .. } | TopoObject::Unsupported => return Ok(None),
        };
        Ok(Some(geometry))
    }

    /// Decode one arc reference into absolute positions.
    fn decode_arc(&self, reference: i32) -> Result<Vec<GeoPoint>, TopologyError> {
        let reversed = reference < 0;
        let index = (if reversed { !reference } else { reference }) as usize;
        let arc = self
            .arcs
            .get(index)
            .ok_or(TopologyError::ArcOutOfRange {
                reference,
                arc_count: self.arcs.len(),
            })?;

        let mut x = 0.0;
        let mut y = 0.0;
        let mut points = Vec::with_capacity(arc.len());
        for [dx, dy] in arc {
            x += dx;
            y += dy;
            let point = match &self.transform {
                Some(t) => GeoPoint::new(
                    x * t.scale[0] + t.translate[0],
                    y * t.scale[1] + t.translate[1],
                ),
                None => GeoPoint::new(x, y),
            };
            points.push(point);
        }

        if reversed {
            points.reverse();
        }
        Ok(points)
    }

    /// Stitch arcs into one ring. Consecutive arcs share an endpoint, so
    /// every arc after the first contributes all but its first point.
    fn decode_ring(&self, references: &[i32]) -> Result<Vec<GeoPoint>, TopologyError> {
        let mut points: Vec<GeoPoint> = Vec::new();
        for &reference in references {
            let decoded = self.decode_arc(reference)?;
            if points.is_empty() {
                points.extend(decoded);
            } else {
                points.extend(decoded.into_iter().skip(1));
            }
        }
        Ok(points)
    }
}
