use flight::arc::sample_arc;
use flight::routes::Route;
use foundation::math::Vec3;

use crate::layer::{Layer, LayerId};
use crate::symbology::{DepthFade, FLIGHT_ARC_FADE};

/// Segments of the rendered arc line. Coarser than the impulse path; a
/// static line does not need the density a moving head does.
pub const ARC_SEGMENTS: usize = 48;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FlightArcsLayer {
    id: LayerId,
}

/// One elevated polyline per route.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlightArcsSnapshot {
    pub lines: Vec<Vec<Vec3>>,
}

impl FlightArcsLayer {
    pub fn new(id: u64) -> Self {
        Self { id: LayerId(id) }
    }

    pub fn build(&self, routes: &[Route]) -> FlightArcsSnapshot {
        FlightArcsSnapshot {
            lines: routes
                .iter()
                .map(|route| {
                    let (a, b) = route.endpoints();
                    sample_arc(a, b, ARC_SEGMENTS)
                })
                .collect(),
        }
    }
}

impl Layer for FlightArcsLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn fade(&self) -> DepthFade {
        FLIGHT_ARC_FADE
    }
}
