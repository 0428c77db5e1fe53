//! One-time assembly of every globe layer plus the per-frame advance.
//!
//! Borders are the only layer with a failable input (a topology document
//! fetched from somewhere); everything else builds from static data. A
//! border decode failure therefore never blocks the rest of the scene —
//! callers build first and attach borders separately.

use flight::impulse::ImpulseField;
use flight::routes::{City, Route, flight_routes};
use formats::topology::{Topology, TopologyError};
use foundation::time::Frame;
use layers::arcs::{FlightArcsLayer, FlightArcsSnapshot};
use layers::borders::{BordersLayer, BordersSnapshot};
use layers::graticule::{GraticuleLayer, GraticuleSnapshot};
use layers::markers::{MarkersLayer, MarkersSnapshot};
use rand::Rng;

mod ids {
    pub const GRATICULE: u64 = 1;
    pub const MARKERS: u64 = 2;
    pub const FLIGHT_ARCS: u64 = 3;
    pub const BORDERS: u64 = 4;
}

pub struct GlobeScene<R: Rng> {
    pub graticule: GraticuleSnapshot,
    /// Present only after a successful [`GlobeScene::load_borders`].
    pub borders: Option<BordersSnapshot>,
    pub markers: MarkersSnapshot,
    pub flight_arcs: FlightArcsSnapshot,
    pub routes: Vec<Route>,
    pub impulses: ImpulseField<R>,
    frame: Frame,
}

impl<R: Rng> GlobeScene<R> {
    /// Build every layer that does not depend on external data.
    pub fn build(cities: &[City], rng: R) -> Self {
        let routes = flight_routes(cities);
        Self {
            graticule: GraticuleLayer::new(ids::GRATICULE).build(),
            borders: None,
            markers: MarkersLayer::new(ids::MARKERS).build(cities),
            flight_arcs: FlightArcsLayer::new(ids::FLIGHT_ARCS).build(&routes),
            impulses: ImpulseField::new(&routes, rng),
            routes,
            frame: Frame::first(),
        }
    }

    /// Decode a topology document and attach the borders layer.
    ///
    /// On error the scene is left exactly as it was: the borders subsystem
    /// fails independently and the caller decides whether to retry, log,
    /// or run without borders.
    pub fn load_borders(&mut self, topology_json: &str) -> Result<(), TopologyError> {
        let topology = Topology::from_json_str(topology_json)?;
        let collection = topology.decode()?;
        self.borders = Some(BordersLayer::new(ids::BORDERS).build(&collection));
        Ok(())
    }

    /// Step the animated parts of the scene by one frame's delta (seconds).
    pub fn advance(&mut self, dt_s: f64) -> Frame {
        self.impulses.update(dt_s);
        self.frame = self.frame.next(dt_s);
        self.frame
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }
}
