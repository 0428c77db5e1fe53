use foundation::math::Vec3;
use rand::Rng;

use crate::arc::sample_arc;
use crate::routes::Route;

/// Trail buffer slots per impulse.
pub const TRAIL_LEN: usize = 18;
/// Sample density of the path an impulse travels along. Deliberately much
/// denser than the rendered arc line so the head moves smoothly.
pub const PATH_SEGMENTS: usize = 200;

const SPEED_MIN: f64 = 80.0;
const SPEED_MAX: f64 = 240.0;
const INITIAL_COOLDOWN_MAX: f64 = 4.0;
const COOLDOWN_MIN: f64 = 0.5;
const COOLDOWN_MAX: f64 = 7.5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }

    pub fn signum(self) -> f64 {
        self.step() as f64
    }
}

/// Lifecycle phase of an impulse.
///
/// Dormant impulses only count down; active impulses carry their continuous
/// head index, travel direction and speed. There is no way to hold a head
/// position without a speed, or a cooldown alongside either.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Phase {
    Dormant { cooldown: f64 },
    Active { head: f64, direction: Direction, speed: f64 },
}

/// One slot of the fading tail behind an impulse head. Positions are always
/// valid path points, even for invisible slots, so a render buffer filled
/// from the trail never reads garbage.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrailPoint {
    pub position: Vec3,
    pub alpha: f32,
}

/// A traveling light pulse bound to one route's sampled path.
#[derive(Debug, Clone)]
pub struct Impulse {
    path: Vec<Vec3>,
    phase: Phase,
    trail: [TrailPoint; TRAIL_LEN],
}

impl Impulse {
    fn new(path: Vec<Vec3>, cooldown: f64) -> Self {
        let rest = TrailPoint {
            position: path[0],
            alpha: 0.0,
        };
        Self {
            path,
            phase: Phase::Dormant { cooldown },
            trail: [rest; TRAIL_LEN],
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    /// The dense polyline the impulse travels along.
    pub fn path(&self) -> &[Vec3] {
        &self.path
    }

    /// The (position, alpha) pairs written by the most recent tick.
    pub fn trail(&self) -> &[TrailPoint] {
        &self.trail
    }

    fn max_index(&self) -> usize {
        self.path.len() - 1
    }

    fn tick(&mut self, dt_s: f64, rng: &mut impl Rng) {
        let max_index = self.max_index() as f64;

        self.phase = match self.phase {
            Phase::Dormant { cooldown } => {
                let cooldown = cooldown - dt_s;
                if cooldown <= 0.0 {
                    // Launch from whichever end matches the drawn direction.
                    // The head does not advance on the activation tick.
                    let direction = if rng.random_bool(0.5) {
                        Direction::Forward
                    } else {
                        Direction::Reverse
                    };
                    let head = match direction {
                        Direction::Forward => 0.0,
                        Direction::Reverse => max_index,
                    };
                    Phase::Active {
                        head,
                        direction,
                        speed: rng.random_range(SPEED_MIN..SPEED_MAX),
                    }
                } else {
                    Phase::Dormant { cooldown }
                }
            }
            Phase::Active { head, direction, speed } => {
                let head = head + direction.signum() * speed * dt_s;
                // The run extends TRAIL_LEN past either end so the tail can
                // fade out completely before the impulse goes dormant.
                if head > max_index + TRAIL_LEN as f64 || head < -(TRAIL_LEN as f64) {
                    Phase::Dormant {
                        cooldown: rng.random_range(COOLDOWN_MIN..COOLDOWN_MAX),
                    }
                } else {
                    Phase::Active { head, direction, speed }
                }
            }
        };

        self.project_trail();
    }

    /// Rewrite the whole trail buffer from the current phase.
    fn project_trail(&mut self) {
        let max_index = self.max_index() as isize;
        match self.phase {
            Phase::Active { head, direction, .. } => {
                let head_index = head.floor() as isize;
                for (i, slot) in self.trail.iter_mut().enumerate() {
                    let index = head_index - i as isize * direction.step();
                    let clamped = index.clamp(0, max_index) as usize;
                    // Visibility uses the unclamped index: slots trailing
                    // off either end of the path stay dark while the sample
                    // position stays valid.
                    let on_arc = index >= 0 && index <= max_index;
                    let fade = 1.0 - i as f64 / TRAIL_LEN as f64;
                    slot.position = self.path[clamped];
                    slot.alpha = if on_arc { (fade * fade) as f32 } else { 0.0 };
                }
            }
            Phase::Dormant { .. } => {
                let rest = TrailPoint {
                    position: self.path[0],
                    alpha: 0.0,
                };
                self.trail = [rest; TRAIL_LEN];
            }
        }
    }
}

/// All impulses of a scene plus the random source that schedules them.
///
/// Impulses never interact; each tick touches only its own trail buffer.
/// The RNG is injected so a seeded run replays the exact same launch
/// schedule, directions and speeds.
pub struct ImpulseField<R: Rng> {
    impulses: Vec<Impulse>,
    rng: R,
}

impl<R: Rng> ImpulseField<R> {
    pub fn new(routes: &[Route], mut rng: R) -> Self {
        let impulses = routes
            .iter()
            .map(|route| {
                let (a, b) = route.endpoints();
                Impulse::new(
                    sample_arc(a, b, PATH_SEGMENTS),
                    rng.random_range(0.0..INITIAL_COOLDOWN_MAX),
                )
            })
            .collect();
        Self { impulses, rng }
    }

    /// Advance every impulse by one frame's delta (seconds).
    pub fn update(&mut self, dt_s: f64) {
        for impulse in &mut self.impulses {
            impulse.tick(dt_s, &mut self.rng);
        }
    }

    pub fn impulses(&self) -> &[Impulse] {
        &self.impulses
    }

    pub fn len(&self) -> usize {
        self.impulses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.impulses.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.impulses.iter().filter(|i| i.is_active()).count()
    }
}
