/// Opacity endpoints for the renderer's depth-fade material: geometry
/// facing the camera draws at `max_opacity`, geometry on the far limb of
/// the globe at `min_opacity`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthFade {
    pub max_opacity: f32,
    pub min_opacity: f32,
}

impl DepthFade {
    pub const fn new(max_opacity: f32, min_opacity: f32) -> Self {
        Self {
            max_opacity,
            min_opacity,
        }
    }
}

pub const BORDER_FADE: DepthFade = DepthFade::new(0.85, 0.35);
pub const GRATICULE_FADE: DepthFade = DepthFade::new(0.1, 0.05);
pub const MARKER_FADE: DepthFade = DepthFade::new(0.5, 0.1);
pub const FLIGHT_ARC_FADE: DepthFade = DepthFade::new(0.3, 0.05);
