use crate::symbology::DepthFade;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// A static globe layer: builds its snapshot once and carries the styling
/// the renderer applies to it.
pub trait Layer {
    fn id(&self) -> LayerId;
    fn fade(&self) -> DepthFade;
}
