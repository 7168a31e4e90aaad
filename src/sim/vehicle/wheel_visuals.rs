use ahash::AHashMap;

use crate::physics::{WheelHandle, WheelPose};

/// Cosmetic wheel meshes that follow the physics wheels
///
/// Data only flows out of the physics model; nothing written here is read back.
pub trait WheelVisuals {
    /// The mesh pose for `wheel`, or `None` if the wheel has no mesh
    fn visual_mut(&mut self, wheel: WheelHandle) -> Option<&mut WheelPose>;
}

impl WheelVisuals for AHashMap<WheelHandle, WheelPose> {
    fn visual_mut(&mut self, wheel: WheelHandle) -> Option<&mut WheelPose> {
        self.get_mut(&wheel)
    }
}
