use carsoccer::VehicleControls;

pub struct ControlsBuilder {
    controls: VehicleControls,
}

impl ControlsBuilder {
    pub const fn new() -> Self {
        Self {
            controls: VehicleControls::DEFAULT,
        }
    }

    pub const fn with_vertical(mut self, val: f32) -> Self {
        self.controls.vertical = val;
        self
    }
    pub const fn with_horizontal(mut self, val: f32) -> Self {
        self.controls.horizontal = val;
        self
    }

    pub const fn with_jump(mut self, val: bool) -> Self {
        self.controls.jump = val;
        self
    }
    pub const fn with_boost(mut self, val: bool) -> Self {
        self.controls.boost = val;
        self
    }

    pub const fn build(&self) -> VehicleControls {
        self.controls
    }
}
