use crate::consts::arena::DEFAULT_TICK_RATE;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArenaConfig {
    /// Fixed steps per second, between 15 and 120
    pub tick_rate: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ArenaConfig {
    pub const DEFAULT: Self = Self {
        tick_rate: DEFAULT_TICK_RATE,
    };

    #[must_use]
    pub const fn with_tick_rate(mut self, tick_rate: f32) -> Self {
        self.tick_rate = tick_rate;
        self
    }
}
