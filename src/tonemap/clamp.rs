use crate::math::Color;

use super::{Tonemapper, Truncate, MAX_CHANNEL_VALUE};

/// Like `Truncate`, but channel values are clamped into [0, 255].
#[derive(Clone, Debug, Default)]
pub struct Clamp {
    inner: Truncate,
}

impl Clamp {
    pub fn new() -> Self {
        Self { inner: Truncate }
    }
}

impl Tonemapper for Clamp {
    fn map(&self, color: Color) -> [i32; 3] {
        self.inner
            .map(color)
            .map(|channel| channel.clamp(0, MAX_CHANNEL_VALUE))
    }
}
