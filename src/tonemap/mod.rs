use crate::math::Color;

mod clamp;

pub use clamp::Clamp;

// same scale factor as the reference image, keeps 1.0 from rounding up to 256
pub const CHANNEL_SCALE: f64 = 255.999;
pub const MAX_CHANNEL_VALUE: i32 = 255;

pub trait Tonemapper: Send + Sync {
    // maps a normalized color to integer channels for a maxval 255 image
    fn map(&self, color: Color) -> [i32; 3];
}

/// `floor(255.999 * c)` per channel with no clamping. Components outside [0, 1] produce
/// channel values outside [0, 255].
#[derive(Copy, Clone, Debug, Default)]
pub struct Truncate;

pub fn scale_channel(value: f32) -> i32 {
    (CHANNEL_SCALE * value as f64) as i32
}

impl Tonemapper for Truncate {
    fn map(&self, color: Color) -> [i32; 3] {
        [
            scale_channel(color.x),
            scale_channel(color.y),
            scale_channel(color.z),
        ]
    }
}
