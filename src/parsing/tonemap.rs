use serde::Deserialize;

use crate::tonemap::{Clamp, Tonemapper, Truncate};

use tracing::warn;

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TonemapSettings {
    // floor(255.999 * c), out of range colors produce out of range channels
    #[default]
    Truncate,
    // as Truncate, then clamped to [0, 255]
    Clamp,
}

pub fn parse_tonemapper(settings: TonemapSettings) -> Box<dyn Tonemapper> {
    match settings {
        TonemapSettings::Truncate => Box::new(Truncate),
        TonemapSettings::Clamp => {
            warn!("clamping channels to [0, 255], out of range colors will not round trip");
            Box::new(Clamp::new())
        }
    }
}
