use serde::Deserialize;

use crate::tonemap::{Clamp, Passthrough, Tonemapper};

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum TonemapSettings {
    // multiply by 10^exposure, then clamp every channel to 0 to 1 (exposure defaults to 0, not changing anything)
    Clamp {
        exposure: Option<f64>,
        #[serde(default)]
        silenced: bool,
    },
    // write colors exactly as given, out of range channels included
    Passthrough,
}

impl Default for TonemapSettings {
    fn default() -> Self {
        TonemapSettings::Clamp {
            exposure: None,
            silenced: false,
        }
    }
}

pub fn parse_tonemapper(settings: TonemapSettings) -> Box<dyn Tonemapper> {
    match settings {
        TonemapSettings::Clamp { exposure, silenced } => {
            Box::new(Clamp::new(exposure.unwrap_or(0.0), silenced))
        }
        TonemapSettings::Passthrough => Box::new(Passthrough),
    }
}
