use serde::Deserialize;

use crate::math::Color;

use super::tonemap::TonemapSettings;

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    // pixel records go to stdout when this is absent
    pub output_file: Option<String>,
    #[serde(default)]
    pub tonemap: TonemapSettings,
    // written in order, one record each
    #[serde(default)]
    pub pixels: Vec<Color>,
}

impl TOMLConfig {
    /// A path given on the command line wins over the one in the file.
    pub fn override_output_file(&mut self, path: Option<String>) {
        if path.is_some() {
            self.output_file = path;
        }
    }
}
