use super::palette::Theme;

/// Mount-time parameters for the hero scene.
///
/// Every animated quantity is a compile-time constant; only the colour theme
/// and the particle seed can be chosen by the host page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneParams {
    pub theme: Theme,
    /// Fixed seed for reproducible particle layouts; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl SceneParams {
    /// Build params from the canvas' `data-theme` / `data-seed` attributes.
    ///
    /// Invalid values are logged and replaced by the defaults.
    pub fn from_attributes(theme: Option<&str>, seed: Option<&str>) -> Self {
        let mut params = Self::default();
        if let Some(raw) = theme {
            match Theme::parse(raw) {
                Some(t) => params.theme = t,
                None => log::warn!("[config] unknown data-theme {:?}; using dark", raw),
            }
        }
        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(s) => params.seed = Some(s),
                Err(e) => log::warn!("[config] ignoring data-seed {:?}: {}", raw, e),
            }
        }
        params
    }
}
