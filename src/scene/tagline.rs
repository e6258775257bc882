use super::constants::TAGLINE_PERIOD_SEC;

pub const TAGLINES: [&str; 4] = [
    "Cloud Architecture • Infrastructure as Code",
    "CI/CD • Container Orchestration • Kubernetes",
    "DevOps Automation • Cloud Security",
    "AWS • Azure • GCP • Infrastructure Excellence",
];

/// Index of the tagline shown at elapsed time `t`.
#[inline]
pub fn tagline_index(t: f32) -> usize {
    if !t.is_finite() || t <= 0.0 {
        return 0;
    }
    (t / TAGLINE_PERIOD_SEC) as usize % TAGLINES.len()
}

/// Cycles the hero tagline and reports only actual changes.
#[derive(Debug, Default)]
pub struct TaglineRotator {
    current: Option<usize>,
}

impl TaglineRotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text to display when the tagline changes at `t`.
    pub fn advance(&mut self, t: f32) -> Option<&'static str> {
        let idx = tagline_index(t);
        if self.current == Some(idx) {
            return None;
        }
        self.current = Some(idx);
        Some(TAGLINES[idx])
    }

    pub fn current(&self) -> Option<&'static str> {
        self.current.map(|i| TAGLINES[i])
    }
}
