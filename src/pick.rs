/// Characteristic function of a signal together with its first minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    profile: Vec<f64>,
    index: usize,
}

impl Pick {
    pub(crate) fn new(profile: Vec<f64>, index: usize) -> Self {
        Self { profile, index }
    }

    /// Index of the first minimum; the last sample of the leading segment.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn profile(&self) -> &[f64] {
        &self.profile
    }

    pub fn into_profile(self) -> Vec<f64> {
        self.profile
    }

    pub fn len(&self) -> usize {
        self.profile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profile.is_empty()
    }

    /// Profile value at the pick index.
    pub fn min_value(&self) -> f64 {
        self.profile[self.index]
    }

    /// Whether any split scored below +inf.
    pub fn has_onset(&self) -> bool {
        self.min_value().is_finite()
    }

    /// Time of the onset relative to the segment start, in the unit of
    /// `sample_interval`. `None` when no onset was found.
    pub fn onset_offset(&self, sample_interval: f64) -> Option<f64> {
        if self.has_onset() {
            Some(self.index as f64 * sample_interval)
        } else {
            None
        }
    }

    /// Copy of the profile with both ends replaced by their neighbours.
    ///
    /// The outermost AIC splits are always +inf, which breaks plot scaling.
    pub fn display_profile(&self) -> Vec<f64> {
        let mut out = self.profile.clone();
        let n = out.len();
        if n >= 2 {
            out[0] = out[1];
            out[n - 1] = out[n - 2];
        }
        out
    }
}
