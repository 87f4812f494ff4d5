use std::fmt;
use std::str::FromStr;

use crate::error::PickerError;

/// Smallest signal for which a split exists.
pub const MIN_SIGNAL_LEN: usize = 2;

/// How the per-split segment statistics are obtained.
///
/// DIRECT (O(n^2)): recompute mean and deviation sum of both segments at every split
/// PARALLEL (O(n^2)): same recomputation, split indices spread over the rayon pool
/// INCREMENTAL (O(n)): running Welford statistics, one backward and one forward pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileMethod {
    Direct,
    Parallel,
    #[default]
    Incremental,
}

impl ProfileMethod {
    pub fn name(&self) -> &'static str {
        match self {
            ProfileMethod::Direct => "direct",
            ProfileMethod::Parallel => "parallel",
            ProfileMethod::Incremental => "incremental",
        }
    }
}

impl fmt::Display for ProfileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileMethod {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(ProfileMethod::Direct),
            "parallel" => Ok(ProfileMethod::Parallel),
            "incremental" => Ok(ProfileMethod::Incremental),
            other => Err(PickerError::InvalidParameter(format!(
                "unknown profile method '{other}', expected one of direct, parallel, incremental"
            ))),
        }
    }
}

/// Options shared by the AIC and REC pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Statistics engine used to fill the profile.
    pub method: ProfileMethod,
    /// Shortest signal accepted. Values below `MIN_SIGNAL_LEN` are raised to it.
    pub min_samples: usize,
}

impl PickerConfig {
    pub fn new(method: ProfileMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: ProfileMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Minimum signal length actually enforced.
    pub fn required_len(&self) -> usize {
        self.min_samples.max(MIN_SIGNAL_LEN)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            method: ProfileMethod::default(),
            min_samples: MIN_SIGNAL_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_incremental_with_minimal_length() {
        let config = PickerConfig::default();
        assert_eq!(config.method, ProfileMethod::Incremental);
        assert_eq!(config.min_samples, MIN_SIGNAL_LEN);
        assert_eq!(config.required_len(), 2);
    }

    #[test]
    fn required_len_never_drops_below_two() {
        let config = PickerConfig::new(ProfileMethod::Direct).with_min_samples(0);
        assert_eq!(config.required_len(), 2);

        let config = config.with_min_samples(50);
        assert_eq!(config.required_len(), 50);
    }

    #[test]
    fn builders_override_only_their_field() {
        let config = PickerConfig::default()
            .with_min_samples(32)
            .with_method(ProfileMethod::Parallel);
        assert_eq!(config.method, ProfileMethod::Parallel);
        assert_eq!(config.min_samples, 32);

        let config = config.with_method(ProfileMethod::Direct);
        assert_eq!(config, PickerConfig::new(ProfileMethod::Direct).with_min_samples(32));
    }

    #[test]
    fn methods_parse_case_insensitively() {
        assert_eq!("direct".parse::<ProfileMethod>(), Ok(ProfileMethod::Direct));
        assert_eq!(" Parallel ".parse::<ProfileMethod>(), Ok(ProfileMethod::Parallel));
        assert_eq!("INCREMENTAL".parse::<ProfileMethod>(), Ok(ProfileMethod::Incremental));
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = "welford".parse::<ProfileMethod>().unwrap_err();
        assert_eq!(err.status(), 4);
        assert!(err.to_string().contains("welford"));
    }

    #[test]
    fn display_matches_parse() {
        for method in [
            ProfileMethod::Direct,
            ProfileMethod::Parallel,
            ProfileMethod::Incremental,
        ] {
            assert_eq!(method.to_string().parse::<ProfileMethod>(), Ok(method));
        }
    }
}
