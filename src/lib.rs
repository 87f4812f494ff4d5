pub mod aic;
pub mod config;
pub mod error;
pub mod pick;
mod profile;
#[cfg(feature = "python")]
mod python;
pub mod rec;

pub use aic::{aic_score, compute_aic_profile, compute_aic_profile_into, recursive_aic_pick};
pub use config::{PickerConfig, ProfileMethod, MIN_SIGNAL_LEN};
pub use error::{status_of, PickerError, Result, STATUS_OK};
pub use pick::Pick;
pub use profile::{first_minimum, sanitize};
pub use rec::{compute_rec_profile, compute_rec_profile_into, rec_score};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Rust-accelerated onset pickers for waveform segments.
/// AIC (Maeda) and reciprocal-variance characteristic functions with PyO3 bindings.
#[cfg(feature = "python")]
#[pymodule]
fn aic_picker(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::aic_pick, m)?)?;
    m.add_function(wrap_pyfunction!(python::aic_pick_into, m)?)?;
    m.add_function(wrap_pyfunction!(python::rec_pick, m)?)?;
    m.add_function(wrap_pyfunction!(python::recursive_aic_pick, m)?)?;
    Ok(())
}
