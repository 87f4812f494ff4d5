use std::borrow::Cow;

use ndarray::ArrayView1;
use numpy::{PyArray1, PyReadonlyArray1, PyReadwriteArray1};
use pyo3::exceptions::{PyNotImplementedError, PyValueError};
use pyo3::prelude::*;

use crate::aic;
use crate::config::{PickerConfig, ProfileMethod};
use crate::error::PickerError;
use crate::rec;

/// Maps picker errors into Python exception classes.
fn picker_error_to_pyerr(err: PickerError) -> PyErr {
    match err {
        PickerError::NotImplemented(_) => PyNotImplementedError::new_err(err.to_string()),
        PickerError::InsufficientData { .. }
        | PickerError::BufferMismatch { .. }
        | PickerError::InvalidParameter(_) => PyValueError::new_err(err.to_string()),
    }
}

fn parse_config(method: &str, min_samples: usize) -> PyResult<PickerConfig> {
    let method: ProfileMethod = method.parse().map_err(picker_error_to_pyerr)?;
    Ok(PickerConfig::new(method).with_min_samples(min_samples))
}

/// Borrow contiguous samples, copy strided ones.
fn samples<'a>(view: ArrayView1<'a, f64>) -> Cow<'a, [f64]> {
    match view.to_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(view.to_vec()),
    }
}

/// AIC characteristic function and pick index.
///
/// Returns: (aic_profile[n-1], pick_index)
#[pyfunction]
#[pyo3(signature = (signal, method="incremental", min_samples=2))]
pub fn aic_pick<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<'py, f64>,
    method: &str,
    min_samples: usize,
) -> PyResult<(Bound<'py, PyArray1<f64>>, usize)> {
    let config = parse_config(method, min_samples)?;
    let data = samples(signal.as_array());

    let pick = py
        .detach(|| aic::compute_aic_profile(&data, &config))
        .map_err(picker_error_to_pyerr)?;
    let idx = pick.index();

    Ok((PyArray1::from_vec(py, pick.into_profile()), idx))
}

/// AIC into a caller-owned, C-contiguous buffer of length n-1.
///
/// Returns: pick_index
#[pyfunction]
#[pyo3(signature = (signal, out, method="incremental", min_samples=2))]
pub fn aic_pick_into<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<'py, f64>,
    out: PyReadwriteArray1<'py, f64>,
    method: &str,
    min_samples: usize,
) -> PyResult<usize> {
    let config = parse_config(method, min_samples)?;
    let data = samples(signal.as_array());
    let mut out = out;
    let profile = out
        .as_slice_mut()
        .map_err(|_| PyValueError::new_err("profile buffer must be C-contiguous"))?;

    py.detach(|| aic::compute_aic_profile_into(&data, profile, &config))
        .map_err(picker_error_to_pyerr)
}

/// Reciprocal-based (REC) characteristic function and pick index.
///
/// Returns: (rec_profile[n-1], pick_index)
#[pyfunction]
#[pyo3(signature = (signal, method="incremental", min_samples=2))]
pub fn rec_pick<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<'py, f64>,
    method: &str,
    min_samples: usize,
) -> PyResult<(Bound<'py, PyArray1<f64>>, usize)> {
    let config = parse_config(method, min_samples)?;
    let data = samples(signal.as_array());

    let pick = py
        .detach(|| rec::compute_rec_profile(&data, &config))
        .map_err(picker_error_to_pyerr)?;
    let idx = pick.index();

    Ok((PyArray1::from_vec(py, pick.into_profile()), idx))
}

/// Recursive AIC refinement. Always raises NotImplementedError.
#[pyfunction]
pub fn recursive_aic_pick(signal: PyReadonlyArray1<'_, f64>) -> PyResult<(Vec<f64>, usize)> {
    let data = samples(signal.as_array());
    let pick = aic::recursive_aic_pick(&data, &PickerConfig::default())
        .map_err(picker_error_to_pyerr)?;
    let idx = pick.index();
    Ok((pick.into_profile(), idx))
}
