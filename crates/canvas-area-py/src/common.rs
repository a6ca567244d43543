use canvas_area::api::Axis;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyList;

pub fn parse_axis(axis: &str) -> PyResult<Axis> {
    axis.parse::<Axis>().map_err(PyValueError::new_err)
}

/// Point rows from a Python list. Items that are not numeric sequences
/// become empty rows so the session reports them as malformed.
pub fn rows_from_py(points: &PyList) -> Vec<Vec<f64>> {
    points
        .iter()
        .map(|item| item.extract::<Vec<f64>>().unwrap_or_default())
        .collect()
}
