//! `MeasureSession` binding (kept separate so `lib.rs` stays tiny).

use crate::common::{parse_axis, rows_from_py};
use canvas_area::api::{CollectingSink, MeasureSession};
use canvas_area::MeasureCfg;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

/// Measurement session. Errors are collected instead of raised; read them
/// with `take_errors()`.
#[pyclass(name = "MeasureSession")]
pub struct PySession {
    inner: MeasureSession<CollectingSink>,
}

#[pymethods]
impl PySession {
    #[new]
    #[pyo3(signature = (report_uncommitted = true))]
    fn new(report_uncommitted: bool) -> Self {
        let cfg = MeasureCfg {
            report_uncommitted,
            ..MeasureCfg::default()
        };
        Self {
            inner: MeasureSession::with_sink(cfg, CollectingSink::default()),
        }
    }

    fn add_point(&mut self, x: f64, y: f64) {
        self.inner.add_point(x, y);
    }

    fn undo_last_point(&mut self) {
        self.inner.undo_last_point();
    }

    fn reset_points(&mut self) {
        self.inner.reset_points();
    }

    fn reset_all(&mut self) {
        self.inner.reset_all();
    }

    fn point_count(&self) -> usize {
        self.inner.point_count()
    }

    fn import_points(&mut self, points: &PyList) {
        self.inner.import_points(rows_from_py(points));
    }

    fn export_points(&self) -> Vec<(f64, f64)> {
        self.inner.export_points()
    }

    fn set_reference_segment(
        &mut self,
        axis: &str,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
        real_length: f64,
    ) -> PyResult<()> {
        let axis = parse_axis(axis)?;
        self.inner
            .set_reference_segment(axis, start_x, start_y, end_x, end_y, real_length);
        Ok(())
    }

    fn commit_reference_segment(&mut self, axis: &str) -> PyResult<()> {
        self.inner.commit_reference_segment(parse_axis(axis)?);
        Ok(())
    }

    fn set_actual_lengths(&mut self, horizontal: f64, vertical: f64) {
        self.inner.set_actual_lengths(horizontal, vertical);
    }

    fn scale_factors(&self) -> (f64, f64) {
        self.inner.scale_factors()
    }

    fn compute_calibrated_area(&mut self) -> f64 {
        self.inner.compute_calibrated_area()
    }

    fn compute_perimeter(&self) -> f64 {
        self.inner.compute_perimeter()
    }

    fn is_point_inside(&self, x: f64, y: f64) -> bool {
        self.inner.is_point_inside(x, y)
    }

    fn measure<'py>(&mut self, py: Python<'py>) -> PyResult<&'py PyDict> {
        let r = self.inner.measure();
        let d = PyDict::new(py);
        d.set_item("points", r.points)?;
        d.set_item("raw_area", r.raw_area)?;
        d.set_item("calibrated_area", r.calibrated_area)?;
        d.set_item("perimeter", r.perimeter)?;
        d.set_item("horizontal_scale", r.horizontal_scale)?;
        d.set_item("vertical_scale", r.vertical_scale)?;
        Ok(d)
    }

    /// Messages reported since the last call, oldest first.
    fn take_errors(&mut self) -> Vec<String> {
        self.inner
            .sink_mut()
            .drain()
            .into_iter()
            .map(|e| e.to_string())
            .collect()
    }
}

/// Euclidean distance between two points.
#[pyfunction]
pub fn distance_between(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    canvas_area::distance_between(x1, y1, x2, y2)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_function(wrap_pyfunction!(distance_between, m)?)?;
    Ok(())
}
