//! PyO3 bindings for the `canvas-area` measurement session.
//!
//! Notes
//! - Keep bindings thin: a `MeasureSession` class and the distance helper.
//!   Points cross the boundary as lists of `[x, y]` and tuples.
//! - Errors that the session swallows are collected; Python polls them with
//!   `MeasureSession.take_errors()` instead of receiving exceptions.

mod common;
mod session;

use pyo3::prelude::*;

#[pymodule]
fn canvas_area_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", canvas_area::VERSION)?;
    session::register(m)?;
    Ok(())
}
