//! Error taxonomy and the reporting hook used by `MeasureSession`.
//!
//! Session operations never fail: they return the defined degenerate value
//! (0 or `false`) and hand the reason to an `ErrorSink`. Hosts that want
//! typed errors call the `try_*` variants instead.

use std::fmt;

use crate::calib::Axis;

/// Why a measurement produced its degenerate value.
#[derive(Clone, Debug, PartialEq)]
pub enum MeasureError {
    /// Fewer traced points than a polygon needs. Never sent to the sink.
    DegenerateInput { points: usize, required: usize },
    /// Area requested before the listed reference segments were committed.
    UncommittedCalibration { missing: Vec<Axis> },
    /// An imported entry was not an `(x, y)` pair and was skipped.
    MalformedImport { index: usize, reason: String },
    /// Arithmetic produced a non-finite value (NaN/inf coordinates, overflow).
    ComputationFault { reason: String },
}

/// How loudly a reported error should surface in the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Silent,
    Info,
    Fault,
}

impl MeasureError {
    pub(crate) fn fault(reason: impl Into<String>) -> Self {
        Self::ComputationFault {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedImport {
            index,
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::DegenerateInput { .. } => Severity::Silent,
            Self::UncommittedCalibration { .. } | Self::MalformedImport { .. } => Severity::Info,
            Self::ComputationFault { .. } => Severity::Fault,
        }
    }
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateInput { points, required } => write!(
                f,
                "polygon needs at least {required} points, have {points}"
            ),
            Self::UncommittedCalibration { missing } => {
                let names: Vec<&str> = missing.iter().map(|a| a.name()).collect();
                write!(
                    f,
                    "reference segment not committed: {}",
                    names.join(", ")
                )
            }
            Self::MalformedImport { index, reason } => {
                write!(f, "skipped imported entry {index}: {reason}")
            }
            Self::ComputationFault { reason } => write!(f, "error computing area: {reason}"),
        }
    }
}

impl std::error::Error for MeasureError {}

/// Receiver for errors that a session swallows into degenerate results.
pub trait ErrorSink {
    fn report(&mut self, err: &MeasureError);
}

impl<F: FnMut(&MeasureError)> ErrorSink for F {
    fn report(&mut self, err: &MeasureError) {
        self(err)
    }
}

/// Default sink: forwards each report as a structured `tracing` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&mut self, err: &MeasureError) {
        match err.severity() {
            Severity::Fault => tracing::warn!(error = %err, "measurement fault"),
            Severity::Info => tracing::info!(error = %err, "measurement notice"),
            Severity::Silent => tracing::debug!(error = %err, "degenerate input"),
        }
    }
}

/// Keeps every report in memory, for hosts that poll and for tests.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    errors: Vec<MeasureError>,
}

impl CollectingSink {
    pub fn errors(&self) -> &[MeasureError] {
        &self.errors
    }

    /// Remove and return everything collected so far.
    pub fn drain(&mut self) -> Vec<MeasureError> {
        std::mem::take(&mut self.errors)
    }
}

impl ErrorSink for CollectingSink {
    fn report(&mut self, err: &MeasureError) {
        self.errors.push(err.clone());
    }
}
