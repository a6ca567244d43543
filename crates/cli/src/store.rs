//! Session file: the JSON snapshot that carries state between invocations.

use anyhow::{Context, Result};
use canvas_area::api::{MeasureSession, SessionSnapshot, TracingSink};
use canvas_area::MeasureCfg;
use std::fs;
use std::path::Path;

/// Load the session at `path`; a missing file is an empty session.
pub fn load(path: &Path, cfg: MeasureCfg) -> Result<MeasureSession> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no session file, starting empty");
        return Ok(MeasureSession::with_cfg(cfg));
    }
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let snap: SessionSnapshot = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing session {}", path.display()))?;
    Ok(MeasureSession::from_snapshot(&snap, cfg, TracingSink))
}

pub fn save(path: &Path, session: &MeasureSession) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating session dir {}", parent.display()))?;
        }
    }
    let doc = serde_json::to_vec_pretty(&session.snapshot())?;
    fs::write(path, doc).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
