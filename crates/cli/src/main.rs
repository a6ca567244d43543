mod points_io;
mod report;
mod store;

use anyhow::Result;
use canvas_area::api::{Axis, MeasureSession};
use canvas_area::MeasureCfg;
use clap::{Parser, Subcommand};
use points_io::PointRows;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "canvas-area")]
#[command(about = "Trace a polygon, calibrate with two reference lines, measure its area")]
struct Cmd {
    /// Session file carrying points and reference lines between calls
    #[arg(long, global = true, default_value = "canvas-session.json")]
    session: PathBuf,

    /// Do not report areas requested before both lines are committed
    #[arg(long, global = true)]
    quiet_uncommitted: bool,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Append a traced point
    Add {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
    /// Remove the last traced point
    Undo,
    /// Clear traced points (and reference lines with --all)
    Reset {
        #[arg(long)]
        all: bool,
    },
    /// Replace points from a .json, .csv or .parquet file
    Import {
        input: PathBuf,
    },
    /// Print points as JSON [[x, y], ...]
    Export,
    /// Set (preview) a reference line
    SetRef {
        /// horizontal|vertical (also h|v, red|blue)
        axis: Axis,
        #[arg(allow_hyphen_values = true)]
        start_x: f64,
        #[arg(allow_hyphen_values = true)]
        start_y: f64,
        #[arg(allow_hyphen_values = true)]
        end_x: f64,
        #[arg(allow_hyphen_values = true)]
        end_y: f64,
        /// Real-world length of the line
        length: f64,
    },
    /// Commit the reference line last set for an axis
    CommitRef { axis: Axis },
    /// Overwrite the real-world lengths of both reference lines
    Lengths { horizontal: f64, vertical: f64 },
    /// Print the calibrated area (reorders the stored points)
    Area,
    /// Print the perimeter over the stored order
    Perimeter,
    /// Print the number of traced points
    Count,
    /// Print whether (x, y) is inside the traced polygon
    Inside {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
    /// Print the distance between two points
    Distance {
        #[arg(allow_hyphen_values = true)]
        x1: f64,
        #[arg(allow_hyphen_values = true)]
        y1: f64,
        #[arg(allow_hyphen_values = true)]
        x2: f64,
        #[arg(allow_hyphen_values = true)]
        y2: f64,
    },
    /// Measure everything; print JSON or write it (plus provenance) to --out
    Report {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Action {
    /// Commands that change the stored session.
    fn mutates(&self) -> bool {
        !matches!(
            self,
            Action::Export
                | Action::Perimeter
                | Action::Count
                | Action::Inside { .. }
                | Action::Distance { .. }
        )
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cfg = MeasureCfg {
        report_uncommitted: !cmd.quiet_uncommitted,
        ..MeasureCfg::default()
    };
    let mut session = store::load(&cmd.session, cfg)?;
    let mutates = cmd.action.mutates();
    run(&mut session, cmd.action, &cmd.session)?;
    if mutates {
        store::save(&cmd.session, &session)?;
    }
    Ok(())
}

fn run(session: &mut MeasureSession, action: Action, session_path: &Path) -> Result<()> {
    match action {
        Action::Add { x, y } => {
            session.add_point(x, y);
            tracing::info!(x, y, count = session.point_count(), "point added");
        }
        Action::Undo => session.undo_last_point(),
        Action::Reset { all } => {
            if all {
                session.reset_all();
            } else {
                session.reset_points();
            }
        }
        Action::Import { input } => {
            match points_io::read_points(&input)? {
                PointRows::Json(doc) => session.import_points_json(&doc),
                PointRows::Table(rows) => session.import_points(rows),
            }
            tracing::info!(
                input = %input.display(),
                count = session.point_count(),
                "points imported"
            );
        }
        Action::Export => {
            println!("{}", serde_json::to_string(&session.export_points_json())?);
        }
        Action::SetRef {
            axis,
            start_x,
            start_y,
            end_x,
            end_y,
            length,
        } => session.set_reference_segment(axis, start_x, start_y, end_x, end_y, length),
        Action::CommitRef { axis } => {
            session.commit_reference_segment(axis);
            let scale = match axis {
                Axis::Horizontal => session.scale_factors().0,
                Axis::Vertical => session.scale_factors().1,
            };
            tracing::info!(%axis, scale, "reference committed");
        }
        Action::Lengths {
            horizontal,
            vertical,
        } => session.set_actual_lengths(horizontal, vertical),
        Action::Area => println!("{}", session.compute_calibrated_area()),
        Action::Perimeter => println!("{}", session.compute_perimeter()),
        Action::Count => println!("{}", session.point_count()),
        Action::Inside { x, y } => println!("{}", session.is_point_inside(x, y)),
        Action::Distance { x1, y1, x2, y2 } => {
            println!("{}", canvas_area::distance_between(x1, y1, x2, y2))
        }
        Action::Report { out } => {
            let measured = session.measure();
            match out {
                Some(out) => {
                    let params = serde_json::json!({
                        "session": session_path.to_string_lossy(),
                    });
                    let sidecar = report::write_report(&out, &measured, params)?;
                    tracing::info!(
                        out = %out.display(),
                        sidecar = %sidecar.display(),
                        "report written"
                    );
                }
                None => println!("{}", serde_json::to_string_pretty(&measured)?),
            }
        }
    }
    Ok(())
}
