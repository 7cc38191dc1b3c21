//! User interface module - terminal output for a lineage run.
//!
//! All user-facing lines go through `formatter`; diagnostics meant for
//! troubleshooting go through `tracing` instead.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_edges, display_error, display_run_summary, display_status,
    display_success,
};
