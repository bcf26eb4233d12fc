//! Packcheck Validator - Validate game content packs before packaging.
//!
//! A [`Validator`] discovers pack directories under a root, runs the
//! manifest, icon and sound checks against each one in sorted order, and
//! returns a [`RunReport`] that can be rendered as text or JSON.

pub mod config;
pub mod discovery;
pub mod icon;
pub mod pack;
pub mod report;
pub mod runner;
pub mod sounds;

pub use config::{load_config, ValidatorConfig};
pub use icon::{default_probe, IconProbe, ProbeError, UnavailableProbe};
pub use pack::PackReport;
pub use report::{render_pack, render_run, ReportFormat};
pub use runner::{RunReport, Validator};
