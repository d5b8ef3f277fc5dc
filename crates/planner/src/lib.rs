//! modpath-planner: reads a `compile_commands.json`, walks the project include
//! graph and produces a phased C++20 modules migration plan.

pub mod analyze;
pub mod compile_db;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod paths;
pub mod phases;
pub mod report;
pub mod risk;
pub mod scan;

pub use analyze::analyze_compile_commands;
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use format::format_report;
pub use report::PlannerReport;
