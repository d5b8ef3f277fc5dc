//! Planner tunables and scoring constants.

/// File suffixes treated as headers (compared lowercase, without the dot).
pub const HEADER_SUFFIXES: [&str; 6] = ["h", "hh", "hpp", "hxx", "inc", "ipp"];

/// Every header starts with this much risk.
pub const BASE_RISK: u32 = 10;
/// Risk added per `#define`, capped at [`MAX_MACRO_PENALTY`].
pub const MACRO_PENALTY_PER_DEFINE: u32 = 5;
pub const MAX_MACRO_PENALTY: u32 = 55;
pub const CYCLE_PENALTY: u32 = 30;
pub const DOT_H_PENALTY: u32 = 10;
pub const LOW_REUSE_PENALTY: u32 = 8;
pub const HIGH_REUSE_BONUS: u32 = 6;
/// Include frequency at or above which reuse lowers risk.
pub const HIGH_REUSE_FREQUENCY: usize = 4;
pub const MAX_RISK: u32 = 100;

/// A header with at least this many defines is macro-heavy.
pub const MACRO_HEAVY_THRESHOLD: usize = 8;

/// Upper bound (inclusive) of the low risk band.
pub const LOW_RISK_MAX: u32 = 30;
/// Upper bound (inclusive) of the medium risk band.
pub const MEDIUM_RISK_MAX: u32 = 65;

/// Weight of include frequency in candidate ranking.
pub const FREQUENCY_WEIGHT: i64 = 12;

/// Maximum entries listed per phase.
pub const PHASE_ACTION_LIMIT: usize = 5;
/// Minimum include frequency for a phase pilot.
pub const PILOT_MIN_FREQUENCY: usize = 2;

/// Unresolved includes listed in the text rendering.
pub const TEXT_UNRESOLVED_SHOWN: usize = 10;
/// Rationale lines listed per candidate in the text rendering.
pub const TEXT_RATIONALE_SHOWN: usize = 3;

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum number of candidates to report.
    pub top: usize,
    /// Maximum number of unresolved includes kept in the report.
    pub max_unresolved: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            top: 10,
            max_unresolved: 50,
        }
    }
}

impl PlannerConfig {
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}
