//! Student-to-course matching.
//!
//! A single greedy pass per period: requests are taken in store order and
//! each gets the first of its choices whose lecturer and room can still take
//! it. Not optimal and not stable in the Gale–Shapley sense, but deterministic
//! and cheap.
//!
//! # Summary
//!
//! `MatchSummary` reports satisfaction rate, preference-rank counts, and
//! unassigned requests for a result or a single period.

mod eligibility;
mod greedy;
mod outcome;
mod summary;

pub use eligibility::{Eligibility, Ineligibility, LoadLedger, Offer};
pub use greedy::{GreedyMatcher, LoadPolicy, MatchConfig};
pub use outcome::{CapacityOverflow, MatchResult, PeriodMatch, Placement, StudentAssignment};
pub use summary::MatchSummary;
