//! # 75 Zen Core Library
//!
//! Core business logic for the 75 Zen daily discipline tracker. The CLI
//! binary is a thin terminal layer over this library.
//!
//! ## Architecture
//!
//! - **Day store**: one JSON file per calendar date plus a derived
//!   Markdown mirror, under `~/.75zen` (or `ZEN75_DIR`)
//! - **Streak tracker**: day-over-day consecutive-completion counter
//!   persisted in `streak.json`
//! - **Enforcement gates**: decision logic for the gated evening entry
//!   (state coherence, causality chain, backward debug)
//!
//! ## Key Components
//!
//! - [`DayStore`]: per-day record persistence
//! - [`StreakTracker`]: streak state and daily update rule
//! - [`gates`]: gate thresholds and answer validation

pub mod checklist;
pub mod error;
pub mod gates;
pub mod store;
pub mod streak;

pub use error::{CoreError, Result, ValidationError};
pub use gates::{CausalityChain, DebugTrace, GateOutcome, Insight};
pub use store::{data_dir, DayRecord, DayStore};
pub use streak::{StreakRecord, StreakTracker};
