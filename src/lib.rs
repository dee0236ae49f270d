//! Iterated two-player slot duels.
//!
//! Each round builds a payoff matrix from both players' slot cost ledgers,
//! enumerates the Nash equilibria of that one-shot game by support
//! enumeration, selects one under a pluggable policy, redistributes slot
//! costs from the chosen outcome, and appends cumulative payoffs to an
//! append-only history. The mutated ledgers seed the next round, so the
//! simulation is a discrete-time dynamical system with feedback.

pub mod error;
pub mod gameplay;
pub mod nash;
pub mod sim;
pub mod slots;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Per-round and cumulative payoffs.
pub type Utility = f32;
/// Per-slot placement costs.
pub type Cost = f32;
/// Mixed strategy weights and indifference-system scalars.
pub type Probability = f64;

// ============================================================================
// SUPPORT ENUMERATION
// ============================================================================
/// Weights above this are in-support; at or below, out.
pub const SUPPORT_TOLERANCE: Probability = 1e-16;

// ============================================================================
// COST REDISTRIBUTION
// Contested slots shift cost toward the disadvantaged side; chosen but
// uncontested slots decay. Every write floors at zero.
// ============================================================================
/// Per-round transfer at a contested slot.
pub const CONTEST_SHIFT: Cost = 1.0;
/// Per-round decay on a chosen but uncontested slot.
pub const UNCONTESTED_DECAY: Cost = 1.0;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging to terminal and a timestamped file.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
