//! Interactive selection of Texas Hold'em starting hand ranges.
//!
//! The 169 strategically distinct starting hands are laid out on a 13x13
//! grid: pairs on the diagonal, suited hands above it, offsuit hands below.
//! A [`gesture::Controller`] turns normalized pointer gestures into range
//! mutations and reports every visual change through a
//! [`present::Presenter`], so rendering stays outside of this crate.
//!
//! ## Modules
//!
//! - [`cards`]: Ranks, suits, and concrete cards
//! - [`grid`]: Grid positions, hand categories, and the grid index
//! - [`range`]: The selected range and its combo summary
//! - [`present`]: The presentation seam
//! - [`gesture`]: Mode arbitration and the gesture state machine
//! - [`input`]: Translation of raw device events into gestures
//! - [`dto`]: Serializable views handed to JavaScript
pub mod cards;
pub mod dto;
pub mod gesture;
pub mod grid;
pub mod input;
pub mod present;
pub mod range;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Number of concrete two-card combinations.
pub type Combos = u16;
/// Share of all starting combinations, in percent.
pub type Percent = f32;
/// Screen-space coordinate in CSS pixels.
pub type Pixels = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GRID PARAMETERS
// ============================================================================
/// Ranks per side of the grid.
pub const RANKS: usize = 13;
/// Cells in the grid, one per distinct starting hand.
pub const CELLS: usize = RANKS * RANKS;
/// Distinct unordered two-card starting hands, C(52, 2).
pub const TOTAL_COMBOS: Combos = 1326;
/// Slack around the grid inside which the context menu stays suppressed.
pub const GRID_BUFFER_PX: Pixels = 8.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
