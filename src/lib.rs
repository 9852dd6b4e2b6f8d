//! Politicômetro: political orientation quiz
//!
//! Statements → QuizSession (answers, navigation, resume) → Classifier → ResultRecord
//! → Storage, with a terminal front-end in `main.rs`.

pub mod core;
pub mod types;

// =============================================================================
// ANSWER SCALE
// =============================================================================

/// Lowest value on the agreement scale ("Discordo Totalmente")
pub const SCALE_MIN: i8 = -2;

/// Highest value on the agreement scale ("Concordo Totalmente")
pub const SCALE_MAX: i8 = 2;

// =============================================================================
// POSITION THRESHOLDS - inclusive lower bound of each band
// =============================================================================

/// Below this: Esquerda Radical
pub const THRESHOLD_LEFT: i32 = -40;

/// Below this: Esquerda
pub const THRESHOLD_CENTER_LEFT: i32 = -15;

/// Below this: Centro-Esquerda
pub const THRESHOLD_CENTER: i32 = -5;

/// Below this: Centro
pub const THRESHOLD_CENTER_RIGHT: i32 = 5;

/// Below this: Centro-Direita
pub const THRESHOLD_RIGHT: i32 = 15;

/// Below this: Direita. At or above: Direita Conservadora
pub const THRESHOLD_CONSERVATIVE_RIGHT: i32 = 40;

// =============================================================================
// PERSISTENCE
// =============================================================================

/// A saved session older than this (milliseconds) is ignored on startup.
/// 1 hour, exclusive: a snapshot exactly this old is stale.
pub const SNAPSHOT_FRESHNESS_MS: i64 = 3_600_000;

/// Default location of the file-backed store
pub const DEFAULT_STORE_PATH: &str = "./politicometro.json";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
