//! Named default values shared between config structs and documentation.

// --- Scoring ---
/// Relevance feedback below this is negative.
pub const DEFAULT_LOW_YIELD_THRESHOLD: f64 = 0.3;
/// Concepts whose score falls below this are deactivated.
pub const DEFAULT_DEACTIVATION_THRESHOLD: f64 = 0.2;
/// Score multiplier on positive feedback, capped at 1.0.
pub const DEFAULT_POSITIVE_BOOST_FACTOR: f64 = 1.05;
/// Score multiplier on negative feedback.
pub const DEFAULT_SCORE_DECAY_FACTOR: f64 = 0.95;
pub const DEFAULT_TIME_DECAY_ENABLED: bool = true;
/// Days without positive feedback before time decay applies.
pub const DEFAULT_DECAY_PERIOD_DAYS: u32 = 14;
/// Score multiplier per decay cycle once the period has elapsed.
pub const DEFAULT_TIME_DECAY_FACTOR: f64 = 0.98;

// --- Gateway ---
/// Minimum spacing between provider call starts. Sized for a 15 RPM quota
/// (60 / 15 = 4 s) plus a small buffer.
pub const DEFAULT_MIN_CALL_INTERVAL_SECS: f64 = 4.1;
pub const DEFAULT_GENERATION_MAX_TOKENS: u32 = 150;
pub const DEFAULT_TRANSLATION_MAX_TOKENS: u32 = 50;
pub const DEFAULT_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// --- Lifecycle ---
/// Maximum simultaneous in-flight term/concept tasks during a cycle.
pub const DEFAULT_FANOUT_LIMIT: usize = 10;

// --- Scheduler ---
pub const DEFAULT_SCHEDULER_INTERVAL_MINUTES: u64 = 60;
pub const DEFAULT_SCHEDULER_JITTER_SECS: u64 = 60;
/// Pause between the generation cycle and the decay cycle within one job.
pub const DEFAULT_INTER_CYCLE_PAUSE_SECS: u64 = 5;
