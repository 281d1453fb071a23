/// Lexia system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Confidence score assigned to a concept at creation.
pub const INITIAL_CONFIDENCE_SCORE: f64 = 0.75;

/// Historical yield assigned to a concept at creation.
pub const INITIAL_HISTORICAL_YIELD: f64 = 0.5;

/// Upper bound on candidate terms accepted from a single generation call.
pub const MAX_TERMS_PER_GENERATION: usize = 10;
