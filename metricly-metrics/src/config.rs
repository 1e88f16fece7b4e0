/// Multiplier applied by cost-per-mille: cost is quoted per this many impressions.
pub const COST_PER_MILLE_SCALE: f64 = 1_000.0;
