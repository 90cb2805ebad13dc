// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod model_stats;
pub mod standouts;
pub mod upgrades;

pub use model_stats::{auction_type_counts, best_deals, group_by_model, model_stats, overview};
pub use standouts::{find_standout_listings, is_standout, standout_features};
pub use upgrades::{cheapest_for_type, classify_upgrade, upgrade_stats};
