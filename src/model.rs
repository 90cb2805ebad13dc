// Core structs: Listing, snapshot root, derived stats
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Listing category as it appears in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    #[serde(rename = "printer")]
    Printer,
    #[serde(rename = "upgrade")]
    Upgrade,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Printer => write!(f, "printer"),
            Category::Upgrade => write!(f, "upgrade"),
        }
    }
}

/// Sale format of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AuctionType {
    #[serde(rename = "Buy It Now")]
    BuyItNow,
    #[serde(rename = "Auction")]
    Auction,
    #[serde(rename = "Hybrid")]
    Hybrid,
}

impl fmt::Display for AuctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuctionType::BuyItNow => write!(f, "Buy It Now"),
            AuctionType::Auction => write!(f, "Auction"),
            AuctionType::Hybrid => write!(f, "Hybrid"),
        }
    }
}

/// One marketplace listing from the snapshot. Never mutated after ingest;
/// absent optional fields mean "unknown", not zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub platform: String,
    pub title: String,
    pub price: f64,
    pub shipping_cost: Option<f64>,
    pub total_cost: Option<f64>,
    /// price minus the official price for the model, supplied upstream.
    pub price_vs_official: Option<f64>,
    pub seller_info: String,
    pub feedback_count: Option<u32>,
    pub rating_percent: Option<f64>,
    pub link: String,
    pub category: Category,
    pub model: String,
    pub auction_type: AuctionType,
    /// Auction close time, RFC 3339 text; parsed on demand.
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Free-text guidance bundled with the snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotInstructions {
    pub summary: String,
    pub key_metrics: Vec<String>,
    pub models: IndexMap<String, String>,
}

/// Snapshot root as fetched from disk or over HTTP.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingsData {
    pub instructions: SnapshotInstructions,
    pub listings: Vec<Listing>,
}

/// Per-model aggregate over all listings sharing one `model` string.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelStat {
    pub model: String,
    pub avg_price: f64,
    pub count: usize,
    pub below_msrp: usize,
    pub with_shipping: usize,
}

/// Fixed upgrade taxonomy, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeType {
    Hotend,
    Frame,
    Nozzle,
    Extruder,
    Sheet,
    Bondtech,
    Bear,
    Pinda,
    Other,
}

impl fmt::Display for UpgradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpgradeType::Hotend => write!(f, "Hotend"),
            UpgradeType::Frame => write!(f, "Frame"),
            UpgradeType::Nozzle => write!(f, "Nozzle"),
            UpgradeType::Extruder => write!(f, "Extruder"),
            UpgradeType::Sheet => write!(f, "Sheet"),
            UpgradeType::Bondtech => write!(f, "Bondtech"),
            UpgradeType::Bear => write!(f, "Bear"),
            UpgradeType::Pinda => write!(f, "PINDA"),
            UpgradeType::Other => write!(f, "Other"),
        }
    }
}

/// Headline counts for the overview panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub total: usize,
    pub printers: usize,
    pub upgrades: usize,
    pub below_msrp: usize,
}

/// Per-bucket aggregate over the upgrade subset.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeStat {
    pub upgrade_type: UpgradeType,
    pub count: usize,
    pub avg_price: f64,
}

/// Standout listings partitioned for the highlight panel. Bucket order is
/// first-use order; entries within a bucket keep input order.
#[derive(Debug, Clone, Default)]
pub struct StandoutGroups {
    pub printers: IndexMap<String, Vec<Listing>>,
    pub upgrades: IndexMap<UpgradeType, Vec<Listing>>,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("http error: {0}")]
    Http(String),
    #[error("snapshot request timed out")]
    Timeout,
    #[error("unexpected response status: {0}")]
    InvalidResponse(u16),
    #[error("snapshot read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}
