use crate::analyzer::model_stats::mean_price;
use crate::model::{Category, Listing, UpgradeStat, UpgradeType};
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Classification rules, checked top to bottom. The first bucket whose
/// keyword occurs in the lower-cased title wins, so a title mentioning both
/// "hotend" and "frame" lands in Hotend.
const UPGRADE_RULES: &[(UpgradeType, &[&str])] = &[
    (UpgradeType::Hotend, &["hotend"]),
    (UpgradeType::Frame, &["frame"]),
    (UpgradeType::Nozzle, &["nozzle"]),
    (UpgradeType::Extruder, &["extruder"]),
    (UpgradeType::Sheet, &["sheet"]),
    (UpgradeType::Bondtech, &["bondtech"]),
    (UpgradeType::Bear, &["bear"]),
    (UpgradeType::Pinda, &["pinda"]),
];

/// Assigns a listing title to its upgrade bucket. Substring match,
/// case-insensitive, unanchored; no keyword hit means Other.
pub fn classify_upgrade(title: &str) -> UpgradeType {
    let title = title.to_lowercase();
    for (bucket, keywords) in UPGRADE_RULES {
        if keywords.iter().any(|keyword| title.contains(keyword)) {
            return *bucket;
        }
    }
    UpgradeType::Other
}

/// Aggregates the upgrade subset per taxonomy bucket. Buckets no listing
/// falls into are never materialized; bucket order is first-seen order.
pub fn upgrade_stats(listings: &[Listing]) -> Vec<UpgradeStat> {
    let mut groups: IndexMap<UpgradeType, Vec<&Listing>> = IndexMap::new();
    for listing in listings.iter().filter(|l| l.category == Category::Upgrade) {
        groups
            .entry(classify_upgrade(&listing.title))
            .or_default()
            .push(listing);
    }

    groups
        .into_iter()
        .map(|(upgrade_type, members)| UpgradeStat {
            upgrade_type,
            count: members.len(),
            avg_price: mean_price(&members),
        })
        .collect()
}

/// Lowest-priced upgrade listing whose title mentions the bucket name.
/// Ties keep the earliest listing.
pub fn cheapest_for_type<'a>(
    listings: &'a [Listing],
    upgrade_type: UpgradeType,
) -> Option<&'a Listing> {
    let needle = upgrade_type.to_string().to_lowercase();
    listings
        .iter()
        .filter(|l| l.category == Category::Upgrade && l.title.to_lowercase().contains(needle.as_str()))
        .min_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal))
}
