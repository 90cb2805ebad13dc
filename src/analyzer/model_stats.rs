use crate::model::{AuctionType, Category, Listing, ModelStat, Overview};
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Partitions listings by exact model string. Group order is first-seen
/// order; no normalization, so case variants form separate groups.
pub fn group_by_model(listings: &[Listing]) -> IndexMap<&str, Vec<&Listing>> {
    let mut groups: IndexMap<&str, Vec<&Listing>> = IndexMap::new();
    for listing in listings {
        groups
            .entry(listing.model.as_str())
            .or_default()
            .push(listing);
    }
    groups
}

/// Computes per-model summary statistics. Empty input yields no groups, so
/// the mean never divides by zero.
pub fn model_stats(listings: &[Listing]) -> Vec<ModelStat> {
    group_by_model(listings)
        .into_iter()
        .map(|(model, members)| ModelStat {
            model: model.to_string(),
            avg_price: mean_price(&members),
            count: members.len(),
            below_msrp: members
                .iter()
                .filter(|l| matches!(l.price_vs_official, Some(delta) if delta < 0.0))
                .count(),
            with_shipping: members.iter().filter(|l| l.shipping_cost.is_some()).count(),
        })
        .collect()
}

pub(crate) fn mean_price(members: &[&Listing]) -> f64 {
    let total: f64 = members.iter().map(|l| l.price).sum();
    total / members.len() as f64
}

/// Headline counts across the whole snapshot.
pub fn overview(listings: &[Listing]) -> Overview {
    Overview {
        total: listings.len(),
        printers: listings
            .iter()
            .filter(|l| l.category == Category::Printer)
            .count(),
        upgrades: listings
            .iter()
            .filter(|l| l.category == Category::Upgrade)
            .count(),
        below_msrp: listings
            .iter()
            .filter(|l| matches!(l.price_vs_official, Some(delta) if delta < 0.0))
            .count(),
    }
}

/// Counts listings per sale format, first-seen order.
pub fn auction_type_counts(listings: &[&Listing]) -> Vec<(AuctionType, usize)> {
    let mut counts: IndexMap<AuctionType, usize> = IndexMap::new();
    for listing in listings {
        *counts.entry(listing.auction_type).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Below-MSRP listings sorted by how far under the official price they sit,
/// deepest discount first, truncated to `limit`.
pub fn best_deals<'a>(listings: &[&'a Listing], limit: usize) -> Vec<&'a Listing> {
    let mut deals: Vec<&Listing> = listings
        .iter()
        .copied()
        .filter(|l| matches!(l.price_vs_official, Some(delta) if delta < 0.0))
        .collect();
    deals.sort_by(|a, b| {
        a.price_vs_official
            .partial_cmp(&b.price_vs_official)
            .unwrap_or(Ordering::Equal)
    });
    deals.truncate(limit);
    deals
}
