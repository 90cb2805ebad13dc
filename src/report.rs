// Text rendering for the dashboard sections.
use crate::analyzer::{
    auction_type_counts, best_deals, cheapest_for_type, group_by_model, standout_features,
};
use crate::auction::{auction_status, time_remaining};
use crate::model::{
    AuctionType, Listing, ListingsData, ModelStat, Overview, StandoutGroups, UpgradeStat,
};
use chrono::{DateTime, Utc};

/// Renders the whole dashboard: overview, model cards, upgrade table,
/// standout panel and a featured-deal detail card.
pub fn render_dashboard(
    data: &ListingsData,
    stats: &[ModelStat],
    upgrade_stats: &[UpgradeStat],
    standouts: &StandoutGroups,
    overview: &Overview,
    top_deals: usize,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    out.push_str(&render_overview(data, overview));

    let groups = group_by_model(&data.listings);
    for stat in stats {
        let members = groups.get(stat.model.as_str()).map(Vec::as_slice).unwrap_or(&[]);
        let description = data.instructions.models.get(&stat.model).map(String::as_str);
        out.push('\n');
        out.push_str(&render_model_card(stat, members, description, top_deals, now));
    }

    out.push('\n');
    out.push_str(&render_upgrade_stats(upgrade_stats, &data.listings));

    out.push('\n');
    out.push_str(&render_standouts(standouts, now));

    let all: Vec<&Listing> = data.listings.iter().collect();
    if let Some(featured) = best_deals(&all, 1).first() {
        out.push_str("\n=== Featured Deal ===\n");
        out.push_str(&render_listing_detail(featured, now));
    }

    out
}

pub fn render_overview(data: &ListingsData, overview: &Overview) -> String {
    let mut out = String::new();
    out.push_str("=== Prusa Marketplace Analysis ===\n");
    out.push_str(&data.instructions.summary);
    out.push_str("\n\nKey Metrics:\n");
    out.push_str(&format!("  Total Listings: {}\n", overview.total));
    out.push_str(&format!("  Printers: {}\n", overview.printers));
    out.push_str(&format!("  Upgrades: {}\n", overview.upgrades));
    out.push_str(&format!("  Below MSRP: {}\n", overview.below_msrp));
    out
}

pub fn render_model_card(
    stat: &ModelStat,
    members: &[&Listing],
    description: Option<&str>,
    top_deals: usize,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    match description {
        Some(text) => out.push_str(&format!("--- {} ({}) ---\n", stat.model, text)),
        None => out.push_str(&format!("--- {} ---\n", stat.model)),
    }
    out.push_str(&format!("Count: {}\n", stat.count));
    out.push_str(&format!("Average Price: ${:.2}\n", stat.avg_price));
    out.push_str(&format!("Below MSRP: {}\n", stat.below_msrp));
    out.push_str(&format!("With Shipping: {}\n", stat.with_shipping));

    let types = auction_type_counts(members)
        .into_iter()
        .map(|(auction_type, count)| format!("{}: {}", auction_type, count))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("Auction Types: {}\n", types));

    let deals = best_deals(members, top_deals);
    if !deals.is_empty() {
        out.push_str("Best Deals:\n");
        for deal in deals {
            out.push_str(&format!("  ${:.2}", deal.price));
            if let Some(note) = vs_msrp_note(deal) {
                out.push_str(&format!(" {}", note));
            }
            if let Some(note) = auction_note(deal, now) {
                out.push_str(&format!(" [{}]", note));
            }
            out.push('\n');
        }
    }
    out
}

pub fn render_upgrade_stats(stats: &[UpgradeStat], listings: &[Listing]) -> String {
    let mut out = String::new();
    out.push_str("--- Upgrade Types ---\n");
    for stat in stats {
        out.push_str(&format!(
            "{}: {} listings, avg ${:.2}",
            stat.upgrade_type, stat.count, stat.avg_price
        ));
        if let Some(cheapest) = cheapest_for_type(listings, stat.upgrade_type) {
            out.push_str(&format!(" (cheapest: ${:.2} - {})", cheapest.price, cheapest.title));
        }
        out.push('\n');
    }
    out
}

pub fn render_standouts(standouts: &StandoutGroups, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("--- Standout Listings ---\n");

    out.push_str("Printer Standouts:\n");
    for (model, listings) in &standouts.printers {
        out.push_str(&format!("  {}\n", model));
        for listing in listings {
            out.push_str(&render_standout_line(listing, now));
        }
    }

    out.push_str("Upgrade Standouts:\n");
    for (upgrade_type, listings) in &standouts.upgrades {
        out.push_str(&format!("  {} Upgrades\n", upgrade_type));
        for listing in listings {
            out.push_str(&render_standout_line(listing, now));
        }
    }

    out
}

fn render_standout_line(listing: &Listing, now: DateTime<Utc>) -> String {
    let mut line = format!("    {} - ${:.2}", listing.title, listing.price);
    if let Some(note) = vs_msrp_note(listing) {
        line.push_str(&format!(" {}", note));
    }
    if let Some(note) = auction_note(listing, now) {
        line.push_str(&format!(" [{}]", note));
    }
    line.push('\n');
    line
}

pub fn render_listing_detail(listing: &Listing, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", listing.title));

    out.push_str("Price Details:\n");
    out.push_str(&format!("  Base Price: ${:.2}\n", listing.price));
    if let Some(shipping) = listing.shipping_cost {
        out.push_str(&format!("  Shipping: ${:.2}\n", shipping));
    }
    if let Some(total) = listing.total_cost {
        out.push_str(&format!("  Total: ${:.2}\n", total));
    }
    if let Some(delta) = listing.price_vs_official {
        out.push_str(&format!("  vs MSRP: ${:.2}\n", delta));
    }

    out.push_str("Seller Information:\n");
    if let Some(rating) = listing.rating_percent {
        out.push_str(&format!("  Rating: {}%\n", rating));
    }
    if let Some(feedback) = listing.feedback_count {
        out.push_str(&format!("  Feedback: {}\n", feedback));
    }
    out.push_str(&format!("  Info: {}\n", listing.seller_info));

    let features = standout_features(listing);
    if !features.is_empty() {
        out.push_str("Standout Features:\n");
        for feature in features {
            out.push_str(&format!("  - {}\n", feature));
        }
    }

    if listing.auction_type != AuctionType::BuyItNow {
        if let Some(note) = auction_note(listing, now) {
            out.push_str(&format!("Auction: {}\n", note));
        }
    }
    out.push_str(&format!("Link: {}\n", listing.link));
    out
}

fn vs_msrp_note(listing: &Listing) -> Option<String> {
    listing
        .price_vs_official
        .map(|delta| format!("(${:.2} vs MSRP)", delta))
}

fn auction_note(listing: &Listing, now: DateTime<Utc>) -> Option<String> {
    if listing.auction_type == AuctionType::BuyItNow {
        return None;
    }
    let status = auction_status(listing, now);
    match time_remaining(listing, now) {
        Some(left) => Some(format!("{} ({})", status, left)),
        None => Some(status),
    }
}
