use crate::analyzer::upgrades::classify_upgrade;
use crate::model::{Category, Listing, StandoutGroups};

/// A deal must sit more than this many dollars below the official price.
const BELOW_MSRP_CUTOFF: f64 = -100.0;
/// Seller reputation floor: both must be exceeded, strictly.
const RATING_CUTOFF: f64 = 98.0;
const FEEDBACK_CUTOFF: u32 = 1000;

fn significantly_below_msrp(listing: &Listing) -> bool {
    matches!(listing.price_vs_official, Some(delta) if delta < BELOW_MSRP_CUTOFF)
}

fn highly_rated(listing: &Listing) -> bool {
    matches!(listing.rating_percent, Some(rating) if rating > RATING_CUTOFF)
}

fn large_feedback(listing: &Listing) -> bool {
    matches!(listing.feedback_count, Some(count) if count > FEEDBACK_CUTOFF)
}

/// A listing stands out when it is a deep discount, or comes from a seller
/// that is both highly rated and has a large feedback history. A listing
/// missing all three optional fields never qualifies.
pub fn is_standout(listing: &Listing) -> bool {
    significantly_below_msrp(listing) || (highly_rated(listing) && large_feedback(listing))
}

/// Partitions standout listings for the highlight panel: printers grouped
/// by model, upgrades by taxonomy bucket (re-classified per title).
/// Non-standouts are simply skipped.
pub fn find_standout_listings(listings: &[Listing]) -> StandoutGroups {
    let mut groups = StandoutGroups::default();

    for listing in listings {
        if !is_standout(listing) {
            continue;
        }
        match listing.category {
            Category::Printer => groups
                .printers
                .entry(listing.model.clone())
                .or_default()
                .push(listing.clone()),
            Category::Upgrade => groups
                .upgrades
                .entry(classify_upgrade(&listing.title))
                .or_default()
                .push(listing.clone()),
        }
    }

    groups
}

/// Human-readable labels for the detail card, in fixed display order.
pub fn standout_features(listing: &Listing) -> Vec<&'static str> {
    let mut features = Vec::new();
    if significantly_below_msrp(listing) {
        features.push("Significantly below MSRP");
    }
    if highly_rated(listing) {
        features.push("Highly rated seller");
    }
    if large_feedback(listing) {
        features.push("Experienced seller");
    }
    features
}
