// Auction status and countdown helpers.
use crate::model::{AuctionType, Listing};
use chrono::{DateTime, Utc};

/// Parses RFC 3339 text into `DateTime<Utc>`, if possible.
pub fn parse_end_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Display status for a listing's sale format. Auctions without a usable
/// end time fall back to their sale-format name.
pub fn auction_status(listing: &Listing, now: DateTime<Utc>) -> String {
    if listing.auction_type == AuctionType::BuyItNow {
        return AuctionType::BuyItNow.to_string();
    }

    match listing.end_time.as_deref().and_then(parse_end_time) {
        Some(end_time) if end_time > now => "Active Auction".to_string(),
        Some(_) => "Auction Ended".to_string(),
        None => listing.auction_type.to_string(),
    }
}

/// Countdown label for a listing, when it has a parseable end time.
pub fn time_remaining(listing: &Listing, now: DateTime<Utc>) -> Option<String> {
    listing
        .end_time
        .as_deref()
        .and_then(parse_end_time)
        .map(|end| format_time_remaining(end, now))
}

/// Formats the time left until `end` in the coarsest two units, or "Ended".
pub fn format_time_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (end - now).num_milliseconds();
    if diff_ms <= 0 {
        return "Ended".to_string();
    }

    let days = diff_ms / (1000 * 60 * 60 * 24);
    let hours = (diff_ms % (1000 * 60 * 60 * 24)) / (1000 * 60 * 60);
    let minutes = (diff_ms % (1000 * 60 * 60)) / (1000 * 60);

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ts: &str) -> DateTime<Utc> {
        parse_end_time(ts).unwrap()
    }

    #[test]
    fn formats_days_and_hours() {
        let now = at("2025-03-01T00:00:00Z");
        let end = at("2025-03-03T05:30:00Z");
        assert_eq!(format_time_remaining(end, now), "2d 5h");
    }

    #[test]
    fn formats_hours_and_minutes() {
        let now = at("2025-03-01T00:00:00Z");
        let end = at("2025-03-01T03:45:00Z");
        assert_eq!(format_time_remaining(end, now), "3h 45m");
    }

    #[test]
    fn formats_minutes_only() {
        let now = at("2025-03-01T00:00:00Z");
        let end = at("2025-03-01T00:59:59Z");
        assert_eq!(format_time_remaining(end, now), "59m");
    }

    #[test]
    fn past_end_time_is_ended() {
        let now = at("2025-03-01T00:00:00Z");
        let end = at("2025-02-28T23:59:59Z");
        assert_eq!(format_time_remaining(end, now), "Ended");
        assert_eq!(format_time_remaining(now, now), "Ended");
    }

    #[test]
    fn parse_end_time_handles_offsets_and_garbage() {
        let parsed = parse_end_time("2025-03-01T02:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(parse_end_time("next tuesday"), None);
    }
}
