// Official retail prices used as the below-MSRP baseline.
//
// The snapshot producer computes `price_vs_official = price - official price`
// before the data reaches this crate; the table here only backs display and
// consistency checks, ingest never recomputes the field.

pub const OFFICIAL_PRICES: &[(&str, f64)] = &[
    ("MK3S", 799.0),
    ("MK4", 799.0),
    ("MINI", 379.0),
    ("CORE", 399.0),
];

/// Looks up the official price for a model key. Exact match only.
pub fn official_price(model: &str) -> Option<f64> {
    OFFICIAL_PRICES
        .iter()
        .find(|(key, _)| *key == model)
        .map(|(_, price)| *price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_models_are_covered() {
        assert_eq!(official_price("MK3S"), Some(799.0));
        assert_eq!(official_price("MK4"), Some(799.0));
        assert_eq!(official_price("MINI"), Some(379.0));
        assert_eq!(official_price("CORE"), Some(399.0));
    }

    #[test]
    fn unknown_or_case_variant_model_has_no_price() {
        assert_eq!(official_price("MK2"), None);
        assert_eq!(official_price("mk4"), None);
    }
}
