//! Records shown on the listing pages

use crate::impl_record;

impl_record!(Player, "player", ["name", "position", "nationality"], {
    position: String,
    age: u32,
    nationality: String,
    club: String,
    jersey_number: u32,
    height_cm: u32,
    preferred_foot: String,
    rating: u32,
    market_value: String,
    contract_until: String,
    status: String,
});

impl_record!(Recommendation, "recommendation", ["name", "position", "club"], {
    position: String,
    age: u32,
    nationality: String,
    club: String,
    league: String,
    match_percentage: u32,
    ai_score: f64,
    potential: u32,
    risk_level: String,
    market_value: String,
});

impl_record!(TalentProfile, "talent", ["name", "club", "nationality"], {
    position: String,
    age: u32,
    nationality: String,
    club: String,
    league: String,
    rating: u32,
    potential: u32,
    market_value: String,
});

impl_record!(TransferListing, "transfer_listing", ["name", "club", "position"], {
    position: String,
    age: u32,
    nationality: String,
    club: String,
    league: String,
    asking_value: String,
    rating: u32,
    status: String,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;

    #[test]
    fn test_money_fields_stay_strings() {
        let listing = TransferListing::with_id(
            "t1",
            "Luka Perić".to_string(),
            "Forward".to_string(),
            23,
            "Croatia".to_string(),
            "HNK Rijeka".to_string(),
            "HNL".to_string(),
            "€4.5M".to_string(),
            81,
            "available".to_string(),
        );

        assert_eq!(listing.text_value("asking_value"), Some("€4.5M".to_string()));
        assert_eq!(listing.numeric_value("asking_value"), None);
        assert_eq!(listing.numeric_value("age"), Some(23.0));
        assert_eq!(TransferListing::record_type(), "transfer_listing");
    }

    #[test]
    fn test_ai_score_is_float() {
        let rec = Recommendation::with_id(
            "r1",
            "Marko Jurić".to_string(),
            "Midfielder".to_string(),
            21,
            "Croatia".to_string(),
            "NK Osijek".to_string(),
            "HNL".to_string(),
            92,
            8.7,
            88,
            "low".to_string(),
            "€6M".to_string(),
        );
        assert_eq!(rec.numeric_value("ai_score"), Some(8.7));
        assert_eq!(rec.numeric_value("match_percentage"), Some(92.0));
    }
}
