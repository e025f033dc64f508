//! Wishlist snapshots
//!
//! Each snapshot copies the display attributes of its record at the time
//! it was saved, so the wishlist page can render without the live listing.

use crate::domain::records::{Recommendation, TalentProfile, TransferListing};
use crate::wishlist::WishlistSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A talent saved from the explore page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTalent {
    pub id: String,
    pub name: String,
    pub position: String,
    pub age: u32,
    pub club: String,
    pub nationality: String,
    pub rating: u32,
    pub potential: u32,
    pub market_value: String,
    pub saved_at: DateTime<Utc>,
}

impl From<&TalentProfile> for SavedTalent {
    fn from(talent: &TalentProfile) -> Self {
        Self {
            id: talent.id.clone(),
            name: talent.name.clone(),
            position: talent.position.clone(),
            age: talent.age,
            club: talent.club.clone(),
            nationality: talent.nationality.clone(),
            rating: talent.rating,
            potential: talent.potential,
            market_value: talent.market_value.clone(),
            saved_at: Utc::now(),
        }
    }
}

impl WishlistSnapshot for SavedTalent {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A transfer listing on the watchlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedListing {
    pub id: String,
    pub name: String,
    pub position: String,
    pub club: String,
    pub asking_value: String,
    pub status: String,
    pub saved_at: DateTime<Utc>,
}

impl From<&TransferListing> for SavedListing {
    fn from(listing: &TransferListing) -> Self {
        Self {
            id: listing.id.clone(),
            name: listing.name.clone(),
            position: listing.position.clone(),
            club: listing.club.clone(),
            asking_value: listing.asking_value.clone(),
            status: listing.status.clone(),
            saved_at: Utc::now(),
        }
    }
}

impl WishlistSnapshot for SavedListing {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A shortlisted AI recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecommendation {
    pub id: String,
    pub name: String,
    pub position: String,
    pub club: String,
    pub match_percentage: u32,
    pub ai_score: f64,
    pub risk_level: String,
    pub saved_at: DateTime<Utc>,
}

impl From<&Recommendation> for SavedRecommendation {
    fn from(rec: &Recommendation) -> Self {
        Self {
            id: rec.id.clone(),
            name: rec.name.clone(),
            position: rec.position.clone(),
            club: rec.club.clone(),
            match_percentage: rec.match_percentage,
            ai_score: rec.ai_score,
            risk_level: rec.risk_level.clone(),
            saved_at: Utc::now(),
        }
    }
}

impl WishlistSnapshot for SavedRecommendation {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    #[test]
    fn test_talent_snapshot_copies_display_fields() {
        let talent = &catalog::talents()[0];
        let saved = SavedTalent::from(talent);
        assert_eq!(saved.id, talent.id);
        assert_eq!(saved.club, talent.club);
        assert_eq!(saved.market_value, talent.market_value);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let listing = &catalog::transfer_listings()[0];
        let saved = SavedListing::from(listing);
        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["id"], listing.id.as_str());
        assert!(json["saved_at"].is_string());

        let back: SavedListing = serde_json::from_value(json).unwrap();
        assert_eq!(back, saved);
    }
}
