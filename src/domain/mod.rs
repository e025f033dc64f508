//! Sports Reels domain: records, page presets, mock catalog and forms

pub mod catalog;
pub mod pages;
pub mod records;
pub mod snapshots;
pub mod wizard;

pub use catalog::{Catalog, CatalogService};
pub use records::{Player, Recommendation, TalentProfile, TransferListing};
pub use snapshots::{SavedListing, SavedRecommendation, SavedTalent};
pub use wizard::{PlayerWizard, WizardStep};

use crate::engine::ListingPage;

/// Explore page with the scout wishlist
pub type ExplorePage = ListingPage<TalentProfile, SavedTalent>;

/// Transfer marketplace with the watchlist
pub type TransfersPage = ListingPage<TransferListing, SavedListing>;

/// AI scouting with the shortlist
pub type AiScoutingPage = ListingPage<Recommendation, SavedRecommendation>;
