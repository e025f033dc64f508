//! Facet and comparator presets for the four listing pages

use crate::core::facet::FacetDescriptor;
use crate::core::sort::{Comparator, ComparatorTable};
use crate::domain::records::{Player, Recommendation, TalentProfile, TransferListing};
use crate::engine::ListingLayout;

/// Sort mode names shared by the presets
pub mod sorts {
    pub const RATING: &str = "rating";
    pub const MATCH: &str = "match";
    pub const AI_SCORE: &str = "ai_score";
    pub const AGE: &str = "age";
    pub const VALUE: &str = "value";
    pub const POTENTIAL: &str = "potential";
    pub const NAME: &str = "name";
    pub const JERSEY: &str = "jersey";
}

/// Facet names shared by the presets
pub mod facets {
    pub use crate::core::query::SEARCH_FACET as SEARCH;

    pub const POSITION: &str = "position";
    pub const NATIONALITY: &str = "nationality";
    pub const LEAGUE: &str = "league";
    pub const STATUS: &str = "status";
    pub const RISK: &str = "risk";
    pub const AGE: &str = "age";
    pub const RATING: &str = "rating";
    pub const MATCH: &str = "match";
}

/// Club roster: players of the signed-in club
pub fn roster() -> ListingLayout {
    ListingLayout::new(
        vec![
            FacetDescriptor::search::<Player>(),
            FacetDescriptor::enumeration(facets::POSITION, "position"),
            FacetDescriptor::enumeration(facets::STATUS, "status"),
            FacetDescriptor::range(facets::AGE, "age"),
        ],
        ComparatorTable::new()
            .with(sorts::RATING, Comparator::numeric_desc("rating"))
            .with(sorts::AGE, Comparator::numeric_asc("age"))
            .with(sorts::VALUE, Comparator::money_desc("market_value"))
            .with(sorts::NAME, Comparator::text_asc("name"))
            .with(sorts::JERSEY, Comparator::numeric_asc("jersey_number")),
        sorts::RATING,
    )
}

/// AI scouting: recommended candidates with a match percentage
pub fn ai_scouting() -> ListingLayout {
    ListingLayout::new(
        vec![
            FacetDescriptor::search::<Recommendation>(),
            FacetDescriptor::enumeration(facets::POSITION, "position"),
            FacetDescriptor::enumeration(facets::LEAGUE, "league"),
            FacetDescriptor::enumeration(facets::RISK, "risk_level"),
            FacetDescriptor::range(facets::MATCH, "match_percentage"),
            FacetDescriptor::range(facets::AGE, "age"),
        ],
        ComparatorTable::new()
            .with(sorts::MATCH, Comparator::numeric_desc("match_percentage"))
            .with(sorts::AI_SCORE, Comparator::numeric_desc("ai_score"))
            .with(sorts::POTENTIAL, Comparator::numeric_desc("potential"))
            .with(sorts::AGE, Comparator::numeric_asc("age"))
            .with(sorts::VALUE, Comparator::money_desc("market_value")),
        sorts::MATCH,
    )
}

/// Explore: talent profiles browsed by scouts
pub fn explore() -> ListingLayout {
    ListingLayout::new(
        vec![
            FacetDescriptor::search::<TalentProfile>(),
            FacetDescriptor::enumeration(facets::POSITION, "position"),
            FacetDescriptor::enumeration(facets::NATIONALITY, "nationality"),
            FacetDescriptor::enumeration(facets::LEAGUE, "league"),
            FacetDescriptor::range(facets::AGE, "age"),
            FacetDescriptor::range(facets::RATING, "rating"),
        ],
        ComparatorTable::new()
            .with(sorts::RATING, Comparator::numeric_desc("rating"))
            .with(sorts::POTENTIAL, Comparator::numeric_desc("potential"))
            .with(sorts::AGE, Comparator::numeric_asc("age"))
            .with(sorts::VALUE, Comparator::money_desc("market_value")),
        sorts::RATING,
    )
}

/// Transfer marketplace: players listed for sale or loan
pub fn transfers() -> ListingLayout {
    ListingLayout::new(
        vec![
            FacetDescriptor::search::<TransferListing>(),
            FacetDescriptor::enumeration(facets::POSITION, "position"),
            FacetDescriptor::enumeration(facets::LEAGUE, "league"),
            FacetDescriptor::enumeration(facets::STATUS, "status"),
            FacetDescriptor::range(facets::AGE, "age"),
        ],
        ComparatorTable::new()
            .with(sorts::VALUE, Comparator::money_desc("asking_value"))
            .with(sorts::RATING, Comparator::numeric_desc("rating"))
            .with(sorts::AGE, Comparator::numeric_asc("age")),
        sorts::VALUE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for layout in [roster(), ai_scouting(), explore(), transfers()] {
            layout.validate().unwrap();
            assert_eq!(layout.facets[0].name, facets::SEARCH);
        }
    }

    #[test]
    fn test_required_sort_presets() {
        assert!(roster().comparators.contains(&sorts::RATING.into()));
        assert!(ai_scouting().comparators.contains(&sorts::MATCH.into()));
        assert!(explore().comparators.contains(&sorts::AGE.into()));
        assert!(transfers().comparators.contains(&sorts::VALUE.into()));
        assert!(explore().comparators.contains(&sorts::POTENTIAL.into()));
    }

    #[test]
    fn test_search_covers_record_search_fields() {
        use crate::core::Record;
        use crate::core::facet::Facet;

        let Facet::Text { fields } = &explore().facets[0].facet else {
            panic!("search must be a text facet");
        };
        assert_eq!(fields, &TalentProfile::search_fields().to_vec());
    }
}
