//! Mock catalog
//!
//! Every page starts from a literal collection. AI scores, match
//! percentages and valuations are illustrative constants.

use crate::core::Record;
use crate::domain::records::{Player, Recommendation, TalentProfile, TransferListing};
use crate::storage::InMemoryRecordService;

/// Records that ship with a literal mock collection
pub trait Catalog: Record {
    fn mock() -> Vec<Self>;
}

/// Persistence collaborator backed by the mock collections
pub type CatalogService<T> = InMemoryRecordService<T>;

/// A service seeded with the mock collection of `T`
pub fn service<T: Catalog>() -> CatalogService<T> {
    InMemoryRecordService::seeded(T::mock())
}

/// The club whose roster is shown
pub const HOME_CLUB: &str = "HNK Hajduk Split";

#[allow(clippy::too_many_arguments)]
fn player(
    id: &str,
    name: &str,
    position: &str,
    age: u32,
    nationality: &str,
    jersey_number: u32,
    preferred_foot: &str,
    rating: u32,
    market_value: &str,
    status: &str,
) -> Player {
    Player::with_id(
        id,
        name.to_string(),
        position.to_string(),
        age,
        nationality.to_string(),
        HOME_CLUB.to_string(),
        jersey_number,
        180,
        preferred_foot.to_string(),
        rating,
        market_value.to_string(),
        "2027-06-30".to_string(),
        status.to_string(),
    )
}

pub fn players() -> Vec<Player> {
    vec![
        player("p1", "Ivan Kovač", "Forward", 27, "Croatia", 9, "right", 94, "€18M", "active"),
        player("p2", "Marco Bellini", "Midfielder", 25, "Italy", 8, "left", 91, "€14M", "active"),
        player("p3", "Tomás Ferreira", "Defender", 29, "Portugal", 4, "right", 88, "€9M", "injured"),
        player("p4", "Ante Babić", "Forward", 22, "Croatia", 19, "left", 79, "€6M", "active"),
        player("p5", "Jonas Weber", "Goalkeeper", 31, "Germany", 1, "right", 85, "€5M", "active"),
        player("p6", "Luka Marić", "Midfielder", 19, "Croatia", 27, "right", 72, "€2.5M", "loaned"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn recommendation(
    id: &str,
    name: &str,
    position: &str,
    age: u32,
    nationality: &str,
    club: &str,
    league: &str,
    match_percentage: u32,
    ai_score: f64,
    potential: u32,
    risk_level: &str,
    market_value: &str,
) -> Recommendation {
    Recommendation::with_id(
        id,
        name.to_string(),
        position.to_string(),
        age,
        nationality.to_string(),
        club.to_string(),
        league.to_string(),
        match_percentage,
        ai_score,
        potential,
        risk_level.to_string(),
        market_value.to_string(),
    )
}

pub fn recommendations() -> Vec<Recommendation> {
    vec![
        recommendation("r1", "Mateo Silva", "Forward", 21, "Brazil", "Santos", "Série A", 94, 9.1, 90, "low", "€12M"),
        recommendation("r2", "Erik Lindqvist", "Defender", 24, "Sweden", "Malmö FF", "Allsvenskan", 89, 8.4, 84, "medium", "€7M"),
        recommendation("r3", "Youssef Amrani", "Midfielder", 20, "Morocco", "Raja Casablanca", "Botola Pro", 86, 8.8, 91, "high", "€4M"),
        recommendation("r4", "Nikola Petrović", "Winger", 23, "Serbia", "Red Star Belgrade", "SuperLiga", 82, 7.9, 85, "medium", "€9M"),
        recommendation("r5", "Daniel Okafor", "Forward", 26, "Nigeria", "Genk", "Pro League", 78, 7.5, 80, "low", "€11M"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn talent(
    id: &str,
    name: &str,
    position: &str,
    age: u32,
    nationality: &str,
    club: &str,
    league: &str,
    rating: u32,
    potential: u32,
    market_value: &str,
) -> TalentProfile {
    TalentProfile::with_id(
        id,
        name.to_string(),
        position.to_string(),
        age,
        nationality.to_string(),
        club.to_string(),
        league.to_string(),
        rating,
        potential,
        market_value.to_string(),
    )
}

pub fn talents() -> Vec<TalentProfile> {
    vec![
        talent("t1", "Lucas Moreau", "Midfielder", 19, "France", "Lyon", "Ligue 1", 78, 89, "€15M"),
        talent("t2", "Kenji Sato", "Winger", 22, "Japan", "Yokohama F. Marinos", "J1 League", 80, 86, "€6M"),
        talent("t3", "Filip Horvat", "Defender", 20, "Croatia", "Dinamo Zagreb", "HNL", 76, 88, "€8M"),
        talent("t4", "Santiago Ruiz", "Forward", 24, "Argentina", "River Plate", "Primera División", 84, 87, "€20M"),
        talent("t5", "Oliver Hansen", "Goalkeeper", 21, "Denmark", "FC Copenhagen", "Superliga", 77, 85, "€5M"),
        talent("t6", "Emeka Nwosu", "Forward", 18, "Nigeria", "Enyimba", "NPFL", 70, 90, "N/A"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    position: &str,
    age: u32,
    nationality: &str,
    club: &str,
    league: &str,
    asking_value: &str,
    rating: u32,
    status: &str,
) -> TransferListing {
    TransferListing::with_id(
        id,
        name.to_string(),
        position.to_string(),
        age,
        nationality.to_string(),
        club.to_string(),
        league.to_string(),
        asking_value.to_string(),
        rating,
        status.to_string(),
    )
}

pub fn transfer_listings() -> Vec<TransferListing> {
    vec![
        listing("l1", "Stefan Novak", "Midfielder", 26, "Slovenia", "Olimpija Ljubljana", "PrvaLiga", "€9M", 82, "available"),
        listing("l2", "Rafael Costa", "Forward", 28, "Brazil", "Porto", "Primeira Liga", "€18M", 86, "negotiating"),
        listing("l3", "Adam Nowak", "Defender", 23, "Poland", "Legia Warsaw", "Ekstraklasa", "€4.5M", 78, "available"),
        listing("l4", "Hugo Lambert", "Winger", 21, "Belgium", "Anderlecht", "Pro League", "N/A", 75, "loan"),
        listing("l5", "Mirko Zec", "Goalkeeper", 30, "Croatia", "HNK Rijeka", "HNL", "€2M", 80, "available"),
    ]
}

impl Catalog for Player {
    fn mock() -> Vec<Self> {
        players()
    }
}

impl Catalog for Recommendation {
    fn mock() -> Vec<Self> {
        recommendations()
    }
}

impl Catalog for TalentProfile {
    fn mock() -> Vec<Self> {
        talents()
    }
}

impl Catalog for TransferListing {
    fn mock() -> Vec<Self> {
        transfer_listings()
    }
}
