//! Scouting board demo
//!
//! Loads the explore page from the mock catalog, runs a few queries, saves
//! two talents and prints the scout wishlist.
//!
//! ```sh
//! RUST_LOG=reels=debug cargo run --example scouting_board
//! REELS_CONFIG=reels.yaml cargo run --example scouting_board --features lmdb
//! ```

use anyhow::Result;
use reels::domain::{ExplorePage, TalentProfile, catalog, pages};
use reels::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_view(title: &str, view: &ListingView<'_, TalentProfile>) {
    println!("\n== {} ({} of {}) ==", title, view.summary().matched, view.summary().total);
    if view.is_empty() {
        println!("   no talents match these filters");
    }
    for talent in view.records() {
        println!(
            "   {:<16} {:<11} {:>2}y  rating {:>2}  potential {:>2}  {}",
            talent.name, talent.position, talent.age, talent.rating, talent.potential, talent.market_value
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("REELS_CONFIG") {
        Ok(path) => ReelsConfig::from_yaml_file(&path)?,
        Err(_) => ReelsConfig::default(),
    };
    let durable = config.storage().open()?;
    let keys = config.wishlist_keys();

    let session = StaticSession::signed_in(CurrentUser {
        identifier: "scout-7".to_string(),
        role: Role::Scout,
        display_name: "Ana Horvat".to_string(),
    });
    let user = session.current_user();
    if !Page::Explore.policy().check(user.as_ref()) {
        anyhow::bail!("explore page is not available for this session");
    }
    info!(menu = ?menu_for(user.as_ref()), "signed in");

    let service = catalog::service::<TalentProfile>();
    let layout = config.layout_for(Page::Explore, pages::explore());
    let store = RecordStore::load(&service, layout).await?;
    let mut page = ExplorePage::new(store, Wishlist::new(durable, keys.scout_wishlist));

    print_view("all talents", &page.store().results());

    page.store_mut().criteria_mut().set_max("age", "21");
    page.store_mut().set_sort("potential")?;
    print_view("21 and under by potential", &page.store().results());

    page.store_mut().set_search("madrid");
    print_view("search 'madrid'", &page.store().results());
    page.store_mut().reset_filters();

    for id in ["t1", "t3"] {
        let saved = page.toggle_saved(id)?;
        info!(id, saved, "wishlist toggled");
    }

    println!("\n== scout wishlist ==");
    for saved in page.wishlist().entries() {
        println!("   {:<16} {:<20} saved {}", saved.name, saved.club, saved.saved_at.format("%Y-%m-%d %H:%M"));
    }

    Ok(())
}
