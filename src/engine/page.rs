//! A listing page: one record store plus its selection side-store

use crate::core::Record;
use crate::core::error::RecordError;
use crate::engine::{ListingLayout, RecordStore};
use crate::storage::DurableStore;
use crate::wishlist::{Wishlist, WishlistSnapshot};
use std::sync::Arc;

/// Wires a [`RecordStore`] to the [`Wishlist`] its page saves into
#[derive(Debug)]
pub struct ListingPage<T, S>
where
    T: Record,
    S: WishlistSnapshot,
{
    store: RecordStore<T>,
    wishlist: Wishlist<S>,
}

impl<T, S> ListingPage<T, S>
where
    T: Record,
    S: WishlistSnapshot + for<'a> From<&'a T>,
{
    pub fn new(store: RecordStore<T>, wishlist: Wishlist<S>) -> Self {
        Self { store, wishlist }
    }

    /// Build a page from its initial records and a durable-storage handle
    pub fn open(
        records: Vec<T>,
        layout: ListingLayout,
        durable: Arc<dyn DurableStore>,
        wishlist_key: impl Into<String>,
    ) -> crate::core::error::Result<Self> {
        let store = RecordStore::new(records, layout)?;
        Ok(Self::new(store, Wishlist::new(durable, wishlist_key)))
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore<T> {
        &mut self.store
    }

    pub fn wishlist(&self) -> &Wishlist<S> {
        &self.wishlist
    }

    /// Save or unsave the record with `id`. Returns the new membership.
    pub fn toggle_saved(&mut self, id: &str) -> Result<bool, RecordError> {
        let record = self.store.get(id).ok_or_else(|| RecordError::NotFound {
            record_type: T::record_type().to_string(),
            id: id.to_string(),
        })?;
        Ok(self.wishlist.toggle(S::from(record)))
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.wishlist.is_selected(id)
    }

    /// Split into parts
    pub fn into_parts(self) -> (RecordStore<T>, Wishlist<S>) {
        (self.store, self.wishlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SavedTalent, TalentProfile, catalog, pages};
    use crate::storage::InMemoryDurableStore;

    fn page(store: &InMemoryDurableStore) -> ListingPage<TalentProfile, SavedTalent> {
        ListingPage::open(
            catalog::talents(),
            pages::explore(),
            Arc::new(store.clone()),
            "scout_wishlist",
        )
        .unwrap()
    }

    #[test]
    fn test_toggle_saved_snapshots_record() {
        let durable = InMemoryDurableStore::new();
        let mut page = page(&durable);

        assert!(page.toggle_saved("t3").unwrap());
        assert!(page.is_saved("t3"));
        assert_eq!(page.wishlist().entries()[0].name, "Filip Horvat");

        assert!(!page.toggle_saved("t3").unwrap());
        assert!(page.wishlist().is_empty());
    }

    #[test]
    fn test_toggle_unknown_id() {
        let durable = InMemoryDurableStore::new();
        let mut page = page(&durable);
        let err = page.toggle_saved("nope").unwrap_err();
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
    }

    #[test]
    fn test_saving_does_not_touch_results() {
        let durable = InMemoryDurableStore::new();
        let mut page = page(&durable);
        let before: Vec<String> = page
            .store()
            .results()
            .records()
            .iter()
            .map(|t| t.id.clone())
            .collect();

        page.toggle_saved("t1").unwrap();

        let after: Vec<String> = page
            .store()
            .results()
            .records()
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(before, after);
    }
}
