//! Store sidebar search.

use crate::domain::Store;

/// Filter the store list by a search term: a case-insensitive
/// substring match on name or address, or an exact match against the
/// floor area's decimal form. Any one hit qualifies. An empty term
/// returns the full collection.
pub fn search_stores(stores: &[Store], term: &str) -> Vec<Store> {
    if term.is_empty() {
        return stores.to_vec();
    }

    let needle = term.to_lowercase();
    stores
        .iter()
        .filter(|store| {
            store.name.to_lowercase().contains(&needle)
                || store.address.to_lowercase().contains(&needle)
                || store.floor_area.to_string() == needle
        })
        .cloned()
        .collect()
}
