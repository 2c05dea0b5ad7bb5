use crate::catalog::types::{Category, Character, EntityId, Series};
use crate::store::memory::EntityStore;

use anyhow::Result;

// Relational expansion: characters belonging to a matched series or category
// are part of the result even when their own name/tags never matched.
// Expansion stops at the defined hops and never feeds the series bucket.

/// Union of the character lists of every directly matched series.
pub async fn characters_via_series(
    matched: &[Series],
    store: &EntityStore,
) -> Result<Vec<Character>> {
    let ids: Vec<EntityId> = matched
        .iter()
        .flat_map(|series| series.characters.iter().cloned())
        .collect();

    store.characters.get_many(&ids).await
}

/// Two-hop traversal: each matched category's series list, then each of
/// those series' character lists.
pub async fn characters_via_categories(
    matched: &[Category],
    store: &EntityStore,
) -> Result<Vec<Character>> {
    let series_ids: Vec<EntityId> = matched
        .iter()
        .flat_map(|category| category.series.iter().cloned())
        .collect();

    let series = store.series.get_many(&series_ids).await?;

    let character_ids: Vec<EntityId> = series
        .iter()
        .flat_map(|series| series.characters.iter().cloned())
        .collect();

    store.characters.get_many(&character_ids).await
}
