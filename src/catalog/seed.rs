use super::types::{Category, CategoryName};
use crate::store::memory::EntityStore;

/// Inserts the fixed category set into an empty store. A store that already
/// holds categories is left untouched.
pub async fn seed_categories(store: &EntityStore) {
    if !store.categories.is_empty().await {
        tracing::debug!("Categories already present, skipping seed");
        return;
    }

    for name in CategoryName::ALL {
        let category = Category::new(name);
        tracing::debug!("Seeding category {}", name.display());
        store.categories.insert(category.id.clone(), category).await;
    }
}
