//! Store Module Tests
//!
//! Validates the in-memory collection mechanics the search engine and CRUD
//! handlers rely on.
//!
//! ## Test Scopes
//! - **Collection**: Insert/get/update round trips, deterministic scan
//!   order, reference resolution with dangling ids.
//! - **EntityStore**: The by-name lookup helpers used for uniqueness checks.

#[cfg(test)]
mod tests {
    use crate::catalog::types::{Character, EntityId, Series, User, now_ms};
    use crate::store::memory::{Collection, EntityStore};

    fn series_doc(name: &str, category: EntityId) -> Series {
        let now = now_ms();
        Series {
            id: EntityId::new(),
            name: name.to_string(),
            original_language: "Japanese".to_string(),
            genre: "Action".to_string(),
            status: "Ongoing".to_string(),
            tags: vec![],
            category,
            characters: vec![],
            cover_image: "cover.png".to_string(),
            description: "A series.".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn character_doc(name: &str, series: EntityId, category: EntityId) -> Character {
        let now = now_ms();
        Character {
            id: EntityId::new(),
            name: name.to_string(),
            gender: None,
            species: "Human".to_string(),
            role: "Protagonist".to_string(),
            tags: vec![],
            series,
            category,
            image: "image.png".to_string(),
            description: "A character.".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn user_doc(username: &str) -> User {
        let now = now_ms();
        User {
            id: EntityId::new(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            profile_pic: None,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ============================================================
    // COLLECTION TESTS
    // ============================================================

    #[tokio::test]
    async fn test_insert_get_roundtrip() {
        let collection: Collection<String> = Collection::new();
        let id = EntityId::new();

        collection.insert(id.clone(), "value".to_string()).await;

        assert_eq!(collection.get(&id).await, Some("value".to_string()));
        assert_eq!(collection.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let collection: Collection<String> = Collection::new();

        assert!(collection.get(&EntityId::new()).await.is_none());
        assert!(collection.is_empty().await);
    }

    #[tokio::test]
    async fn test_scan_preserves_insertion_order() {
        let collection: Collection<String> = Collection::new();

        for name in ["first", "second", "third", "fourth"] {
            collection.insert(EntityId::new(), name.to_string()).await;
        }

        let scanned = collection.scan().await.unwrap();
        assert_eq!(scanned, vec!["first", "second", "third", "fourth"]);
    }

    #[tokio::test]
    async fn test_scan_is_repeatable() {
        let collection: Collection<String> = Collection::new();

        for i in 0..50 {
            collection.insert(EntityId::new(), format!("doc-{}", i)).await;
        }

        let first = collection.scan().await.unwrap();
        let second = collection.scan().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_filter_matches_subset_in_order() {
        let collection: Collection<String> = Collection::new();

        for name in ["alpha", "beta", "alps", "gamma"] {
            collection.insert(EntityId::new(), name.to_string()).await;
        }

        let matched = collection
            .filter(|doc| doc.starts_with("al"))
            .await
            .unwrap();
        assert_eq!(matched, vec!["alpha", "alps"]);
    }

    #[tokio::test]
    async fn test_get_many_skips_dangling_references() {
        let collection: Collection<String> = Collection::new();
        let known = EntityId::new();
        let dangling = EntityId::new();

        collection.insert(known.clone(), "known".to_string()).await;

        let resolved = collection
            .get_many(&[dangling, known.clone()])
            .await
            .unwrap();
        assert_eq!(resolved, vec!["known"]);
    }

    #[tokio::test]
    async fn test_get_many_preserves_input_order() {
        let collection: Collection<String> = Collection::new();
        let a = EntityId::new();
        let b = EntityId::new();

        collection.insert(a.clone(), "a".to_string()).await;
        collection.insert(b.clone(), "b".to_string()).await;

        let resolved = collection.get_many(&[b, a]).await.unwrap();
        assert_eq!(resolved, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_update_mutates_in_place() {
        let collection: Collection<Vec<String>> = Collection::new();
        let id = EntityId::new();

        collection.insert(id.clone(), vec![]).await;
        let updated = collection
            .update(&id, |list| list.push("entry".to_string()))
            .await;

        assert!(updated);
        assert_eq!(collection.get(&id).await, Some(vec!["entry".to_string()]));
    }

    #[tokio::test]
    async fn test_update_missing_returns_false() {
        let collection: Collection<Vec<String>> = Collection::new();

        let updated = collection
            .update(&EntityId::new(), |list| list.push("entry".to_string()))
            .await;
        assert!(!updated);
    }

    // ============================================================
    // ENTITY STORE LOOKUP TESTS
    // ============================================================

    #[tokio::test]
    async fn test_series_by_name_is_exact() {
        let store = EntityStore::new();
        let series = series_doc("Naruto", EntityId::new());
        store.series.insert(series.id.clone(), series).await;

        assert!(store.series_by_name("Naruto").await.is_some());
        assert!(store.series_by_name("naruto").await.is_none());
        assert!(store.series_by_name("Bleach").await.is_none());
    }

    #[tokio::test]
    async fn test_user_by_username() {
        let store = EntityStore::new();
        let user = user_doc("mangafan");
        store.users.insert(user.id.clone(), user).await;

        assert!(store.user_by_username("mangafan").await.is_some());
        assert!(store.user_by_username("other").await.is_none());
    }

    #[tokio::test]
    async fn test_character_in_series_scopes_by_series() {
        let store = EntityStore::new();
        let category = EntityId::new();
        let series_a = series_doc("Series A", category.clone());
        let series_b = series_doc("Series B", category.clone());
        let character = character_doc("Sasuke", series_a.id.clone(), category);

        store.series.insert(series_a.id.clone(), series_a.clone()).await;
        store.series.insert(series_b.id.clone(), series_b.clone()).await;
        store
            .characters
            .insert(character.id.clone(), character)
            .await;

        // Same name is free in a different series.
        assert!(
            store
                .character_in_series(&series_a.id, "Sasuke")
                .await
                .is_some()
        );
        assert!(
            store
                .character_in_series(&series_b.id, "Sasuke")
                .await
                .is_none()
        );
    }
}
