use crate::catalog::types::{Category, Character, EntityId, Series, User};

use anyhow::Result;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

struct Entry<T> {
    seq: u64,
    doc: T,
}

/// One concurrent collection of documents keyed by identity. Scans return
/// documents in insertion order so repeated reads over an unchanged
/// collection are identical.
pub struct Collection<T> {
    docs: DashMap<EntityId, Entry<T>>,
    next_seq: AtomicU64,
}

impl<T> Collection<T>
where
    T: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            docs: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub async fn insert(&self, id: EntityId, doc: T) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.docs.insert(id, Entry { seq, doc });
    }

    pub async fn get(&self, id: &EntityId) -> Option<T> {
        self.docs.get(id).map(|entry| entry.value().doc.clone())
    }

    /// Resolves a list of references, preserving input order. Dangling
    /// references are skipped, not an error.
    pub async fn get_many(&self, ids: &[EntityId]) -> Result<Vec<T>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.docs.get(id).map(|entry| entry.value().doc.clone()))
            .collect())
    }

    pub async fn find<P>(&self, pred: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.docs
            .iter()
            .find(|entry| pred(&entry.value().doc))
            .map(|entry| entry.value().doc.clone())
    }

    pub async fn filter<P>(&self, pred: P) -> Result<Vec<T>>
    where
        P: Fn(&T) -> bool,
    {
        let mut matched: Vec<(u64, T)> = self
            .docs
            .iter()
            .filter(|entry| pred(&entry.value().doc))
            .map(|entry| (entry.value().seq, entry.value().doc.clone()))
            .collect();
        matched.sort_by_key(|(seq, _)| *seq);
        Ok(matched.into_iter().map(|(_, doc)| doc).collect())
    }

    pub async fn scan(&self) -> Result<Vec<T>> {
        self.filter(|_| true).await
    }

    pub async fn update<F>(&self, id: &EntityId, apply: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.docs.get_mut(id) {
            Some(mut entry) => {
                apply(&mut entry.value_mut().doc);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.docs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// The four logical collections behind the wiki. Handlers receive this via
/// an axum `Extension` layer; tests construct their own instance.
pub struct EntityStore {
    pub series: Collection<Series>,
    pub characters: Collection<Character>,
    pub categories: Collection<Category>,
    pub users: Collection<User>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            series: Collection::new(),
            characters: Collection::new(),
            categories: Collection::new(),
            users: Collection::new(),
        }
    }

    pub async fn series_by_name(&self, name: &str) -> Option<Series> {
        self.series.find(|series| series.name == name).await
    }

    pub async fn user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|user| user.username == username).await
    }

    pub async fn character_in_series(&self, series: &EntityId, name: &str) -> Option<Character> {
        self.characters
            .find(|character| &character.series == series && character.name == name)
            .await
    }
}
