use super::tokenizer::TermMatcher;
use crate::catalog::types::{Category, Character, Series, User};
use crate::store::memory::EntityStore;

use anyhow::Result;

// Each matcher returns the documents where at least one term matches at
// least one designated field. Matchers never mutate and have no ordering
// dependency on each other, so the engine runs them concurrently.

pub async fn match_series(terms: &[TermMatcher], store: &EntityStore) -> Result<Vec<Series>> {
    store
        .series
        .filter(|series| {
            terms
                .iter()
                .any(|term| term.is_match(&series.name) || term.matches_any(&series.tags))
        })
        .await
}

pub async fn match_characters(terms: &[TermMatcher], store: &EntityStore) -> Result<Vec<Character>> {
    store
        .characters
        .filter(|character| {
            terms
                .iter()
                .any(|term| term.is_match(&character.name) || term.matches_any(&character.tags))
        })
        .await
}

pub async fn match_categories(terms: &[TermMatcher], store: &EntityStore) -> Result<Vec<Category>> {
    store
        .categories
        .filter(|category| {
            terms
                .iter()
                .any(|term| term.is_match(category.name.display()))
        })
        .await
}

pub async fn match_users(terms: &[TermMatcher], store: &EntityStore) -> Result<Vec<User>> {
    store
        .users
        .filter(|user| terms.iter().any(|term| term.is_match(&user.username)))
        .await
}
