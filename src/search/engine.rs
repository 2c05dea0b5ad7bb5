use super::error::SearchError;
use super::expand::{characters_via_categories, characters_via_series};
use super::matchers::{match_categories, match_characters, match_series, match_users};
use super::tokenizer::tokenize_query;
use super::types::SearchResponse;
use crate::catalog::types::{Category, CategoryCard, Character, EntityId, Series, User, UserCard};
use crate::catalog::view::{resolve_character, resolve_series};
use crate::store::memory::EntityStore;

use std::collections::HashSet;

fn store_failure(stage: &'static str) -> impl FnOnce(anyhow::Error) -> SearchError {
    move |cause| SearchError::Store { stage, cause }
}

/// Resolves a free-text query against all four collections. Stateless and
/// read-only; every call is a fresh scan. Either every bucket is computed
/// or the whole call fails.
pub async fn search(query: &str, store: &EntityStore) -> Result<SearchResponse, SearchError> {
    let terms = tokenize_query(query)?;

    // The expander depends on the series and category matches only, so
    // those two matchers are joined first and the character/user matchers
    // run alongside the whole chain.
    let relational = async {
        let (series, categories) = tokio::join!(
            match_series(&terms, store),
            match_categories(&terms, store),
        );
        let series = series.map_err(store_failure("series matcher"))?;
        let categories = categories.map_err(store_failure("category matcher"))?;

        let (via_series, via_categories) = tokio::join!(
            characters_via_series(&series, store),
            characters_via_categories(&categories, store),
        );
        let via_series = via_series.map_err(store_failure("series expansion"))?;
        let via_categories = via_categories.map_err(store_failure("category expansion"))?;

        Ok::<_, SearchError>((series, categories, via_series, via_categories))
    };

    let (relational, direct_characters, users) = tokio::join!(
        relational,
        match_characters(&terms, store),
        match_users(&terms, store),
    );

    let (series, categories, via_series, via_categories) = relational?;
    let direct_characters = direct_characters.map_err(store_failure("character matcher"))?;
    let users = users.map_err(store_failure("user matcher"))?;

    // Characters arrive over three discovery paths; direct matches win the
    // slot when the same identity shows up again. The other buckets have a
    // single path today but get the same merge.
    let characters = merge_unique(
        vec![direct_characters, via_series, via_categories],
        |character| &character.id,
    );
    let series = merge_unique(vec![series], |series| &series.id);
    let categories = merge_unique(vec![categories], |category| &category.id);
    let users = merge_unique(vec![users], |user| &user.id);

    assemble(store, series, characters, categories, users).await
}

/// Merges result sets from multiple discovery paths into one set keyed by
/// identity, keeping the first instance and the overall insertion order.
pub fn merge_unique<T, F>(paths: Vec<Vec<T>>, id_of: F) -> Vec<T>
where
    F: Fn(&T) -> &EntityId,
{
    let mut seen: HashSet<EntityId> = HashSet::new();
    let mut merged = Vec::new();
    for doc in paths.into_iter().flatten() {
        if seen.insert(id_of(&doc).clone()) {
            merged.push(doc);
        }
    }
    merged
}

async fn assemble(
    store: &EntityStore,
    series: Vec<Series>,
    characters: Vec<Character>,
    categories: Vec<Category>,
    users: Vec<User>,
) -> Result<SearchResponse, SearchError> {
    let mut series_bucket = Vec::with_capacity(series.len());
    for doc in series {
        let detail = resolve_series(store, doc)
            .await
            .map_err(store_failure("series resolution"))?;
        series_bucket.push(detail);
    }

    let mut character_bucket = Vec::with_capacity(characters.len());
    for doc in characters {
        character_bucket.push(resolve_character(store, doc).await);
    }

    Ok(SearchResponse {
        series: series_bucket,
        characters: character_bucket,
        categories: categories.iter().map(CategoryCard::from).collect(),
        users: users.iter().map(UserCard::from).collect(),
    })
}
