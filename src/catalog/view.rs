//! Detail projections returned by read endpoints and by search. A detail is
//! the stored document with its references resolved to display cards.

use super::types::{
    Category, CategoryCard, CategoryName, Character, CharacterCard, EntityId, Series, SeriesCard,
};
use crate::store::memory::EntityStore;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesDetail {
    pub id: EntityId,
    pub name: String,
    pub original_language: String,
    pub genre: String,
    pub status: String,
    pub tags: Vec<String>,
    pub category: Option<CategoryCard>,
    pub characters: Vec<CharacterCard>,
    pub cover_image: String,
    pub description: String,
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub id: EntityId,
    pub name: String,
    pub gender: Option<String>,
    pub species: String,
    pub role: String,
    pub tags: Vec<String>,
    pub series: Option<SeriesCard>,
    pub category: Option<CategoryCard>,
    pub image: String,
    pub description: String,
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: EntityId,
    pub name: CategoryName,
    pub slug: String,
    pub icon: Option<String>,
    pub series: Vec<SeriesCard>,
}

pub async fn resolve_series(store: &EntityStore, series: Series) -> Result<SeriesDetail> {
    let category = store.categories.get(&series.category).await;
    let characters = store.characters.get_many(&series.characters).await?;

    Ok(SeriesDetail {
        id: series.id,
        name: series.name,
        original_language: series.original_language,
        genre: series.genre,
        status: series.status,
        tags: series.tags,
        category: category.as_ref().map(CategoryCard::from),
        characters: characters.iter().map(CharacterCard::from).collect(),
        cover_image: series.cover_image,
        description: series.description,
        created_at: series.created_at,
        updated_at: series.updated_at,
    })
}

pub async fn resolve_character(store: &EntityStore, character: Character) -> CharacterDetail {
    let series = store.series.get(&character.series).await;
    let category = store.categories.get(&character.category).await;

    CharacterDetail {
        id: character.id,
        name: character.name,
        gender: character.gender,
        species: character.species,
        role: character.role,
        tags: character.tags,
        series: series.as_ref().map(SeriesCard::from),
        category: category.as_ref().map(CategoryCard::from),
        image: character.image,
        description: character.description,
        created_at: character.created_at,
        updated_at: character.updated_at,
    }
}

pub async fn resolve_category(store: &EntityStore, category: Category) -> Result<CategoryDetail> {
    let series = store.series.get_many(&category.series).await?;

    Ok(CategoryDetail {
        id: category.id,
        name: category.name,
        slug: category.slug,
        icon: category.icon,
        series: series.iter().map(SeriesCard::from).collect(),
    })
}
