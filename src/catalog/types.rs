//! Catalog Data Types
//!
//! Defines the four stored entity types and the minimal card projections
//! embedded wherever a cross-reference is resolved for display.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

/// The fixed set of media categories. Seeded once at startup; series and
/// characters reference exactly one of them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryName {
    Anime,
    Manga,
    Movies,
    #[serde(rename = "TV Shows")]
    TvShows,
    Games,
    Comics,
    Original,
    Books,
    #[serde(rename = "Western Animation")]
    WesternAnimation,
}

impl CategoryName {
    pub const ALL: [CategoryName; 9] = [
        CategoryName::Anime,
        CategoryName::Manga,
        CategoryName::Movies,
        CategoryName::TvShows,
        CategoryName::Games,
        CategoryName::Comics,
        CategoryName::Original,
        CategoryName::Books,
        CategoryName::WesternAnimation,
    ];

    pub fn display(&self) -> &'static str {
        match self {
            CategoryName::Anime => "Anime",
            CategoryName::Manga => "Manga",
            CategoryName::Movies => "Movies",
            CategoryName::TvShows => "TV Shows",
            CategoryName::Games => "Games",
            CategoryName::Comics => "Comics",
            CategoryName::Original => "Original",
            CategoryName::Books => "Books",
            CategoryName::WesternAnimation => "Western Animation",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CategoryName::Anime => "anime",
            CategoryName::Manga => "manga",
            CategoryName::Movies => "movies",
            CategoryName::TvShows => "tv-shows",
            CategoryName::Games => "games",
            CategoryName::Comics => "comics",
            CategoryName::Original => "original",
            CategoryName::Books => "books",
            CategoryName::WesternAnimation => "western-animation",
        }
    }
}

/// A series entry. `characters` is kept bidirectionally consistent with
/// `Character::series` by the create handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub id: EntityId,
    pub name: String,
    pub original_language: String,
    pub genre: String,
    pub status: String,
    pub tags: Vec<String>,
    pub category: EntityId,
    pub characters: Vec<EntityId>,
    pub cover_image: String,
    pub description: String,
    pub created_at: u64,
    pub updated_at: u64,
}

/// A character entry. Always belongs to exactly one series and one category;
/// the category is inherited from the owning series at create time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    pub gender: Option<String>,
    pub species: String,
    pub role: String,
    pub tags: Vec<String>,
    pub series: EntityId,
    pub category: EntityId,
    pub image: String,
    pub description: String,
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: CategoryName,
    pub slug: String,
    pub icon: Option<String>,
    pub series: Vec<EntityId>,
}

impl Category {
    pub fn new(name: CategoryName) -> Self {
        Self {
            id: EntityId::new(),
            name,
            slug: name.slug().to_string(),
            icon: None,
            series: Vec::new(),
        }
    }
}

/// A registered contributor. Authentication fields live outside this
/// service; only the public profile is stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub profile_pic: Option<String>,
    pub bio: Option<String>,
    pub created_at: u64,
    pub updated_at: u64,
}

// Card projections: identity plus the handful of fields used for card
// rendering. Embedded in place of raw ids when a reference is resolved.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesCard {
    pub id: EntityId,
    pub name: String,
    pub cover_image: String,
}

impl From<&Series> for SeriesCard {
    fn from(series: &Series) -> Self {
        Self {
            id: series.id.clone(),
            name: series.name.clone(),
            cover_image: series.cover_image.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterCard {
    pub id: EntityId,
    pub name: String,
    pub gender: Option<String>,
    pub image: String,
    pub role: String,
}

impl From<&Character> for CharacterCard {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id.clone(),
            name: character.name.clone(),
            gender: character.gender.clone(),
            image: character.image.clone(),
            role: character.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCard {
    pub id: EntityId,
    pub name: CategoryName,
    pub slug: String,
    pub icon: Option<String>,
}

impl From<&Category> for CategoryCard {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name,
            slug: category.slug.clone(),
            icon: category.icon.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCard {
    pub id: EntityId,
    pub username: String,
    pub profile_pic: Option<String>,
    pub bio: Option<String>,
}

impl From<&User> for UserCard {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            profile_pic: user.profile_pic.clone(),
            bio: user.bio.clone(),
        }
    }
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
