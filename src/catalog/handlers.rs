use super::types::{Character, EntityId, Series, User, UserCard, now_ms};
use super::view::{
    CategoryDetail, CharacterDetail, SeriesDetail, resolve_category, resolve_character,
    resolve_series,
};
use crate::store::memory::EntityStore;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct CreateSeriesRequest {
    pub name: String,
    pub original_language: String,
    pub genre: String,
    pub status: String,
    pub category: EntityId,
    #[serde(default)]
    pub tags: Vec<String>,
    pub cover_image: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct CreateSeriesResponse {
    pub message: String,
    pub series: Option<SeriesDetail>,
}

#[derive(Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub gender: Option<String>,
    pub species: String,
    pub role: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub series: EntityId,
    pub image: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct CreateCharacterResponse {
    pub message: String,
    pub character: Option<CharacterDetail>,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub profile_pic: Option<String>,
    pub bio: Option<String>,
}

#[derive(Serialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: Option<UserCard>,
}

#[derive(Serialize)]
pub struct SeriesListResponse {
    pub series: Vec<SeriesDetail>,
}

#[derive(Serialize)]
pub struct SeriesResponse {
    pub series: Option<SeriesDetail>,
}

#[derive(Serialize)]
pub struct CharacterListResponse {
    pub characters: Vec<CharacterDetail>,
}

#[derive(Serialize)]
pub struct CharacterResponse {
    pub character: Option<CharacterDetail>,
}

#[derive(Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryDetail>,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub user: Option<UserCard>,
}

// Tags are stored lowercased with duplicates and blanks dropped, so tag
// matching in search never depends on the submitter's casing.
pub(crate) fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && seen.insert(tag.clone()) {
            cleaned.push(tag);
        }
    }
    cleaned
}

pub async fn handle_create_series(
    Extension(store): Extension<Arc<EntityStore>>,
    Json(req): Json<CreateSeriesRequest>,
) -> (StatusCode, Json<CreateSeriesResponse>) {
    let name = req.name.trim().to_string();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(CreateSeriesResponse {
                message: "Series name is required.".to_string(),
                series: None,
            }),
        );
    }

    if store.series_by_name(&name).await.is_some() {
        return (
            StatusCode::BAD_REQUEST,
            Json(CreateSeriesResponse {
                message: "Series already exists in this database.".to_string(),
                series: None,
            }),
        );
    }

    let Some(category) = store.categories.get(&req.category).await else {
        return (
            StatusCode::BAD_REQUEST,
            Json(CreateSeriesResponse {
                message: "Unknown category.".to_string(),
                series: None,
            }),
        );
    };

    let now = now_ms();
    let series = Series {
        id: EntityId::new(),
        name,
        original_language: req.original_language,
        genre: req.genre,
        status: req.status,
        tags: normalize_tags(req.tags),
        category: category.id.clone(),
        characters: Vec::new(),
        cover_image: req.cover_image,
        description: req.description,
        created_at: now,
        updated_at: now,
    };

    store.series.insert(series.id.clone(), series.clone()).await;

    let series_id = series.id.clone();
    store
        .categories
        .update(&category.id, |cat| cat.series.push(series_id))
        .await;

    tracing::info!("Created series {:?} in {}", series.id, category.slug);

    match resolve_series(&store, series).await {
        Ok(detail) => (
            StatusCode::CREATED,
            Json(CreateSeriesResponse {
                message: "Series added successfully.".to_string(),
                series: Some(detail),
            }),
        ),
        Err(e) => {
            tracing::error!("Failed to resolve created series: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CreateSeriesResponse {
                    message: "Server error. Please try again.".to_string(),
                    series: None,
                }),
            )
        }
    }
}

pub async fn handle_create_character(
    Extension(store): Extension<Arc<EntityStore>>,
    Json(req): Json<CreateCharacterRequest>,
) -> (StatusCode, Json<CreateCharacterResponse>) {
    let name = req.name.trim().to_string();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(CreateCharacterResponse {
                message: "Character name is required.".to_string(),
                character: None,
            }),
        );
    }

    let Some(series) = store.series.get(&req.series).await else {
        return (
            StatusCode::BAD_REQUEST,
            Json(CreateCharacterResponse {
                message: "Unknown series.".to_string(),
                character: None,
            }),
        );
    };

    if store.character_in_series(&series.id, &name).await.is_some() {
        return (
            StatusCode::BAD_REQUEST,
            Json(CreateCharacterResponse {
                message: "Character already exists in this series.".to_string(),
                character: None,
            }),
        );
    }

    let now = now_ms();
    let character = Character {
        id: EntityId::new(),
        name,
        gender: req.gender,
        species: req.species,
        role: req.role,
        tags: normalize_tags(req.tags),
        series: series.id.clone(),
        // a character always shares its series' category
        category: series.category.clone(),
        image: req.image,
        description: req.description,
        created_at: now,
        updated_at: now,
    };

    store
        .characters
        .insert(character.id.clone(), character.clone())
        .await;

    let character_id = character.id.clone();
    store
        .series
        .update(&series.id, |s| s.characters.push(character_id))
        .await;

    tracing::info!("Created character {:?} in series {:?}", character.id, series.id);

    let detail = resolve_character(&store, character).await;
    (
        StatusCode::CREATED,
        Json(CreateCharacterResponse {
            message: "Character added successfully.".to_string(),
            character: Some(detail),
        }),
    )
}

pub async fn handle_create_user(
    Extension(store): Extension<Arc<EntityStore>>,
    Json(req): Json<CreateUserRequest>,
) -> (StatusCode, Json<CreateUserResponse>) {
    let username = req.username.trim().to_string();
    if username.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(CreateUserResponse {
                message: "Username is required.".to_string(),
                user: None,
            }),
        );
    }

    if store.user_by_username(&username).await.is_some() {
        return (
            StatusCode::BAD_REQUEST,
            Json(CreateUserResponse {
                message: "Username is already taken.".to_string(),
                user: None,
            }),
        );
    }

    let now = now_ms();
    let user = User {
        id: EntityId::new(),
        username,
        email: req.email,
        profile_pic: req.profile_pic,
        bio: req.bio,
        created_at: now,
        updated_at: now,
    };

    store.users.insert(user.id.clone(), user.clone()).await;
    tracing::info!("Registered user {:?}", user.id);

    (
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User registered successfully.".to_string(),
            user: Some(UserCard::from(&user)),
        }),
    )
}

pub async fn handle_list_series(
    Extension(store): Extension<Arc<EntityStore>>,
) -> (StatusCode, Json<SeriesListResponse>) {
    let all = match store.series.scan().await {
        Ok(all) => all,
        Err(e) => {
            tracing::error!("Failed to list series: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SeriesListResponse { series: Vec::new() }),
            );
        }
    };

    let mut series = Vec::with_capacity(all.len());
    for doc in all {
        match resolve_series(&store, doc).await {
            Ok(detail) => series.push(detail),
            Err(e) => {
                tracing::error!("Failed to resolve series: {:?}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(SeriesListResponse { series: Vec::new() }),
                );
            }
        }
    }

    (StatusCode::OK, Json(SeriesListResponse { series }))
}

pub async fn handle_get_series(
    Extension(store): Extension<Arc<EntityStore>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<SeriesResponse>) {
    match store.series.get(&EntityId(id)).await {
        Some(doc) => match resolve_series(&store, doc).await {
            Ok(detail) => (
                StatusCode::OK,
                Json(SeriesResponse {
                    series: Some(detail),
                }),
            ),
            Err(e) => {
                tracing::error!("Failed to resolve series: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(SeriesResponse { series: None }),
                )
            }
        },
        None => (StatusCode::NOT_FOUND, Json(SeriesResponse { series: None })),
    }
}

pub async fn handle_list_characters(
    Extension(store): Extension<Arc<EntityStore>>,
) -> (StatusCode, Json<CharacterListResponse>) {
    let all = match store.characters.scan().await {
        Ok(all) => all,
        Err(e) => {
            tracing::error!("Failed to list characters: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CharacterListResponse {
                    characters: Vec::new(),
                }),
            );
        }
    };

    let mut characters = Vec::with_capacity(all.len());
    for doc in all {
        characters.push(resolve_character(&store, doc).await);
    }

    (StatusCode::OK, Json(CharacterListResponse { characters }))
}

pub async fn handle_get_character(
    Extension(store): Extension<Arc<EntityStore>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<CharacterResponse>) {
    match store.characters.get(&EntityId(id)).await {
        Some(doc) => {
            let detail = resolve_character(&store, doc).await;
            (
                StatusCode::OK,
                Json(CharacterResponse {
                    character: Some(detail),
                }),
            )
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(CharacterResponse { character: None }),
        ),
    }
}

pub async fn handle_list_categories(
    Extension(store): Extension<Arc<EntityStore>>,
) -> (StatusCode, Json<CategoryListResponse>) {
    let all = match store.categories.scan().await {
        Ok(all) => all,
        Err(e) => {
            tracing::error!("Failed to list categories: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CategoryListResponse {
                    categories: Vec::new(),
                }),
            );
        }
    };

    let mut categories = Vec::with_capacity(all.len());
    for doc in all {
        match resolve_category(&store, doc).await {
            Ok(detail) => categories.push(detail),
            Err(e) => {
                tracing::error!("Failed to resolve category: {:?}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(CategoryListResponse {
                        categories: Vec::new(),
                    }),
                );
            }
        }
    }

    (StatusCode::OK, Json(CategoryListResponse { categories }))
}

pub async fn handle_get_user(
    Extension(store): Extension<Arc<EntityStore>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<UserResponse>) {
    match store.users.get(&EntityId(id)).await {
        Some(user) => (
            StatusCode::OK,
            Json(UserResponse {
                user: Some(UserCard::from(&user)),
            }),
        ),
        None => (StatusCode::NOT_FOUND, Json(UserResponse { user: None })),
    }
}
