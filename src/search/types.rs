use crate::catalog::types::{CategoryCard, UserCard};
use crate::catalog::view::{CharacterDetail, SeriesDetail};

use serde::{Deserialize, Serialize};

/// The four result buckets. Every bucket is always present, empty when
/// nothing matched, so callers never special-case missing keys.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub series: Vec<SeriesDetail>,
    pub characters: Vec<CharacterDetail>,
    pub categories: Vec<CategoryCard>,
    pub users: Vec<UserCard>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}
