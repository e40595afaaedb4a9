use crate::cli::{PlaceCategory, Recommend};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// What a review is about: a catalog place, or a place the reviewer is
/// adding inline with the review.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReviewTarget {
    ExistingPlace { id: u64 },
    NewPlace { place: PlaceDraft },
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PlaceDraft {
    pub name: String,
    pub category: Option<PlaceCategory>,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Per-category accessibility ratings, 0-5 stars. 0 means "not rated" and
/// carries no weight anywhere.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AccessibilityRatings {
    #[serde(default)]
    pub mobility: u8,
    #[serde(default)]
    pub vision: u8,
    #[serde(default)]
    pub hearing: u8,
    #[serde(default)]
    pub cognitive: u8,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReviewDraft {
    pub target: ReviewTarget,
    pub rating: u8,
    #[serde(default)]
    pub accessibility: AccessibilityRatings,
    #[serde(default)]
    pub features: Vec<String>,
    pub text: String,
    #[serde(default)]
    pub recommend: Option<Recommend>,
    #[serde(default)]
    pub visit_date: Option<String>,
}

/// An accepted review. Immutable once stored; the collection is append-only.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoredReview {
    pub id: String,
    pub submitted_at_ms: u64,
    #[serde(flatten)]
    pub draft: ReviewDraft,
}
