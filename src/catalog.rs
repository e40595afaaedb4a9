use crate::cli::PlaceCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    pub name: String,
    pub places: Vec<Place>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Place {
    pub id: u64,
    pub name: String,
    pub category: PlaceCategory,
    pub address: String,
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    pub accessibility_score: u8,
    #[serde(default)]
    pub features: Vec<String>,
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_details: Option<AccessibilityDetails>,
}

/// Per-category accessibility percentages shown on the detail view.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AccessibilityDetails {
    pub mobility: u8,
    pub vision: u8,
    pub hearing: u8,
    pub cognitive: u8,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("place not found: {0}")]
    PlaceNotFound(String),
    #[error("duplicate place id: {0}")]
    DuplicatePlace(u64),
    #[error("score out of range for place {0}")]
    ScoreOutOfRange(String),
}

pub fn resolve_catalog_file(source: &str) -> PathBuf {
    let p = Path::new(source);
    if p.is_dir() {
        p.join(".accesschain").join("catalog.json")
    } else {
        p.to_path_buf()
    }
}

pub fn load_catalog(source: &str) -> anyhow::Result<Catalog> {
    let file = resolve_catalog_file(source);
    let raw = std::fs::read_to_string(file)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn find_place<'a>(catalog: &'a Catalog, key: &str) -> anyhow::Result<&'a Place> {
    if let Ok(id) = key.parse::<u64>() {
        if let Some(p) = catalog.places.iter().find(|p| p.id == id) {
            return Ok(p);
        }
    }
    catalog
        .places
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(key))
        .ok_or_else(|| CatalogError::PlaceNotFound(key.to_string()).into())
}

pub fn find_place_by_id(catalog: &Catalog, id: u64) -> anyhow::Result<&Place> {
    catalog
        .places
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::PlaceNotFound(id.to_string()).into())
}

pub fn validate(catalog: &Catalog) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for p in &catalog.places {
        if !seen.insert(p.id) {
            return Err(CatalogError::DuplicatePlace(p.id).into());
        }
        if p.accessibility_score > 100 || !(0.0..=5.0).contains(&p.rating) {
            return Err(CatalogError::ScoreOutOfRange(p.name.clone()).into());
        }
    }
    Ok(())
}

/// Built-in sample catalog, used when no catalog file exists yet.
pub fn seed() -> Catalog {
    Catalog {
        name: "accesschain".to_string(),
        places: vec![
            Place {
                id: 1,
                name: "Central Library".to_string(),
                category: PlaceCategory::Library,
                address: "123 Main St, Downtown".to_string(),
                rating: 4.5,
                review_count: 23,
                accessibility_score: 85,
                features: vec![
                    "Wheelchair Access".to_string(),
                    "Audio Books".to_string(),
                    "Large Print".to_string(),
                    "Accessible Parking".to_string(),
                ],
                distance: 0.5,
                accessibility_details: Some(AccessibilityDetails {
                    mobility: 90,
                    vision: 85,
                    hearing: 80,
                    cognitive: 85,
                }),
            },
            Place {
                id: 2,
                name: "Sunrise Mall".to_string(),
                category: PlaceCategory::ShoppingCenter,
                address: "456 Commerce Ave".to_string(),
                rating: 4.2,
                review_count: 45,
                accessibility_score: 78,
                features: vec![
                    "Wheelchair Access".to_string(),
                    "Accessible Parking".to_string(),
                    "Elevators".to_string(),
                    "Wide Aisles".to_string(),
                ],
                distance: 1.2,
                accessibility_details: None,
            },
            Place {
                id: 3,
                name: "Bean There Cafe".to_string(),
                category: PlaceCategory::Restaurant,
                address: "789 Coffee Lane".to_string(),
                rating: 4.7,
                review_count: 18,
                accessibility_score: 92,
                features: vec![
                    "Wheelchair Access".to_string(),
                    "Braille Menu".to_string(),
                    "Wide Aisles".to_string(),
                    "Accessible Restroom".to_string(),
                ],
                distance: 0.8,
                accessibility_details: None,
            },
            Place {
                id: 4,
                name: "City Park Recreation Center".to_string(),
                category: PlaceCategory::Recreation,
                address: "321 Park Avenue".to_string(),
                rating: 4.3,
                review_count: 31,
                accessibility_score: 88,
                features: vec![
                    "Wheelchair Access".to_string(),
                    "Accessible Playground".to_string(),
                    "Paved Paths".to_string(),
                    "Audio Announcements".to_string(),
                ],
                distance: 2.1,
                accessibility_details: None,
            },
            Place {
                id: 5,
                name: "Metro Hospital".to_string(),
                category: PlaceCategory::Healthcare,
                address: "555 Health Drive".to_string(),
                rating: 4.6,
                review_count: 67,
                accessibility_score: 95,
                features: vec![
                    "Wheelchair Access".to_string(),
                    "Sign Language Interpreters".to_string(),
                    "Accessible Parking".to_string(),
                    "Braille Signage".to_string(),
                ],
                distance: 1.8,
                accessibility_details: None,
            },
            Place {
                id: 6,
                name: "Downtown Grocery".to_string(),
                category: PlaceCategory::GroceryStore,
                address: "147 Market Street".to_string(),
                rating: 3.9,
                review_count: 28,
                accessibility_score: 72,
                features: vec![
                    "Wheelchair Access".to_string(),
                    "Wide Aisles".to_string(),
                    "Accessible Checkout".to_string(),
                ],
                distance: 0.3,
                accessibility_details: None,
            },
        ],
    }
}
