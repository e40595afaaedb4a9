use crate::catalog::Place;
use crate::cli::{PlaceCategory, SortKey};

impl SortKey {
    /// Unknown sort-key text falls back to the default ordering rather than
    /// erroring; a read-only query has no user-facing failure mode.
    pub fn parse_or_default(raw: &str) -> SortKey {
        match raw.trim().to_ascii_lowercase().as_str() {
            "accessibility" => SortKey::Accessibility,
            "distance" => SortKey::Distance,
            "reviews" => SortKey::Reviews,
            _ => SortKey::Rating,
        }
    }
}

/// Filters and orders the catalog for display. Retains a place iff the
/// search text is a case-insensitive substring of its name, address, or
/// category label, and the category filter matches. The sort is stable, so
/// equal keys keep their catalog order.
pub fn query_places(
    places: &[Place],
    search: &str,
    category: Option<PlaceCategory>,
    sort: SortKey,
) -> Vec<Place> {
    let needle = search.trim().to_ascii_lowercase();
    let mut out: Vec<Place> = places
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_ascii_lowercase().contains(&needle)
                || p.address.to_ascii_lowercase().contains(&needle)
                || p.category.label().to_ascii_lowercase().contains(&needle)
        })
        .filter(|p| category.map(|c| p.category == c).unwrap_or(true))
        .cloned()
        .collect();

    match sort {
        SortKey::Rating => out.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Accessibility => {
            out.sort_by(|a, b| b.accessibility_score.cmp(&a.accessibility_score))
        }
        SortKey::Distance => out.sort_by(|a, b| a.distance.total_cmp(&b.distance)),
        SortKey::Reviews => out.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
    }
    out
}
