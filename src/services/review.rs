use crate::domain::models::{ReviewDraft, ReviewTarget, StoredReview};
use serde::Serialize;

/// The fixed set of accessibility features a review may select from.
pub const FEATURE_CATALOG: [&str; 15] = [
    "Wheelchair Access",
    "Accessible Parking",
    "Elevator Access",
    "Wide Aisles",
    "Accessible Restroom",
    "Braille Signage",
    "Audio Announcements",
    "Sign Language Services",
    "Large Print Materials",
    "Good Lighting",
    "Clear Pathways",
    "Accessible Seating",
    "Automatic Doors",
    "Ramp Access",
    "Accessible Checkout",
];

#[derive(Debug, Clone, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub reason: String,
}

#[derive(thiserror::Error, Debug)]
#[error("invalid review: {}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{} ({})", i.field, i.reason))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks every rule before anything is accepted; failures collect into a
/// single error so the caller can re-prompt for all bad fields at once.
pub fn validate_draft(draft: &ReviewDraft) -> Result<(), ValidationError> {
    let mut issues = Vec::new();
    let mut issue = |field: &str, reason: &str| {
        issues.push(FieldIssue {
            field: field.to_string(),
            reason: reason.to_string(),
        });
    };

    if !(1..=5).contains(&draft.rating) {
        issue("rating", "overall rating must be between 1 and 5 stars");
    }
    if draft.text.trim().is_empty() {
        issue("text", "review text must not be empty");
    }

    if let ReviewTarget::NewPlace { place } = &draft.target {
        if place.name.trim().is_empty() {
            issue("name", "new place name is required");
        }
        if place.category.is_none() {
            issue("place_type", "new place type is required");
        }
        if place.address.trim().is_empty() {
            issue("address", "new place address is required");
        }
    }

    let a = &draft.accessibility;
    for (field, value) in [
        ("mobility", a.mobility),
        ("vision", a.vision),
        ("hearing", a.hearing),
        ("cognitive", a.cognitive),
    ] {
        if value > 5 {
            issue(field, "accessibility rating must be between 0 and 5");
        }
    }

    for f in &draft.features {
        if !FEATURE_CATALOG.contains(&f.as_str()) {
            issues.push(FieldIssue {
                field: "features".to_string(),
                reason: format!("unknown feature: {}", f),
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}

/// Validates the draft and, on acceptance, stamps it with a fresh id and
/// submission time. `existing` is only read; the caller appends the returned
/// review to the persisted collection.
pub fn submit_review(
    draft: ReviewDraft,
    existing: &[StoredReview],
) -> Result<StoredReview, ValidationError> {
    validate_draft(&draft)?;
    let submitted_at_ms = unix_millis();
    Ok(StoredReview {
        id: next_review_id(existing, submitted_at_ms),
        submitted_at_ms,
        draft,
    })
}

/// Monotonic sequence over the existing collection plus a timestamp
/// component, so ids stay disjoint even across interleaved writers.
fn next_review_id(existing: &[StoredReview], now_ms: u64) -> String {
    let max_seq = existing
        .iter()
        .filter_map(|r| {
            r.id
                .split('-')
                .next()?
                .strip_prefix('r')?
                .parse::<u64>()
                .ok()
        })
        .max()
        .unwrap_or(0);
    format!("r{:04}-{:x}", max_seq + 1, now_ms)
}

fn unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{next_review_id, submit_review, validate_draft};
    use crate::cli::PlaceCategory;
    use crate::domain::models::{AccessibilityRatings, PlaceDraft, ReviewDraft, ReviewTarget};

    fn draft(rating: u8, text: &str) -> ReviewDraft {
        ReviewDraft {
            target: ReviewTarget::ExistingPlace { id: 1 },
            rating,
            accessibility: AccessibilityRatings::default(),
            features: vec![],
            text: text.to_string(),
            recommend: None,
            visit_date: None,
        }
    }

    #[test]
    fn rating_zero_is_rejected_as_unselected() {
        let err = submit_review(draft(0, "Ramp by the side entrance."), &[])
            .expect_err("rating 0 must be rejected");
        assert!(err.issues.iter().any(|i| i.field == "rating"));
    }

    #[test]
    fn blank_text_is_rejected_after_trimming() {
        let err = validate_draft(&draft(4, "   \n\t ")).expect_err("blank text must be rejected");
        assert!(err.issues.iter().any(|i| i.field == "text"));
    }

    #[test]
    fn accepted_review_round_trips_the_draft() {
        let stored = submit_review(draft(3, "Wide aisles, helpful staff."), &[])
            .expect("valid draft accepted");
        assert_eq!(stored.draft.rating, 3);
        assert_eq!(stored.draft.text, "Wide aisles, helpful staff.");
        assert!(stored.id.starts_with("r0001-"));
        assert!(stored.submitted_at_ms > 0);
    }

    #[test]
    fn fresh_id_is_disjoint_from_existing_ids() {
        let first = submit_review(draft(4, "First visit."), &[]).expect("first accepted");
        let existing = vec![first.clone()];
        let second = submit_review(draft(5, "Second visit."), &existing).expect("second accepted");
        assert_ne!(first.id, second.id);
        assert!(second.id.starts_with("r0002-"));
    }

    #[test]
    fn sequence_skips_past_the_highest_existing_id() {
        let mut seeded = submit_review(draft(4, "Seeded."), &[]).expect("accepted");
        seeded.id = "r0042-abc".to_string();
        let id = next_review_id(std::slice::from_ref(&seeded), 7);
        assert!(id.starts_with("r0043-"));
    }

    #[test]
    fn ids_unparsable_as_sequence_are_ignored() {
        let mut odd = submit_review(draft(4, "Odd id."), &[]).expect("accepted");
        odd.id = "legacy-1724131200000".to_string();
        let id = next_review_id(std::slice::from_ref(&odd), 7);
        assert!(id.starts_with("r0001-"));
    }

    #[test]
    fn new_place_requires_name_type_and_address() {
        let mut d = draft(4, "Nice spot.");
        d.target = ReviewTarget::NewPlace {
            place: PlaceDraft::default(),
        };
        let err = validate_draft(&d).expect_err("empty new place must be rejected");
        let fields: Vec<&str> = err.issues.iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"place_type"));
        assert!(fields.contains(&"address"));
    }

    #[test]
    fn new_place_with_required_fields_is_accepted() {
        let mut d = draft(4, "Nice spot.");
        d.target = ReviewTarget::NewPlace {
            place: PlaceDraft {
                name: "Corner Bakery".to_string(),
                category: Some(PlaceCategory::Restaurant),
                address: "12 Side St".to_string(),
                phone: None,
                website: None,
            },
        };
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn accessibility_ratings_above_five_are_rejected() {
        let mut d = draft(4, "Fine.");
        d.accessibility.vision = 6;
        let err = validate_draft(&d).expect_err("out-of-range rating must be rejected");
        assert!(err.issues.iter().any(|i| i.field == "vision"));
    }

    #[test]
    fn unrated_accessibility_categories_pass() {
        let mut d = draft(4, "Fine.");
        d.accessibility = AccessibilityRatings {
            mobility: 5,
            vision: 0,
            hearing: 3,
            cognitive: 0,
        };
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn features_outside_the_catalog_are_rejected() {
        let mut d = draft(4, "Fine.");
        d.features = vec![
            "Wheelchair Access".to_string(),
            "Rooftop Pool".to_string(),
        ];
        let err = validate_draft(&d).expect_err("unknown feature must be rejected");
        assert!(err
            .issues
            .iter()
            .any(|i| i.field == "features" && i.reason.contains("Rooftop Pool")));
    }

    #[test]
    fn rejected_draft_reports_every_bad_field_at_once() {
        let mut d = draft(0, "");
        d.features = vec!["Rooftop Pool".to_string()];
        let err = validate_draft(&d).expect_err("must be rejected");
        assert!(err.issues.len() >= 3);
    }

}
