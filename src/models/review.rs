// src/models/review.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tenant review as it is displayed and stored.
///
/// `id` and `created_at` are assigned by the server for remote-stored
/// reviews. Local-storage reviews and the built-in testimonials carry
/// neither (insertion order stands in for a timestamp).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub rating: u8,
    // The remote table calls this column `body`; keep the wire name
    // consistent everywhere so one serde shape covers both backends.
    #[serde(rename = "body")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Validation failures for a review submission. These never leave the
/// form; the submit button stays disabled while any of them hold.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("name must be at least 2 characters")]
    NameTooShort,
    #[error("review text must be at least 10 characters")]
    TextTooShort,
    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,
}

/// A validated, trimmed submission payload, ready for the store client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub name: String,
    pub rating: u8,
    #[serde(rename = "body")]
    pub text: String,
}

impl NewReview {
    /// Trim and validate raw form input. Whitespace-only fields fail the
    /// length checks because trimming happens before measuring.
    pub fn parse(name: &str, rating: u8, text: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let text = text.trim();
        if name.chars().count() < 2 {
            return Err(ValidationError::NameTooShort);
        }
        if text.chars().count() < 10 {
            return Err(ValidationError::TextTooShort);
        }
        if !(1..=5).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange);
        }
        Ok(NewReview {
            name: name.to_string(),
            rating,
            text: text.to_string(),
        })
    }

    /// Placeholder review shown while the remote create is in flight.
    /// The temporary id is replaced by the server-assigned one when the
    /// list is re-fetched after a successful create.
    pub fn as_pending(&self) -> Review {
        Review {
            id: Some(uuid::Uuid::new_v4().to_string()),
            name: self.name.clone(),
            rating: self.rating,
            text: self.text.clone(),
            created_at: None,
        }
    }
}

/// The three built-in testimonials. Never persisted, never edited, always
/// rendered after any visitor-submitted reviews, in this order.
pub fn fallback_testimonials() -> Vec<Review> {
    vec![
        Review {
            id: None,
            name: "Grace W.".to_string(),
            rating: 5,
            text: "Quiet, clean, and very secure. My kids love the play area!".to_string(),
            created_at: None,
        },
        Review {
            id: None,
            name: "Brian M.".to_string(),
            rating: 5,
            text: "Reliable water and quick access to the road. Great value.".to_string(),
            created_at: None,
        },
        Review {
            id: None,
            name: "Naomi K.".to_string(),
            rating: 4,
            text: "Spacious balcony and safe parking sealed the deal for me.".to_string(),
            created_at: None,
        },
    ]
}

/// Display list: persisted reviews (already newest-first, as returned by
/// the store client) followed by the fixed testimonials.
pub fn merged_with_fallback(persisted: &[Review]) -> Vec<Review> {
    let mut all = persisted.to_vec();
    all.extend(fallback_testimonials());
    all
}
