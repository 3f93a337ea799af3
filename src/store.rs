/// Store client for tenant reviews. One value abstracts both backends:
/// the remote reviews table behind `/api/reviews`, and browser
/// localStorage for the device-only variant. The backend is picked once
/// at startup and handed to the page; view code never branches on it.
use gloo_net::http::Request;
use leptos::logging::log;
use thiserror::Error;

use crate::models::review::{NewReview, Review};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("review store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Backend {
    /// HTTP endpoint serving the `reviews` table.
    Remote { base: String },
    /// Named localStorage slot holding the serialized review list.
    /// The key is carried here, not read from a global.
    Local { key: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStore {
    backend: Backend,
}

impl ReviewStore {
    pub fn remote(base: impl Into<String>) -> Self {
        ReviewStore {
            backend: Backend::Remote { base: base.into() },
        }
    }

    pub fn local(key: impl Into<String>) -> Self {
        ReviewStore {
            backend: Backend::Local { key: key.into() },
        }
    }

    /// Fetch all persisted reviews, newest first.
    ///
    /// Remote failures surface as `StoreError::Unavailable` so the page
    /// can show the reason and fall back to the built-in testimonials.
    /// A missing or corrupt localStorage slot is treated as an empty
    /// list and never surfaced.
    pub async fn list(&self) -> Result<Vec<Review>, StoreError> {
        match &self.backend {
            Backend::Remote { base } => {
                let response = Request::get(base)
                    .send()
                    .await
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                if !response.ok() {
                    log!("[STORE] List request rejected: HTTP {}", response.status());
                    return Err(StoreError::Unavailable(format!(
                        "server returned HTTP {}",
                        response.status()
                    )));
                }
                let reviews: Vec<Review> = response
                    .json()
                    .await
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                log!("[STORE] Fetched {} reviews from {}", reviews.len(), base);
                Ok(reviews)
            }
            Backend::Local { key } => Ok(newest_first(read_slot(key))),
        }
    }

    /// Persist a validated submission and return the stored review.
    ///
    /// Remote failures are `StoreError::Unavailable`; the caller owns
    /// rolling back any optimistic UI state. Local writes are
    /// best-effort: a failed serialize/setItem is logged and ignored.
    pub async fn create(&self, review: NewReview) -> Result<Review, StoreError> {
        match &self.backend {
            Backend::Remote { base } => {
                let request = Request::post(base)
                    .json(&review)
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                let response = request
                    .send()
                    .await
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                if !response.ok() {
                    log!("[STORE] Create request rejected: HTTP {}", response.status());
                    return Err(StoreError::Unavailable(format!(
                        "server returned HTTP {}",
                        response.status()
                    )));
                }
                let stored: Review = response
                    .json()
                    .await
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                log!("[STORE] Created review {:?} for {}", stored.id, stored.name);
                Ok(stored)
            }
            Backend::Local { key } => {
                let stored = Review {
                    id: None,
                    name: review.name,
                    rating: review.rating,
                    text: review.text,
                    created_at: None,
                };
                // Append in insertion order; list() reverses on read.
                let mut all = read_slot(key);
                all.push(stored.clone());
                write_slot(key, &all);
                Ok(stored)
            }
        }
    }
}

/// Stored order is oldest-first (append on create); display order is
/// newest-first.
fn newest_first(mut stored: Vec<Review>) -> Vec<Review> {
    stored.reverse();
    stored
}

/// Read and deserialize the localStorage slot. Missing storage, a
/// missing key, or malformed JSON all come back as an empty list.
fn read_slot(key: &str) -> Vec<Review> {
    let Ok(Some(storage)) = gloo_utils::window().local_storage() else {
        return Vec::new();
    };
    let Ok(Some(raw)) = storage.get_item(key) else {
        return Vec::new();
    };
    decode_slot(&raw)
}

fn write_slot(key: &str, reviews: &[Review]) {
    let Ok(Some(storage)) = gloo_utils::window().local_storage() else {
        log!("[STORE] localStorage unavailable, review not persisted");
        return;
    };
    match serde_json::to_string(reviews) {
        Ok(raw) => {
            if storage.set_item(key, &raw).is_err() {
                log!("[STORE] localStorage write failed for key {}", key);
            }
        }
        Err(e) => log!("[STORE] Failed to serialize reviews: {}", e),
    }
}

fn decode_slot(raw: &str) -> Vec<Review> {
    match serde_json::from_str(raw) {
        Ok(reviews) => reviews,
        Err(e) => {
            log!("[STORE] Corrupt review slot, starting empty: {}", e);
            Vec::new()
        }
    }
}
