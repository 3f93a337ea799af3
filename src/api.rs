#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use crate::db::Database;
#[cfg(feature = "ssr")]
use crate::models::review::NewReview;
#[cfg(feature = "ssr")]
use std::sync::Arc;
#[cfg(feature = "ssr")]
use tokio::sync::Mutex;
#[cfg(feature = "ssr")]
use leptos::logging::log;

// GET /api/reviews — all reviews, newest first, capped at 100
#[cfg(feature = "ssr")]
pub async fn get_reviews(db: web::Data<Arc<Mutex<Database>>>) -> HttpResponse {
    let db = db.lock().await;
    match db.list_reviews().await {
        Ok(reviews) => {
            log!("[API] Returning {} reviews", reviews.len());
            HttpResponse::Ok().json(reviews)
        }
        Err(err) => {
            leptos::logging::error!("[API] Failed to fetch reviews: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch reviews")
        }
    }
}

// POST /api/reviews — insert one review, echo the stored row back
#[cfg(feature = "ssr")]
pub async fn create_review(
    db: web::Data<Arc<Mutex<Database>>>,
    review: web::Json<NewReview>,
) -> HttpResponse {
    let review = review.into_inner();
    log!("[API] Received review from {} ({}/5)", review.name, review.rating);

    let db = db.lock().await;
    match db.insert_review(&review).await {
        Ok(stored) => {
            log!("[API] Stored review {:?}", stored.id);
            HttpResponse::Ok().json(stored)
        }
        Err(err) => {
            leptos::logging::error!("[API] Failed to store review: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to store review")
        }
    }
}
