use leptos::*;
use crate::models::review::Review;

/// Filled/unfilled glyph pair for a rating out of 5.
fn star_glyphs(rating: u8) -> (String, String) {
    let filled = rating.min(5) as usize;
    ("★".repeat(filled), "★".repeat(5 - filled))
}

#[component]
pub fn Stars(rating: u8) -> impl IntoView {
    let (filled, unfilled) = star_glyphs(rating);
    view! {
        <div class="stars" aria-label=format!("{} out of 5 stars", rating)>
            <span class="stars-filled">{ filled }</span>
            <span class="stars-unfilled">{ unfilled }</span>
        </div>
    }
}

/// The merged review list: persisted reviews newest first, then the
/// built-in testimonials. `loading` and `error` reflect the mount-time
/// fetch against the remote store.
#[component]
pub fn ReviewsList(
    reviews: Signal<Vec<Review>>,
    loading: ReadSignal<bool>,
    error: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <section class="reviews-list">
            {move || error.get().map(|reason| view! {
                <div class="banner banner-error">
                    { format!("Could not load reviews: {}", reason) }
                </div>
            })}
            {move || loading.get().then(|| view! {
                <p class="loading">{ "Loading reviews…" }</p>
            })}
            <div class="reviews-grid">
                {move || reviews.get().into_iter().map(|review| view! {
                    <div class="card review-card">
                        <Stars rating=review.rating />
                        <p class="review-text">{ format!("\u{201c}{}\u{201d}", review.text) }</p>
                        <div class="review-author">{ review.name }</div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
