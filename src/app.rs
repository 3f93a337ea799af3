/// Application shell for the Leakars Court reviews page.
/// Picks the review store backend at startup and mounts the page that
/// combines the review list and submission form.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::models::review::{merged_with_fallback, Review};
use crate::store::ReviewStore;

/// localStorage slot used when the device-only store is selected.
pub const LOCAL_REVIEWS_KEY: &str = "lc_reviews";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Startup configuration: the one place the backend is chosen.
    // Swap for `ReviewStore::local(LOCAL_REVIEWS_KEY)` to keep reviews
    // on the visitor's device instead of the remote table.
    provide_context(ReviewStore::remote("/api/reviews"));

    view! {
        <Stylesheet id="leptos" href="/pkg/leakars-court.css"/>
        <Title text="Reviews — Leakars Court"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=ReviewsPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Self-contained reviews page: owns the shared persisted-review list,
/// fetches it on mount, and renders the list view above the form.
#[component]
pub fn ReviewsPage() -> impl IntoView {
    let store = use_context::<ReviewStore>()
        .unwrap_or_else(|| ReviewStore::local(LOCAL_REVIEWS_KEY));

    let persisted = create_rw_signal(Vec::<Review>::new());
    let (loading, set_loading) = create_signal(true);
    let (load_error, set_load_error) = create_signal(None::<String>);

    // Initial fetch. Effects only run in the browser, so server-side
    // rendering never issues a store call.
    {
        let store = store.clone();
        create_effect(move |_| {
            let store = store.clone();
            spawn_local(async move {
                match store.list().await {
                    Ok(reviews) => {
                        persisted.set(reviews);
                        set_load_error.set(None);
                    }
                    Err(e) => {
                        logging::log!("[REVIEWS] Initial list failed: {}", e);
                        // Testimonials still render; persisted stays empty
                        set_load_error.set(Some(e.to_string()));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let all_reviews = Signal::derive(move || merged_with_fallback(&persisted.get()));

    view! {
        <div class="reviews-page">
            <h1>{ "What Our Tenants Say" }</h1>
            <p class="intro">
                { "Real experiences from residents and visitors. Add yours below — it helps others choose with confidence." }
            </p>
            <ReviewsList reviews=all_reviews loading=loading error=load_error />
            <ReviewForm store=store persisted=persisted />
        </div>
    }
}
