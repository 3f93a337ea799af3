use leptos::*;
use leptos_dom::ev::SubmitEvent;
use wasm_bindgen_futures::spawn_local;

use crate::models::review::{NewReview, Review};
use crate::store::ReviewStore;

/// Submission lifecycle. Validation runs continuously while `Idle`
/// (the submit button is gated on it), so there is no separate
/// validating state to transition through.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Success,
    Failed(String),
}

impl SubmitState {
    /// While a create is in flight the submit control is disabled,
    /// which is what serializes submissions.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

/// New review goes to the head of the list: it is the newest entry.
fn optimistic_prepend(list: &[Review], pending: Review) -> Vec<Review> {
    let mut next = Vec::with_capacity(list.len() + 1);
    next.push(pending);
    next.extend_from_slice(list);
    next
}

/// Discrete 1–5 star rating picker.
#[component]
pub fn StarPicker(value: ReadSignal<u8>, on_change: WriteSignal<u8>) -> impl IntoView {
    view! {
        <div class="star-picker">
            {(1u8..=5).map(|n| view! {
                <button
                    type="button"
                    class="star-button"
                    class:selected=move || n <= value.get()
                    aria-label=format!("{} star{}", n, if n > 1 { "s" } else { "" })
                    on:click=move |_| on_change.set(n)
                >
                    { "★" }
                </button>
            }).collect::<Vec<_>>()}
            <span class="star-picker-count">{ move || format!("{}/5", value.get()) }</span>
        </div>
    }
}

/// Review submission form. Owns the submit state machine; shares the
/// persisted-review list with the page so the optimistic prepend and
/// its rollback are visible to the list view.
#[component]
pub fn ReviewForm(store: ReviewStore, persisted: RwSignal<Vec<Review>>) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (rating, set_rating) = create_signal(5u8); // Default rating to 5
    let (text, set_text) = create_signal(String::new());
    let (state, set_state) = create_signal(SubmitState::Idle);

    // Re-checked on every keystroke; gates the submit button
    let is_valid = create_memo(move |_| {
        NewReview::parse(&name.get(), rating.get(), &text.get()).is_ok()
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // Guard against a second submit landing while one is in flight
        if state.get_untracked().is_busy() {
            return;
        }
        let Ok(review) = NewReview::parse(
            &name.get_untracked(),
            rating.get_untracked(),
            &text.get_untracked(),
        ) else {
            return;
        };

        set_state.set(SubmitState::Submitting);

        // Snapshot for rollback, then show the review immediately
        let snapshot = persisted.get_untracked();
        persisted.set(optimistic_prepend(&snapshot, review.as_pending()));

        let store = store.clone();
        spawn_local(async move {
            match store.create(review).await {
                Ok(_) => {
                    // Reconcile the placeholder with the stored row
                    match store.list().await {
                        Ok(fresh) => persisted.set(fresh),
                        Err(e) => {
                            logging::log!("[REVIEWS] Reconcile fetch failed: {}", e);
                        }
                    }
                    set_name.set(String::new());
                    set_rating.set(5);
                    set_text.set(String::new());
                    set_state.set(SubmitState::Success);

                    // Transient notice: clear it unless another submit
                    // already moved the state on
                    gloo_timers::future::TimeoutFuture::new(4_000).await;
                    set_state.update(|s| {
                        if *s == SubmitState::Success {
                            *s = SubmitState::Idle;
                        }
                    });
                }
                Err(e) => {
                    logging::log!("[REVIEWS] Create failed, rolling back: {}", e);
                    persisted.set(snapshot);
                    // Field contents are left alone so the visitor can retry
                    set_state.set(SubmitState::Failed(e.to_string()));
                }
            }
        });
    };

    view! {
        <section class="card review-form">
            <h2>{ "Add Your Review" }</h2>
            <p>{ "Tell us what you loved about living or visiting Leakars Court." }</p>
            <form on:submit=handle_submit>
                <label>{ "Your Name" }</label>
                <input
                    type="text"
                    placeholder="e.g., Amina K."
                    prop:value=name
                    on:input=move |e| set_name.set(event_target_value(&e))
                />
                <label>{ "Rating" }</label>
                <StarPicker value=rating on_change=set_rating />
                <label>{ "Your Review" }</label>
                <textarea
                    placeholder="Share details: safety, water reliability, parking, balconies, greenery, access to the road, etc."
                    prop:value=text
                    on:input=move |e| set_text.set(event_target_value(&e))
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    prop:disabled=move || !is_valid.get() || state.get().is_busy()
                >
                    {move || if state.get().is_busy() { "Submitting…" } else { "Submit Review" }}
                </button>
            </form>
            {move || match state.get() {
                SubmitState::Success => view! {
                    <div class="banner banner-success">
                        { "Thank you! Your review was saved." }
                    </div>
                }.into_view(),
                SubmitState::Failed(reason) => view! {
                    <div class="banner banner-error">
                        { format!("Your review could not be saved: {}", reason) }
                        <button type="button" on:click=move |_| set_state.set(SubmitState::Idle)>
                            { "Dismiss" }
                        </button>
                    </div>
                }.into_view(),
                _ => ().into_view(),
            }}
        </section>
    }
}
