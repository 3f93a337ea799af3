#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use leptos::*;
use std::time::Duration;
use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;

use leakars_court::app::ReviewsPage;
use leakars_court::store::ReviewStore;

wasm_bindgen_test_configure!(run_in_browser);

const TEST_STORAGE_KEY: &str = "lc_reviews_test";

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn clear_test_storage() {
    if let Ok(Some(storage)) = web_sys::window().unwrap().local_storage() {
        let _ = storage.remove_item(TEST_STORAGE_KEY);
    }
}

// Mount the reviews page with a chosen store backend into a fresh
// container, returning a cleanup closure
fn mount_page(store: ReviewStore) -> impl FnOnce() {
    let container = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&container).unwrap();

    let html_element = container
        .clone()
        .dyn_into::<web_sys::HtmlElement>()
        .expect("container was not an HtmlElement");

    leptos::mount_to(html_element, move || {
        provide_context(store);
        view! { <ReviewsPage/> }
    });

    move || {
        container.remove();
    }
}

fn review_cards() -> Vec<web_sys::Element> {
    let nodes = document().query_selector_all(".review-card").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .collect()
}

fn card_author(card: &web_sys::Element) -> String {
    card.query_selector(".review-author")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn set_input_value(selector: &str, value: &str) {
    let element = document().query_selector(selector).unwrap().unwrap();
    let event = web_sys::Event::new("input").unwrap();
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
        input.dispatch_event(&event).unwrap();
    } else if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(value);
        area.dispatch_event(&event).unwrap();
    } else {
        panic!("no input element for selector {}", selector);
    }
}

fn submit_form() {
    let form = document().query_selector("form").unwrap().unwrap();
    let event = web_sys::Event::new("submit").unwrap();
    form.dispatch_event(&event).unwrap();
}

fn submit_button_disabled() -> bool {
    document()
        .query_selector("button[type='submit']")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlButtonElement>()
        .unwrap()
        .disabled()
}

#[wasm_bindgen_test]
async fn fallback_testimonials_render_with_empty_store() {
    clear_test_storage();
    let unmount = mount_page(ReviewStore::local(TEST_STORAGE_KEY));
    sleep(Duration::from_millis(100)).await;

    let cards = review_cards();
    assert_eq!(cards.len(), 3, "expected only the built-in testimonials");
    assert_eq!(card_author(&cards[0]), "Grace W.");
    assert_eq!(card_author(&cards[1]), "Brian M.");
    assert_eq!(card_author(&cards[2]), "Naomi K.");

    unmount();
}

#[wasm_bindgen_test]
async fn submit_stays_disabled_until_input_is_valid() {
    clear_test_storage();
    let unmount = mount_page(ReviewStore::local(TEST_STORAGE_KEY));
    sleep(Duration::from_millis(100)).await;

    // Empty form: disabled
    assert!(submit_button_disabled());

    // Short name, long enough text: still disabled
    set_input_value("input[type='text']", "A");
    set_input_value("textarea", "Plenty of text to pass the body check.");
    sleep(Duration::from_millis(50)).await;
    assert!(submit_button_disabled());

    // Whitespace-only name: still disabled after trimming
    set_input_value("input[type='text']", "    ");
    sleep(Duration::from_millis(50)).await;
    assert!(submit_button_disabled());

    // Valid name, short text: still disabled
    set_input_value("input[type='text']", "Amina K.");
    set_input_value("textarea", "Too short");
    sleep(Duration::from_millis(50)).await;
    assert!(submit_button_disabled());

    // Both valid: enabled
    set_input_value("textarea", "Long enough to satisfy the ten character rule.");
    sleep(Duration::from_millis(50)).await;
    assert!(!submit_button_disabled());

    unmount();
}

#[wasm_bindgen_test]
async fn local_submission_lands_first_ahead_of_testimonials() {
    clear_test_storage();
    let unmount = mount_page(ReviewStore::local(TEST_STORAGE_KEY));
    sleep(Duration::from_millis(100)).await;

    set_input_value("input[type='text']", "Amina K.");
    set_input_value("textarea", "Loved the quiet compound and fast WhatsApp replies.");
    sleep(Duration::from_millis(50)).await;

    // Pick 4 stars (buttons are in 1..=5 order)
    let stars = document().query_selector_all(".star-button").unwrap();
    stars
        .item(3)
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
    sleep(Duration::from_millis(50)).await;

    submit_form();
    sleep(Duration::from_millis(300)).await;

    let cards = review_cards();
    assert_eq!(cards.len(), 4, "new review plus the three testimonials");
    assert_eq!(card_author(&cards[0]), "Amina K.");
    // Testimonials keep their fixed order after the new review
    assert_eq!(card_author(&cards[1]), "Grace W.");
    assert_eq!(card_author(&cards[3]), "Naomi K.");

    // 4 filled stars, 1 unfilled, text quoted exactly
    let filled = cards[0]
        .query_selector(".stars-filled")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default();
    let unfilled = cards[0]
        .query_selector(".stars-unfilled")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default();
    assert_eq!(filled.chars().count(), 4);
    assert_eq!(unfilled.chars().count(), 1);
    let text = cards[0]
        .query_selector(".review-text")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default();
    assert_eq!(
        text,
        "\u{201c}Loved the quiet compound and fast WhatsApp replies.\u{201d}"
    );

    // Success notice is showing and the form was reset
    assert!(document().query_selector(".banner-success").unwrap().is_some());
    let name_value = document()
        .query_selector("input[type='text']")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap()
        .value();
    assert_eq!(name_value, "");

    unmount();
}

#[wasm_bindgen_test]
async fn unreachable_remote_list_shows_error_and_testimonials() {
    // Nothing listens on port 9; the fetch fails immediately
    let unmount = mount_page(ReviewStore::remote("http://127.0.0.1:9/api/reviews"));
    sleep(Duration::from_millis(500)).await;

    assert!(document().query_selector(".banner-error").unwrap().is_some());
    let cards = review_cards();
    assert_eq!(cards.len(), 3, "fallback set alone on list failure");
    assert_eq!(card_author(&cards[0]), "Grace W.");

    unmount();
}

#[wasm_bindgen_test]
async fn failed_create_rolls_back_the_optimistic_entry() {
    let unmount = mount_page(ReviewStore::remote("http://127.0.0.1:9/api/reviews"));
    sleep(Duration::from_millis(500)).await;

    // 3 testimonials showing before the submit
    assert_eq!(review_cards().len(), 3);

    set_input_value("input[type='text']", "Amina K.");
    set_input_value("textarea", "Loved the quiet compound and fast WhatsApp replies.");
    sleep(Duration::from_millis(50)).await;
    submit_form();

    // Give the failed create time to resolve and roll back
    sleep(Duration::from_millis(800)).await;

    let cards = review_cards();
    assert_eq!(cards.len(), 3, "optimistic entry must be rolled back");
    assert_eq!(card_author(&cards[0]), "Grace W.");
    assert!(
        document()
            .query_selector(".review-form .banner-error")
            .unwrap()
            .is_some(),
        "failure notice should be shown"
    );

    // Field contents are retained for a retry
    let name_value = document()
        .query_selector("input[type='text']")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap()
        .value();
    assert_eq!(name_value, "Amina K.");

    unmount();
}
