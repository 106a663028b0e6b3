//! WASM bridge for the landing.
//!
//! The host page calls `landing_init` once, `landing_attach_listeners` once the
//! DOM is ready, then `landing_tick(dt)` from its `requestAnimationFrame` loop.
//! After each tick it reads the frame record through `get_frame_ptr` and draws
//! it with its own 3D library.

pub mod dom;
pub mod runner;

pub use runner::LandingRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, KeyboardEvent};
use landing_engine::{ElementId, InputEvent, LandingConfig, LayoutMeasure};
use dom::{DomLayout, CARD_SELECTOR};

struct App {
    runner: LandingRunner,
    window: web_sys::Window,
    document: Document,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> R {
    APP.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let app = borrow.as_mut().expect("Landing not initialized. Call landing_init() first.");
        f(app)
    })
}

fn push(event: InputEvent) {
    with_app(|app| app.runner.push_input(event));
}

fn browser() -> Result<(web_sys::Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    Ok((window, document))
}

/// True when the event started inside a card.
fn from_card(event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(CARD_SELECTOR).ok().flatten())
        .is_some()
}

#[wasm_bindgen]
pub fn landing_init(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json {
        Some(json) => LandingConfig::from_json(&json).map_err(dom::to_js)?,
        None => LandingConfig::default(),
    };
    let (window, document) = browser()?;
    let page = dom::discover_page(&document)?;
    let layout = DomLayout::new(window.clone(), document.clone());
    let runner = LandingRunner::new(config, page, Box::new(layout));

    APP.with(|cell| {
        *cell.borrow_mut() = Some(App { runner, window, document });
    });
    log::info!("landing: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn landing_tick(dt: f32) -> Result<(), JsValue> {
    with_app(|app| {
        let ticked = app.runner.tick(dt).map_err(dom::to_js);
        for (id, state) in app.runner.take_dirty() {
            dom::apply_element(&app.document, id, &state)?;
        }
        ticked
    })
}

/// Register the document, card, back-button and resize listeners.
#[wasm_bindgen]
pub fn landing_attach_listeners() -> Result<(), JsValue> {
    let (window, document) = browser()?;

    let on_click = Closure::<dyn FnMut(Event)>::new(|event: Event| {
        if !from_card(&event) {
            push(InputEvent::BackgroundClick);
        }
    });
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(|event: KeyboardEvent| {
        push(InputEvent::key_down(event.key()));
    });
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    let cards = document.query_selector_all(CARD_SELECTOR)?;
    for i in 0..cards.length() {
        let Some(card) = cards.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(index) = dom::card_index(&card) else {
            continue;
        };
        let on_card = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.stop_propagation();
            push(InputEvent::CardClick { index });
        });
        card.add_event_listener_with_callback("click", on_card.as_ref().unchecked_ref())?;
        on_card.forget();
    }

    if let Some(back) = dom::find_element(&document, ElementId::BackButton) {
        let on_back = Closure::<dyn FnMut(Event)>::new(|event: Event| {
            event.stop_propagation();
            push(InputEvent::BackClick);
        });
        back.add_event_listener_with_callback("click", on_back.as_ref().unchecked_ref())?;
        on_back.forget();
    }

    let on_resize = Closure::<dyn FnMut()>::new(landing_resize);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    log::info!("landing: listeners attached");
    Ok(())
}

/// Document click forwarded by the host. Ignored when it started inside a card.
#[wasm_bindgen]
pub fn landing_click(event: &Event) {
    if !from_card(event) {
        push(InputEvent::BackgroundClick);
    }
}

#[wasm_bindgen]
pub fn landing_click_card(index: u32) {
    push(InputEvent::card(index));
}

#[wasm_bindgen]
pub fn landing_key_down(key: String) {
    push(InputEvent::KeyDown { key });
}

#[wasm_bindgen]
pub fn landing_back() {
    push(InputEvent::BackClick);
}

/// Re-measure the window and queue a resize.
#[wasm_bindgen]
pub fn landing_resize() {
    with_app(|app| {
        let viewport = DomLayout::new(app.window.clone(), app.document.clone()).viewport();
        app.runner.push_input(InputEvent::Resize { viewport });
    });
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_app(|app| app.runner.frame_ptr())
}

#[wasm_bindgen]
pub fn get_frame_floats() -> u32 {
    with_app(|app| app.runner.frame_floats())
}

#[wasm_bindgen]
pub fn get_label_text() -> String {
    with_app(|app| app.runner.label_text())
}

#[wasm_bindgen]
pub fn get_label_font() -> String {
    with_app(|app| app.runner.label_font())
}

#[wasm_bindgen]
pub fn landing_state_json() -> Result<String, JsValue> {
    with_app(|app| app.runner.state_json().map_err(dom::to_js))
}
