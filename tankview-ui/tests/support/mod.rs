// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for tankview-ui component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::{JsCast, JsValue};
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

pub fn query_all(mount: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let list = mount.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.unchecked_into::<web_sys::Element>())
        .collect()
}

pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

/// Yield to the scheduler until `ready` holds or `max_ms` elapses.
pub async fn wait_until(mut ready: impl FnMut() -> bool, max_ms: u64) -> bool {
    for _ in 0..(max_ms / 20).max(1) {
        if ready() {
            return true;
        }
        sleep(Duration::from_millis(20)).await;
    }
    ready()
}

/// Wait until `selector` matches inside `mount`.
pub async fn wait_for(mount: &web_sys::Element, selector: &str, max_ms: u64) -> bool {
    wait_until(|| mount.query_selector(selector).unwrap().is_some(), max_ms).await
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` describing two tanks drawn in reverse
/// order and polling `status_url`.
pub fn inject_app_config(status_url: &str) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    let labels = js_sys::Array::of2(&"A".into(), &"B".into());
    let order = js_sys::Array::of2(&JsValue::from(1), &JsValue::from(0));
    set("levelCount", &JsValue::from(5));
    set("labels", &labels);
    set("order", &order);
    set("statusUrl", &status_url.into());
    set("pollIntervalMs", &JsValue::from(50));

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Status endpoint stub
// ---------------------------------------------------------------------------

/// Replace the global `fetch` with one that answers every request with
/// `body` as a 200 JSON response and counts the calls. Undo with
/// [`restore_fetch`].
pub fn stub_fetch(body: &str) {
    let install = js_sys::Function::new_with_args(
        "body",
        r#"
        const w = globalThis;
        if (!w.__tankviewRealFetch) {
            w.__tankviewRealFetch = w.fetch;
        }
        w.__tankviewFetchCalls = 0;
        w.fetch = function () {
            w.__tankviewFetchCalls += 1;
            return Promise.resolve(new Response(body, {
                status: 200,
                headers: { "Content-Type": "application/json" },
            }));
        };
        "#,
    );
    install.call1(&JsValue::NULL, &body.into()).unwrap();
}

/// Requests answered by the stub since [`stub_fetch`].
pub fn fetch_calls() -> u32 {
    let window = gloo_utils::window();
    js_sys::Reflect::get(&window, &"__tankviewFetchCalls".into())
        .ok()
        .and_then(|calls| calls.as_f64())
        .unwrap_or(0.0) as u32
}

pub fn restore_fetch() {
    let restore = js_sys::Function::new_no_args(
        r#"
        const w = globalThis;
        if (w.__tankviewRealFetch) {
            w.fetch = w.__tankviewRealFetch;
            delete w.__tankviewRealFetch;
        }
        delete w.__tankviewFetchCalls;
        "#,
    );
    restore.call0(&JsValue::NULL).unwrap();
}
