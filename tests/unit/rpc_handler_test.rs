//! Unit tests for the RPC handler, exercised through the same `handle_method`
//! path the `catalog-admin-rpc` binary uses.

use std::sync::Mutex;

use serde_json::{json, Value};
use tempfile::TempDir;

use catalog_admin::app::App;
use catalog_admin::rpc_handler::handle_method;

/// Create a fresh App with its settings file in a temp directory.
fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = tmp.path().join("settings.json").to_string_lossy().to_string();
    let app = App::new(Some(path)).expect("Failed to init App");
    (Mutex::new(app), tmp)
}

fn call(app: &Mutex<App>, method: &str, params: Value) -> Value {
    handle_method(app, method, &params).unwrap()
}

fn catalog() -> Value {
    json!({
        "products": [
            {"id": "1", "name": "Laptop Pro", "price": 1500.0, "stock": 4, "brandId": 1,
             "subcategoryId": 100, "categoryId": 10, "supercategoryId": 1},
            {"id": "2", "name": "Gaming Mouse", "price": 40.0, "stock": 30, "brandId": 2,
             "subcategoryId": 110, "categoryId": 11, "supercategoryId": 1}
        ],
        "brands": [{"id": 1, "name": "Acme"}, {"id": 2, "name": "Zeta"}],
        "supercategories": [{"id": 1, "name": "Tech"}],
        "categories": [
            {"id": 10, "name": "Computers", "supercategoryId": 1},
            {"id": 11, "name": "Accessories", "supercategoryId": 1}
        ],
        "subcategories": [
            {"id": 100, "name": "Notebooks", "categoryId": 10},
            {"id": 110, "name": "Mice", "categoryId": 11}
        ]
    })
}

// ─── Ping / unknown ───

#[test]
fn test_ping() {
    let (app, _tmp) = setup();
    assert_eq!(call(&app, "ping", json!({})), json!({"pong": true}));
}

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "nonexistent.method", &json!({}));
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── Tabs ───

#[test]
fn test_tabs_scenario() {
    let (app, _tmp) = setup();

    let s = call(&app, "tabs.open", json!({"id": "home", "title": "Inicio"}));
    assert_eq!(s["active_tab_id"], "home");

    let s = call(&app, "tabs.open", json!({"id": "products", "title": "Productos"}));
    assert_eq!(s["tabs"].as_array().unwrap().len(), 2);
    assert_eq!(s["active_tab_id"], "products");

    let s = call(&app, "tabs.close", json!({"id": "home"}));
    assert_eq!(s["tabs"][0]["id"], "products");
    assert_eq!(s["active_tab_id"], "products");

    let s = call(&app, "tabs.close", json!({"id": "products"}));
    assert_eq!(s, json!({"tabs": [], "active_tab_id": null}));
}

#[test]
fn test_tabs_missing_params() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "tabs.open", &json!({"id": "home"})).is_err());
    assert!(handle_method(&app, "tabs.close", &json!({})).is_err());
}

#[test]
fn test_tabs_activate_and_active() {
    let (app, _tmp) = setup();
    call(&app, "tabs.open", json!({"id": "home", "title": "Inicio"}));
    call(&app, "tabs.open", json!({"id": "products", "title": "Productos"}));
    call(&app, "tabs.activate", json!({"id": "home"}));

    let active = call(&app, "tabs.active", json!({}));
    assert_eq!(active["title"], "Inicio");

    call(&app, "tabs.activate", json!({"id": "ghost"}));
    assert_eq!(call(&app, "tabs.active", json!({})), Value::Null);
}

#[test]
fn test_update_state_roundtrip_and_invalid_state() {
    let (app, _tmp) = setup();
    call(&app, "tabs.open", json!({"id": "draft", "title": "Draft"}));
    call(
        &app,
        "tabs.update_state",
        json!({"id": "draft", "state": {"kind": "custom", "data": {"step": 2}}}),
    );

    let list = call(&app, "tabs.list", json!({}));
    assert_eq!(list["tabs"][0]["state"], json!({"kind": "custom", "data": {"step": 2}}));

    let bad = handle_method(
        &app,
        "tabs.update_state",
        &json!({"id": "draft", "state": {"kind": "nope"}}),
    );
    assert!(bad.unwrap_err().contains("invalid state"));
}

#[test]
fn test_schedule_then_flush() {
    let (app, _tmp) = setup();
    call(&app, "tabs.open", json!({"id": "home", "title": "Inicio"}));
    let res = call(&app, "tabs.schedule_state", json!({"id": "home", "state": {"kind": "home"}}));
    assert_eq!(res["pending"], 1);

    assert_eq!(call(&app, "tabs.flush", json!({})), json!({"applied": 1}));
    let list = call(&app, "tabs.list", json!({}));
    assert_eq!(list["tabs"][0]["state"], json!({"kind": "home"}));
}

#[test]
fn test_close_cancels_pending_write() {
    let (app, _tmp) = setup();
    call(&app, "tabs.open", json!({"id": "home", "title": "Inicio"}));
    call(&app, "tabs.schedule_state", json!({"id": "home", "state": {"kind": "home"}}));
    call(&app, "tabs.close", json!({"id": "home"}));
    call(&app, "tabs.open", json!({"id": "home", "title": "Inicio"}));

    assert_eq!(call(&app, "tabs.flush", json!({})), json!({"applied": 0}));
    let list = call(&app, "tabs.list", json!({}));
    assert_eq!(list["tabs"][0]["state"], Value::Null);
}

// ─── Navigation ───

#[test]
fn test_nav_items_and_open() {
    let (app, _tmp) = setup();
    let items = call(&app, "nav.items", json!({}));
    assert_eq!(items.as_array().unwrap().len(), 3);

    let res = call(&app, "nav.open", json!({"id": "products"}));
    assert_eq!(res["item"]["label"], "Productos");
    assert_eq!(res["session"]["active_tab_id"], "products");
    assert_eq!(res["session"]["tabs"][0]["state"]["kind"], "products");

    let err = handle_method(&app, "nav.open", &json!({"id": "brands"})).unwrap_err();
    assert_eq!(err, "Unknown navigation target: brands");
}

// ─── Products ───

#[test]
fn test_products_filter_with_explicit_state() {
    let (app, _tmp) = setup();
    let page = call(
        &app,
        "products.filter",
        json!({
            "catalog": catalog(),
            "state": {"filters": {"search": "mouse"}, "pagination": {"page": 0, "page_size": 10}}
        }),
    );
    assert_eq!(page["total"], 1);
    assert_eq!(page["rows"][0]["name"], "Gaming Mouse");
    assert_eq!(page["rows"][0]["brandName"], "Zeta");
}

#[test]
fn test_products_filter_uses_active_tab_state() {
    let (app, _tmp) = setup();
    call(&app, "nav.open", json!({"id": "products"}));
    call(
        &app,
        "tabs.update_state",
        json!({"id": "products", "state": {"kind": "products", "data": {
            "filters": {"brand_id": 1},
            "pagination": {"page": 0, "page_size": 10}
        }}}),
    );

    let page = call(&app, "products.filter", json!({"catalog": catalog()}));
    assert_eq!(page["total"], 1);
    assert_eq!(page["rows"][0]["id"], "1");
}

#[test]
fn test_products_filter_errors() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "products.filter", &json!({})).is_err());

    let err = handle_method(
        &app,
        "products.filter",
        &json!({"catalog": catalog(), "state": {"sort": {"field": "color"}}}),
    )
    .unwrap_err();
    assert_eq!(err, "Invalid sort field: color");
}

#[test]
fn test_products_validate() {
    let (app, _tmp) = setup();
    let ok = call(
        &app,
        "products.validate",
        json!({
            "draft": {"name": "Mouse", "price": 10.0, "stock": 1, "brand_id": "2",
                      "supercategory_id": "1", "category_id": "11", "subcategory_id": "110"},
            "catalog": catalog()
        }),
    );
    assert_eq!(ok, json!({"valid": true}));

    let bad = call(&app, "products.validate", json!({"draft": {"price": -1.0}}));
    assert_eq!(bad["valid"], false);
    assert_eq!(bad["errors"]["price"], "Price must be zero or positive");
    assert_eq!(bad["errors"]["name"], "Name is required");
}

// ─── Settings ───

#[test]
fn test_settings_get_and_set() {
    let (app, _tmp) = setup();
    let settings = call(&app, "settings.get", json!({}));
    assert_eq!(settings["tabs"]["state_debounce_ms"], 300);

    call(&app, "settings.set", json!({"key": "tabs.state_debounce_ms", "value": 50}));
    let settings = call(&app, "settings.get", json!({}));
    assert_eq!(settings["tabs"]["state_debounce_ms"], 50);
    assert_eq!(
        app.lock().unwrap().debouncer.delay(),
        std::time::Duration::from_millis(50)
    );

    assert!(handle_method(&app, "settings.set", &json!({"key": "tabs.nope", "value": 1})).is_err());
}

#[test]
fn test_settings_set_rejects_defaults_that_break_products_view() {
    let (app, _tmp) = setup();
    assert!(handle_method(
        &app,
        "settings.set",
        &json!({"key": "products.default_page_size", "value": 0})
    )
    .is_err());
    assert!(handle_method(
        &app,
        "settings.set",
        &json!({"key": "products.default_sort_field", "value": "bogus"})
    )
    .is_err());

    call(&app, "nav.open", json!({"id": "products"}));
    let page = call(&app, "products.filter", json!({"catalog": catalog()}));
    assert_eq!(page["total"], 2);
}
