//! RPC method handler for the catalog admin JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested directly.
//! `handle_method` dispatches a method call to the tab session, navigation,
//! product services or settings held by `App`.

use std::sync::Mutex;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::app::App;
use crate::managers::tab_manager::TabManagerTrait;
use crate::services::product_filter;
use crate::services::product_validation;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::catalog::Catalog;
use crate::types::errors::ValidationErrors;
use crate::types::tab::{ProductDraft, ProductTabState, TabState};

fn str_param<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

/// Deserialize an optional parameter; `null` and absent both map to `None`.
fn typed_param<T: DeserializeOwned>(params: &Value, key: &str) -> Result<Option<T>, String> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => serde_json::from_value(v.clone())
            .map(Some)
            .map_err(|e| format!("invalid {}: {}", key, e)),
    }
}

fn session_json(app: &App) -> Result<Value, String> {
    serde_json::to_value(app.tab_manager.session()).map_err(|e| e.to_string())
}

fn errors_json(errors: &ValidationErrors) -> Value {
    let map: Map<String, Value> = errors
        .errors
        .iter()
        .map(|e| (e.field.to_string(), json!(e.message)))
        .collect();
    Value::Object(map)
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    debug!(method, "rpc call");
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Tabs ───
        "tabs.open" => {
            let id = str_param(params, "id")?;
            let title = str_param(params, "title")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.tab_manager.open_tab(id, title);
            session_json(&a)
        }
        "tabs.activate" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.tab_manager.set_active(id);
            session_json(&a)
        }
        "tabs.close" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.debouncer.cancel(id);
            a.tab_manager.close_tab(id);
            session_json(&a)
        }
        "tabs.update_state" => {
            let id = str_param(params, "id")?;
            let state: Option<TabState> = typed_param(params, "state")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            // A direct write supersedes anything still waiting for this tab.
            a.debouncer.cancel(id);
            a.tab_manager.update_state(id, state);
            Ok(json!({"ok": true}))
        }
        "tabs.schedule_state" => {
            let id = str_param(params, "id")?;
            let state: Option<TabState> = typed_param(params, "state")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.debouncer.schedule(id, state, Instant::now());
            Ok(json!({"pending": a.debouncer.pending_count()}))
        }
        "tabs.flush" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let applied = a.debouncer.flush_all(&mut a.tab_manager);
            Ok(json!({"applied": applied}))
        }
        "tabs.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            session_json(&a)
        }
        "tabs.active" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.tab_manager.active_tab()).map_err(|e| e.to_string())
        }

        // ─── Navigation ───
        "nav.items" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.navigator.items()).map_err(|e| e.to_string())
        }
        "nav.open" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let item = a
                .navigator
                .navigate(id, &mut a.tab_manager)
                .map_err(|e| e.to_string())?
                .clone();
            Ok(json!({"item": item, "session": session_json(a)?}))
        }

        // ─── Products ───
        "products.filter" => {
            let catalog: Catalog = typed_param(params, "catalog")?.ok_or("missing catalog")?;
            let explicit: Option<ProductTabState> = typed_param(params, "state")?;
            let state = match explicit {
                Some(s) => s,
                None => {
                    let a = app.lock().map_err(|e| e.to_string())?;
                    let tab_id = params.get("tab_id").and_then(|v| v.as_str());
                    let tab = match tab_id {
                        Some(id) => a.tab_manager.get_tab(id),
                        None => a.tab_manager.active_tab(),
                    };
                    tab.and_then(|t| t.state.as_ref())
                        .and_then(TabState::as_products)
                        .cloned()
                        .unwrap_or_default()
                }
            };
            let page = product_filter::query_for_tab(&catalog, &state).map_err(|e| e.to_string())?;
            serde_json::to_value(page).map_err(|e| e.to_string())
        }
        "products.validate" => {
            let draft: ProductDraft = typed_param(params, "draft")?.ok_or("missing draft")?;
            let catalog: Option<Catalog> = typed_param(params, "catalog")?;
            let result = match catalog {
                Some(c) => product_validation::validate_with_catalog(&draft, &c),
                None => product_validation::validate(&draft),
            };
            match result {
                Ok(()) => Ok(json!({"valid": true})),
                Err(errors) => Ok(json!({"valid": false, "errors": errors_json(&errors)})),
            }
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            a.apply_settings();
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
