//! Catalog admin RPC server: JSON-RPC over stdin/stdout for the UI process.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"tabs.open", "params":{"id":"home","title":"Inicio"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Debounced tab state writes are flushed on a timer between requests.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use catalog_admin::app::App;
use catalog_admin::logging;
use catalog_admin::rpc_handler::handle_method;
use catalog_admin::services::settings_engine::SettingsEngineTrait;

use serde_json::{json, Value};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

const FLUSH_INTERVAL: Duration = Duration::from_millis(50);

/// Parse one request line and produce the response object.
fn respond(app: &Mutex<App>, line: &str) -> Value {
    let req: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "unparseable request");
            return json!({"id": null, "error": format!("parse error: {}", e)});
        }
    };

    let id = req.get("id").cloned().unwrap_or(Value::Null);
    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
    let params = req.get("params").cloned().unwrap_or(json!({}));

    match handle_method(app, method, &params) {
        Ok(val) => json!({"id": id, "result": val}),
        Err(err) => json!({"id": id, "error": err}),
    }
}

async fn write_line(stdout: &mut io::Stdout, value: &Value) -> std::io::Result<()> {
    stdout.write_all(value.to_string().as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let debug_flag = std::env::var("CATALOG_ADMIN_DEBUG").is_ok_and(|v| v == "1");
    let config_path = std::env::var("CATALOG_ADMIN_CONFIG").ok();

    let app = match App::new(config_path) {
        Ok(app) => app,
        Err(e) => {
            logging::init(debug_flag, None);
            error!(error = %e, "failed to initialise");
            std::process::exit(1);
        }
    };
    let level = app.settings_engine.get_settings().logging.level.clone();
    logging::init(debug_flag, Some(level.as_str()));
    let app = Mutex::new(app);

    let mut stdout = io::stdout();
    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if write_line(&mut stdout, &ready).await.is_err() {
        return;
    }
    info!("rpc server ready");

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut ticker = tokio::time::interval(FLUSH_INTERVAL);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(l)) => l,
                    Ok(None) => break,
                    Err(e) => {
                        warn!(error = %e, "stdin read failed");
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                let response = respond(&app, &line);
                if write_line(&mut stdout, &response).await.is_err() {
                    break;
                }
            }
            _ = ticker.tick() => {
                if let Ok(mut a) = app.lock() {
                    a.tick(Instant::now());
                }
            }
        }
    }

    let guard = app.lock();
    if let Ok(mut a) = guard {
        a.shutdown();
    }
}
