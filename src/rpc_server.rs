//! TabIntent RPC Server — JSON-RPC over stdin/stdout for the popup front-end.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"note.save", "params":{"url":"...","note":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use tabintent::app::App;
use tabintent::platform;
use tabintent::rpc_handler::handle_method;

use serde_json::{json, Value};

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self {
            window_start: Instant::now(),
            request_count: 0,
            max_per_second,
        }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        let elapsed = self.window_start.elapsed();
        if elapsed.as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn main() {
    // Absolute DB path: prefer TABINTENT_DATA_DIR, fallback to the platform data dir
    let db_path = if let Ok(dir) = std::env::var("TABINTENT_DATA_DIR") {
        std::path::PathBuf::from(dir).join("tabintent.db")
    } else {
        platform::get_data_dir().join("tabintent.db")
    };
    if let Some(parent) = db_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let app = Mutex::new(
        App::new(db_path.to_str().unwrap_or("tabintent.db")).expect("Failed to initialize TabIntent"),
    );

    // Signal ready
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    println!("{}", ready);
    io::stdout().flush().unwrap();

    // Max 200 RPC requests per second
    let mut rate_limiter = RateLimiter::new(200);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let err = json!({"id":null,"error":format!("parse error: {}",e)});
                println!("{}", err);
                io::stdout().flush().unwrap();
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            let err = json!({"id":id,"error":"rate limit exceeded"});
            println!("{}", err);
            io::stdout().flush().unwrap();
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let empty = json!({});
        let params = req.get("params").unwrap_or(&empty);

        let response = match handle_method(&app, method, params) {
            Ok(result) => json!({"id":id,"result":result}),
            Err(e) => json!({"id":id,"error":e}),
        };
        println!("{}", response);
        io::stdout().flush().unwrap();
    }
}
