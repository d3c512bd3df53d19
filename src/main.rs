mod config;
mod form;
mod ipc;
mod logging;
mod model;
mod store;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let config = config::Config::parse();
    logging::init(&config)?;

    let mut state = ipc::AppState::new(config.id_source());
    info!(ids = ?config.ids, "studentd ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "stdin closed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // Can't reply without id.
                warn!(error = %e, "unparseable request");
                let mut resp = ipc::err("", "bad_json", e.to_string(), None);
                if let Some(obj) = resp.as_object_mut() {
                    obj.remove("id");
                }
                writeln!(stdout, "{resp}")?;
                stdout.flush()?;
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        writeln!(stdout, "{resp}")?;
        stdout.flush()?;
    }

    info!(students = state.store.len(), "stdin closed, session discarded");
    Ok(())
}
