//! audit-dashboard: headless runner for the operations audit dashboard.
//!
//! Usage:
//!   audit-dashboard --page /automation
//!   audit-dashboard --page /calculator --json
//!   audit-dashboard --data-dir ./data --ipc-mode

mod render;

use anyhow::Result;
use opsaudit_core::{
    command::UiCommand,
    fixture::AuditFixture,
    session::DashboardSession,
    types::new_session_id,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetState,
    Command { command: UiCommand },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let json = args.iter().any(|a| a == "--json");
    let page = flag_value(&args, "--page").unwrap_or("/");
    let data_dir = flag_value(&args, "--data-dir");

    let fixture = match data_dir {
        Some(dir) => AuditFixture::load(dir)?,
        None => AuditFixture::builtin()?,
    };
    for issue in fixture.validate() {
        log::warn!("fixture: {issue}");
    }

    let mut session = DashboardSession::new(new_session_id(), Arc::new(fixture));
    log::info!("session {} started", session.session_id);

    if ipc_mode {
        run_ipc_loop(&mut session)?;
    } else {
        session.navigate(page);
        if json {
            println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        } else {
            print!("{}", render::render_text(&session.snapshot())?);
        }
    }

    Ok(())
}

fn run_ipc_loop(session: &mut DashboardSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match request {
            IpcRequest::Quit => break,
            IpcRequest::GetState => {
                writeln!(stdout, "{}", serde_json::to_string(&session.snapshot())?)?;
            }
            IpcRequest::Command { command } => match session.apply(command) {
                Ok(()) => {
                    writeln!(stdout, "{}", serde_json::to_string(&session.snapshot())?)?;
                }
                Err(e) => {
                    log::warn!("command rejected: {e}");
                    write_error(&mut stdout, &e.to_string())?;
                    continue;
                }
            },
        }
        stdout.flush()?;
    }
    Ok(())
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{}", err_json)?;
    stdout.flush()?;
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
