//! # Café Kiosk Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Café Kiosk                                       │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Storefront / Back Office UI                   │  │
//! │  │  • Vending grid        • Option picker                           │  │
//! │  │  • Cart & checkout     • Menu & translation admin                │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (kiosk_app)                      │  │
//! │  │  main.rs ────► runs startup, reports failure                     │  │
//! │  │  lib.rs ─────► logging, config, catalog, state                   │  │
//! │  │  commands/ ──► tap_vending_card, submit_order, ...               │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    kiosk-core (pure logic)                       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    match kiosk_app::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = ?e.code, "{}", e.message);
            ExitCode::FAILURE
        }
    }
}
