#![doc(test(attr(deny(warnings))))]

//! Hisebi Core offers the ledger snapshot, derivation, and persistence
//! primitives that power the Hisebi/Dor-Dam personal finance shells.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod export;
pub mod insight;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Hisebi Core tracing initialized.");
    });
}
