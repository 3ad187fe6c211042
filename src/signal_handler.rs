use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use signal_hook::{
    consts::{SIGINT, SIGTERM},
    iterator::Signals,
};

/// Shared interrupt marker, polled between sections and sub-directories.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// First SIGINT/SIGTERM marks `flag` so the run stops at the next boundary;
/// a second one exits immediately. The handlers are in place when this
/// returns.
pub fn signal_handler(flag: &CancelFlag) {
    let mut signals = match Signals::new([SIGINT, SIGTERM]) {
        Ok(signals) => signals,
        Err(err) => {
            tracing::warn!("signal handler setup failed: {}", err);
            return;
        }
    };
    let flag = flag.clone();
    thread::spawn(move || {
        for _ in signals.forever() {
            if flag.is_cancelled() {
                std::process::exit(1);
            }
            flag.cancel();
        }
    });
}
