use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use geode_store::Store;

pub type Error = anyhow::Error;

/// Runtime-only flag for the daily half-price shop window.
///
/// Deliberately not persisted: a restart mid-window simply ends the
/// discount early, matching the original behavior.
#[derive(Clone, Debug, Default)]
pub struct DiscountState {
    active: Arc<AtomicBool>,
}

impl DiscountState {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }
}

#[derive(Clone, Debug)]
pub struct Data {
    pub store: Store,
    pub discount: DiscountState,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
