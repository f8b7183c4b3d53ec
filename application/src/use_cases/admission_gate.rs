//! Admission gate
//!
//! Caps the number of orchestration calls talking to the provider at once.
//! Waiters are served strictly in arrival order: the gate is backed by
//! tokio's fair [`Semaphore`], whose queue and permit count sit under one
//! internal lock.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::debug;

/// The gate was closed and hands out no more slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("admission gate is closed")]
pub struct GateClosed;

/// Global concurrency gate for provider calls
///
/// Cheap to clone; clones share the same slots. The gate knows nothing
/// about what a slot is used for.
#[derive(Debug, Clone)]
pub struct AdmissionGate {
    semaphore: Arc<Semaphore>,
    ceiling: usize,
}

/// One held slot. Released exactly once, on [`AdmissionSlot::release`] or drop.
#[derive(Debug)]
pub struct AdmissionSlot {
    _permit: OwnedSemaphorePermit,
}

impl AdmissionSlot {
    /// Give the slot back. Equivalent to dropping it.
    pub fn release(self) {}
}

impl AdmissionGate {
    /// Create a gate with `ceiling` slots (at least one)
    pub fn new(ceiling: usize) -> Self {
        let ceiling = ceiling.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(ceiling)),
            ceiling,
        }
    }

    /// Wait until a slot is free and take it
    ///
    /// Fails only once [`AdmissionGate::close`] has been called.
    pub async fn acquire(&self) -> Result<AdmissionSlot, GateClosed> {
        let permit = Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .map_err(|_| GateClosed)?;
        debug!(in_flight = self.in_flight(), ceiling = self.ceiling, "Admission slot acquired");
        Ok(AdmissionSlot { _permit: permit })
    }

    /// Take a slot only if one is free right now
    pub fn try_acquire(&self) -> Option<AdmissionSlot> {
        Arc::clone(&self.semaphore)
            .try_acquire_owned()
            .ok()
            .map(|permit| AdmissionSlot { _permit: permit })
    }

    /// Stop admitting. Queued and later callers get [`GateClosed`];
    /// slots already held stay valid until released.
    pub fn close(&self) {
        self.semaphore.close();
        debug!(in_flight = self.in_flight(), "Admission gate closed");
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Number of slots currently held
    pub fn in_flight(&self) -> usize {
        self.ceiling - self.semaphore.available_permits()
    }
}
