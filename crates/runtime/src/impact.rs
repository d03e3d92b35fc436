//! Delayed impact scheduling.
//!
//! An impact is always scheduled after its ordnance has been withdrawn from
//! inventory; there is no cancellation once scheduled. Each ordnance kind has
//! its own lock, so two impacts of the same kind firing together apply their
//! effects one after the other.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use orbital_core::{ImpactEffect, ImpactSite, OrdnanceDefinition, OrdnanceKind};
use strum::IntoEnumIterator;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, ImpactEvent};

/// Receives landed impacts.
///
/// Applying damage, knockback and camera shake is the host's job.
pub trait ImpactSink: Send + Sync {
    fn apply(&self, event: ImpactEvent);
}

impl ImpactSink for EventBus {
    fn apply(&self, event: ImpactEvent) {
        self.publish(Event::Impact(event));
    }
}

/// Timer facility for impacts.
#[derive(Clone)]
pub struct ImpactScheduler {
    handle: Handle,
    sink: Arc<dyn ImpactSink>,
    locks: Arc<HashMap<OrdnanceKind, Arc<Mutex<()>>>>,
    sequence: Arc<AtomicU64>,
}

impl ImpactScheduler {
    /// Scheduler spawning timers on `handle`.
    pub fn new(handle: Handle, sink: Arc<dyn ImpactSink>) -> Self {
        let locks = OrdnanceKind::iter()
            .map(|kind| (kind, Arc::new(Mutex::new(()))))
            .collect();
        Self {
            handle,
            sink,
            locks: Arc::new(locks),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Scheduler on the tokio runtime the caller runs in.
    pub fn current(sink: Arc<dyn ImpactSink>) -> Result<Self> {
        let handle = Handle::try_current().map_err(|_| RuntimeError::NoTimerRuntime)?;
        Ok(Self::new(handle, sink))
    }

    /// Schedules `ordnance` to land on `site` after `delay`.
    ///
    /// Callers must have deducted the unit from inventory already.
    pub fn schedule(
        &self,
        ordnance: &OrdnanceDefinition,
        site: ImpactSite,
        delay: Duration,
    ) -> ScheduledImpact {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let effect = ordnance.impact(site);
        let lock = self.lock_for(ordnance.kind);
        let sink = Arc::clone(&self.sink);

        tracing::info!(
            "Scheduled {} impact #{} at ({}, {}) in {:?}",
            ordnance.kind,
            sequence,
            site.tile_x,
            site.tile_y,
            delay
        );

        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;

            let _guard = lock.lock().await;
            tracing::info!(
                "{} impact #{} landed at ({}, {})",
                effect.ordnance,
                sequence,
                effect.site.tile_x,
                effect.site.tile_y
            );
            sink.apply(ImpactEvent {
                sequence,
                effect: effect.clone(),
            });
            effect
        });

        ScheduledImpact { sequence, task }
    }

    fn lock_for(&self, kind: OrdnanceKind) -> Arc<Mutex<()>> {
        // Every kind gets a lock at construction; the fallback is unreachable.
        self.locks
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| Arc::new(Mutex::new(())))
    }
}

/// Handle to an impact that has been scheduled.
///
/// Dropping it does not cancel the impact.
#[derive(Debug)]
pub struct ScheduledImpact {
    sequence: u64,
    task: JoinHandle<ImpactEffect>,
}

impl ScheduledImpact {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Waits until the impact has landed and been applied.
    pub async fn landed(self) -> Result<ImpactEffect> {
        self.task.await.map_err(RuntimeError::ImpactJoin)
    }
}
