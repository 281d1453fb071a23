use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use lexia_core::config::SchedulerConfig;
use lexia_core::traits::TermGateway;

use crate::orchestrator::LifecycleOrchestrator;

/// Periodic trigger for the combined generation+decay job.
///
/// Each tick fires after the configured interval plus uniform jitter. The
/// job itself runs as a detached task guarded by an in-flight flag: a tick
/// that arrives while the previous job is still running is skipped with a
/// notice, never queued. `start`/`stop` are idempotent; stopping cancels the
/// ticker but lets an in-flight job run to completion.
pub struct CycleScheduler<G> {
    orchestrator: Arc<LifecycleOrchestrator<G>>,
    config: SchedulerConfig,
    running: Arc<AtomicBool>,
    in_flight: Arc<AtomicBool>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl<G: TermGateway + 'static> CycleScheduler<G> {
    pub fn new(orchestrator: Arc<LifecycleOrchestrator<G>>, config: SchedulerConfig) -> Self {
        Self {
            orchestrator,
            config,
            running: Arc::new(AtomicBool::new(false)),
            in_flight: Arc::new(AtomicBool::new(false)),
            ticker: Mutex::new(None),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start the periodic ticker. A no-op if already started.
    pub fn start(&self) {
        if self.running.swap(true, Ordering::SeqCst) {
            debug!("scheduler already running");
            return;
        }
        info!(
            interval_minutes = self.config.interval_minutes,
            jitter_secs = self.config.jitter_secs,
            "scheduler started"
        );

        let orchestrator = self.orchestrator.clone();
        let config = self.config.clone();
        let running = self.running.clone();
        let in_flight = self.in_flight.clone();

        let handle = tokio::spawn(async move {
            loop {
                let jitter = rand::thread_rng().gen_range(0..=config.jitter_secs);
                let delay = Duration::from_secs(config.interval_minutes * 60 + jitter);
                tokio::time::sleep(delay).await;
                if !running.load(Ordering::SeqCst) {
                    break;
                }

                if in_flight.swap(true, Ordering::SeqCst) {
                    warn!("previous job still running; skipping this trigger");
                    continue;
                }
                let orchestrator = orchestrator.clone();
                let in_flight = in_flight.clone();
                let pause = Duration::from_secs(config.inter_cycle_pause_secs);
                tokio::spawn(async move {
                    orchestrator.run_generation_cycle(None).await;
                    tokio::time::sleep(pause).await;
                    orchestrator.run_decay_cycle().await;
                    in_flight.store(false, Ordering::SeqCst);
                });
            }
        });

        if let Ok(mut ticker) = self.ticker.lock() {
            *ticker = Some(handle);
        }
    }

    /// Stop the ticker. A no-op if already stopped.
    pub fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            debug!("scheduler already stopped");
            return;
        }
        if let Ok(mut ticker) = self.ticker.lock() {
            if let Some(handle) = ticker.take() {
                handle.abort();
            }
        }
        info!("scheduler stopped");
    }
}

impl<G> Drop for CycleScheduler<G> {
    fn drop(&mut self) {
        if let Ok(mut ticker) = self.ticker.lock() {
            if let Some(handle) = ticker.take() {
                handle.abort();
            }
        }
    }
}
