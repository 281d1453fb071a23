//! # lexia-lifecycle
//!
//! The orchestration layer: periodic generation and decay cycles over the
//! registry and gateway, plus out-of-band feedback intake. Cycles isolate
//! per-item failures and report counts; the scheduler guarantees at most
//! one combined job runs at a time.

pub mod orchestrator;
pub mod scheduler;
pub mod topics;

pub use orchestrator::LifecycleOrchestrator;
pub use scheduler::CycleScheduler;
pub use topics::{random_language, random_topic, topic_description, Topic, TOPICS};
