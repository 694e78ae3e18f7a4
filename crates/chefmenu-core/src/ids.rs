//! Dish id generation
//!
//! Ids are produced by an injected generator instead of the wall clock, so two
//! dishes added in the same instant still get distinct ids.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::item::MenuItem;

#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Monotonic counter, rendered as a decimal string
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Starts past the highest numeric id in `existing`
    pub fn after(existing: &[MenuItem]) -> Self {
        let highest = existing
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::new(highest.saturating_add(1))
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Sequential,
    Uuid,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Sequential => "sequential",
            IdStrategy::Uuid => "uuid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Some(IdStrategy::Sequential),
            "uuid" => Some(IdStrategy::Uuid),
            _ => None,
        }
    }

    pub fn build(&self, existing: &[MenuItem]) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::after(existing)),
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
        }
    }
}

impl Default for IdStrategy {
    fn default() -> Self {
        IdStrategy::Sequential
    }
}
