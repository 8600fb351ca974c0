use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::StickyConfig;
use crate::render::Regions;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of one sticky table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    pub fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// DOM id of the root container, for hosts that look it up by selector.
    pub fn dom_id(self) -> String {
        format!("sticky-table-{}", self.0)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything a synchronization pass needs to know about its instance.
#[derive(Debug, Clone, Copy)]
pub struct SyncContext<'a> {
    pub instance: InstanceId,
    pub config: &'a StickyConfig,
    pub regions: &'a Regions,
}

impl<'a> SyncContext<'a> {
    pub fn new(instance: InstanceId, config: &'a StickyConfig, regions: &'a Regions) -> Self {
        Self {
            instance,
            config,
            regions,
        }
    }
}
