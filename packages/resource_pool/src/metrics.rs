//! Metrics for the resource pool.
//!
//! All pools on a thread share the same events; the events are not labeled per pool.

use nm::{Event, Magnitude};

/// Histogram buckets for the number of resources left available after an acquire.
///
/// Pools are expected to be small, so we only distinguish the low end in detail. A value of
/// zero means the acquire took the last available resource.
const AVAILABLE_AFTER_ACQUIRE_BUCKETS: &[Magnitude] = &[0, 1, 2, 4, 8, 16, 32, 64, 128, 256];

thread_local! {
    /// A resource was handed out by `acquire()`.
    pub(crate) static ACQUIRED: Event = Event::builder()
        .name("resource_pool_acquired")
        .build();

    /// `acquire()` found no available resource.
    pub(crate) static EXHAUSTED: Event = Event::builder()
        .name("resource_pool_exhausted")
        .build();

    /// How many resources remained available after a successful `acquire()`.
    pub(crate) static AVAILABLE_AFTER_ACQUIRE: Event = Event::builder()
        .name("resource_pool_available_after_acquire")
        .histogram(AVAILABLE_AFTER_ACQUIRE_BUCKETS)
        .build();

    /// A released resource was put back into the available collection.
    pub(crate) static RETURNED: Event = Event::builder()
        .name("resource_pool_returned")
        .build();

    /// A released resource was dropped because the available collection was full.
    pub(crate) static DISCARDED: Event = Event::builder()
        .name("resource_pool_discarded")
        .build();

    /// A released resource was refused by a strict pool.
    pub(crate) static REJECTED: Event = Event::builder()
        .name("resource_pool_rejected")
        .build();
}
