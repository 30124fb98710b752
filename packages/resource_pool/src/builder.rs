use std::borrow::Cow;
use std::num::NonZero;

use crate::{ReleasePolicy, ResourcePool};

/// Builder for creating an instance of [`ResourcePool`].
///
/// The capacity is mandatory. Everything else has a default that suits most use cases.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use resource_pool::{ReleasePolicy, ResourcePool};
///
/// let pool = ResourcePool::builder()
///     .capacity(NonZero::new(8).unwrap())
///     .release_policy(ReleasePolicy::Strict)
///     .name("database_connections")
///     .build();
///
/// assert_eq!(pool.capacity().get(), 8);
/// assert_eq!(pool.name(), "database_connections");
/// ```
#[derive(Debug)]
#[must_use]
pub struct ResourcePoolBuilder {
    capacity: Option<NonZero<usize>>,
    release_policy: ReleasePolicy,
    name: Cow<'static, str>,
}

impl ResourcePoolBuilder {
    pub(crate) fn new() -> Self {
        Self {
            capacity: None,
            release_policy: ReleasePolicy::default(),
            name: Cow::Borrowed(DEFAULT_NAME),
        }
    }

    /// Sets the number of resources the pool creates up front.
    ///
    /// This is also the upper bound on how many resources the pool will ever hold.
    pub fn capacity(mut self, capacity: NonZero<usize>) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the [release policy][ReleasePolicy] for the pool. This governs how the pool
    /// treats resources that are handed back to it.
    pub fn release_policy(mut self, policy: ReleasePolicy) -> Self {
        self.release_policy = policy;
        self
    }

    /// Sets a human-readable name for the pool, used to identify it in log output.
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds the pool with the specified configuration, creating all of its resources.
    ///
    /// # Panics
    ///
    /// Panics if the capacity has not been set.
    #[must_use]
    pub fn build(self) -> ResourcePool {
        let capacity = self
            .capacity
            .expect("capacity must be set before building a ResourcePool");

        ResourcePool::new_inner(capacity, self.release_policy, self.name)
    }
}

/// Name given to pools that were not explicitly named.
const DEFAULT_NAME: &str = "resource_pool";

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use new_zealand::nz;

    use super::*;

    #[test]
    fn defaults() {
        let pool = ResourcePoolBuilder::new().capacity(nz!(2)).build();

        assert_eq!(pool.capacity().get(), 2);
        assert_eq!(pool.release_policy(), ReleasePolicy::Strict);
        assert_eq!(pool.name(), DEFAULT_NAME);
    }

    #[test]
    fn all_options() {
        let pool = ResourcePoolBuilder::new()
            .capacity(nz!(5))
            .release_policy(ReleasePolicy::Lenient)
            .name(String::from("workers"))
            .build();

        assert_eq!(pool.capacity().get(), 5);
        assert_eq!(pool.release_policy(), ReleasePolicy::Lenient);
        assert_eq!(pool.name(), "workers");
    }

    #[test]
    #[should_panic]
    fn build_without_capacity_panics() {
        drop(ResourcePoolBuilder::new().build());
    }
}
