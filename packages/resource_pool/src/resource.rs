use std::fmt;
use std::num::NonZero;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a [`Resource`] within the pool that created it.
///
/// Identifiers are assigned at pool construction time, starting from 1 and counting up to the
/// capacity of the pool. The identifier of a resource never changes.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ResourceId(NonZero<usize>);

impl ResourceId {
    pub(crate) const fn new(value: NonZero<usize>) -> Self {
        Self(value)
    }

    /// The numeric value of the identifier.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::num::NonZero;
    ///
    /// use resource_pool::ResourcePool;
    ///
    /// let mut pool = ResourcePool::new(NonZero::new(2).unwrap());
    ///
    /// let resource = pool.acquire().unwrap();
    /// assert_eq!(resource.id().get(), 1);
    /// ```
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a [`ResourcePool`][crate::ResourcePool] within the current process.
///
/// Every resource remembers the pool that created it, which allows a pool to recognize
/// resources that are being released into the wrong pool.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PoolId(u64);

/// Source of process-unique pool identifiers.
static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(0);

impl PoolId {
    pub(crate) fn next() -> Self {
        // We only need uniqueness, not any ordering with other memory operations.
        Self(NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A unit of work capability managed by a [`ResourcePool`][crate::ResourcePool].
///
/// Resources are created by the pool when the pool itself is created and are then handed out
/// via [`acquire()`][1] and handed back via [`release()`][2]. A resource is exclusively yours
/// between those two calls.
///
/// Cloning a resource creates a structural copy with the same identity. The pool treats clones
/// as the same resource, so releasing both the original and a clone is a double release.
///
/// [1]: crate::ResourcePool::acquire
/// [2]: crate::ResourcePool::release
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Resource {
    id: ResourceId,
    pool_id: PoolId,
}

impl Resource {
    pub(crate) const fn new(id: ResourceId, pool_id: PoolId) -> Self {
        Self { id, pool_id }
    }

    /// The identifier assigned to this resource by its pool.
    #[must_use]
    pub const fn id(&self) -> ResourceId {
        self.id
    }

    /// The identifier of the pool that created this resource.
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    /// Performs the work this resource is capable of, describing what was done.
    ///
    /// The description only depends on the identity of the resource, so it is the same no
    /// matter how many times the resource has gone through the pool.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::num::NonZero;
    ///
    /// use resource_pool::ResourcePool;
    ///
    /// let mut pool = ResourcePool::new(NonZero::new(1).unwrap());
    ///
    /// let resource = pool.acquire().unwrap();
    /// assert_eq!(resource.process(), "Processing object 1");
    /// ```
    #[must_use]
    pub fn process(&self) -> String {
        format!("Processing object {}", self.id)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use new_zealand::nz;
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Resource: Send, Sync, Clone, fmt::Debug);
    assert_impl_all!(ResourceId: Send, Sync, Copy, fmt::Display);
    assert_impl_all!(PoolId: Send, Sync, Copy, fmt::Display);

    #[test]
    fn process_mentions_id() {
        let resource = Resource::new(ResourceId::new(nz!(7)), PoolId::next());

        assert_eq!(resource.process(), "Processing object 7");
    }

    #[test]
    fn process_is_stable() {
        let resource = Resource::new(ResourceId::new(nz!(3)), PoolId::next());

        let first = resource.process();
        let second = resource.process();

        assert_eq!(first, second);
    }

    #[test]
    fn clone_keeps_identity() {
        let resource = Resource::new(ResourceId::new(nz!(2)), PoolId::next());
        let clone = resource.clone();

        assert_eq!(resource, clone);
        assert_eq!(clone.id().get(), 2);
        assert_eq!(clone.pool_id(), resource.pool_id());
    }

    #[test]
    fn pool_ids_are_unique() {
        let a = PoolId::next();
        let b = PoolId::next();

        assert_ne!(a, b);
    }

    #[test]
    fn resource_id_display() {
        assert_eq!(ResourceId::new(nz!(42)).to_string(), "42");
    }
}
