use std::borrow::Cow;
use std::collections::VecDeque;
use std::iter;
use std::num::NonZero;

use foldhash::{HashSet, HashSetExt};
use nm::Event;
use tracing::{debug, trace};

use crate::metrics::{
    ACQUIRED, AVAILABLE_AFTER_ACQUIRE, DISCARDED, EXHAUSTED, REJECTED, RETURNED,
};
use crate::{PoolId, ReleaseError, ReleasePolicy, Resource, ResourceId, ResourcePoolBuilder};

/// A pool of a fixed number of pre-created resources that are handed out and taken back.
///
/// All resources are created when the pool is created, with identifiers counting up from 1.
/// The pool never creates more resources later on and never holds more than its capacity.
///
/// * [`acquire()`][1] hands out the resource that has been available the longest, or `None`
///   if every resource is checked out. It never blocks and never allocates a new resource.
/// * [`release()`][2] hands a resource back, making it the last in line to be acquired again.
///
/// # Release checking
///
/// What happens when a resource is released depends on the [`ReleasePolicy`] of the pool.
/// The default [`ReleasePolicy::Strict`] rejects resources from other pools and resources
/// that are not currently checked out, so the pool never hands out the same resource twice.
/// [`ReleasePolicy::Lenient`] accepts anything that fits and silently discards the rest.
///
/// # Thread safety
///
/// The pool is not synchronized. Acquiring and releasing requires an exclusive reference, so
/// if you want to share a pool between threads you need to wrap it in a mutex of your choice.
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
/// let first = pool.acquire().unwrap();
/// let second = pool.acquire().unwrap();
/// assert!(pool.acquire().is_none());
///
/// println!("{}", first.process());
///
/// pool.release(first).unwrap();
/// pool.release(second).unwrap();
/// assert_eq!(pool.available(), 2);
/// ```
///
/// [1]: Self::acquire
/// [2]: Self::release
#[derive(Debug)]
pub struct ResourcePool {
    id: PoolId,
    name: Cow<'static, str>,
    capacity: NonZero<usize>,
    release_policy: ReleasePolicy,

    /// Resources eligible for acquisition, in the order they will be handed out.
    ///
    /// Under the lenient policy the same resource may appear here more than once.
    available: VecDeque<Resource>,

    /// Identifiers of our own resources that are currently handed out.
    checked_out: HashSet<ResourceId>,
}

/// What happened to a resource that was accepted by [`ResourcePool::release()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ReleaseOutcome {
    /// The resource was appended to the available collection and can be acquired again.
    Returned,

    /// The available collection was already full, so the resource was dropped.
    ///
    /// Only pools using [`ReleasePolicy::Lenient`] discard resources.
    Discarded,
}

impl ResourcePool {
    pub(crate) fn new_inner(
        capacity: NonZero<usize>,
        release_policy: ReleasePolicy,
        name: Cow<'static, str>,
    ) -> Self {
        let id = PoolId::next();

        let available = iter::successors(Some(NonZero::<usize>::MIN), |previous| {
            previous.checked_add(1)
        })
        .take(capacity.get())
        .map(|value| Resource::new(ResourceId::new(value), id))
        .collect::<VecDeque<_>>();

        debug!(
            pool = %name,
            pool_id = %id,
            capacity = capacity.get(),
            %release_policy,
            "created resource pool"
        );

        Self {
            id,
            name,
            capacity,
            release_policy,
            available,
            checked_out: HashSet::with_capacity(capacity.get()),
        }
    }

    /// Creates a new [`ResourcePool`] with `capacity` resources and the default configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::num::NonZero;
    ///
    /// use resource_pool::ResourcePool;
    ///
    /// let pool = ResourcePool::new(NonZero::new(3).unwrap());
    ///
    /// assert_eq!(pool.capacity().get(), 3);
    /// assert_eq!(pool.available(), 3);
    /// assert_eq!(pool.outstanding(), 0);
    /// ```
    #[must_use]
    pub fn new(capacity: NonZero<usize>) -> Self {
        Self::builder().capacity(capacity).build()
    }

    /// Starts building a new [`ResourcePool`].
    ///
    /// Use this when you want to customize the pool configuration beyond the defaults.
    pub fn builder() -> ResourcePoolBuilder {
        ResourcePoolBuilder::new()
    }

    /// Takes the resource that has been available the longest.
    ///
    /// Returns `None` if every resource is checked out.
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
    /// assert_eq!(resource.id().get(), 1);
    ///
    /// // The only resource is checked out.
    /// assert!(pool.acquire().is_none());
    /// ```
    #[must_use]
    pub fn acquire(&mut self) -> Option<Resource> {
        let Some(resource) = self.available.pop_front() else {
            EXHAUSTED.with(Event::observe_once);
            trace!(pool = %self.name, "no resource available");
            return None;
        };

        if resource.pool_id() == self.id {
            self.checked_out.insert(resource.id());
        }

        ACQUIRED.with(Event::observe_once);
        AVAILABLE_AFTER_ACQUIRE.with(|e| e.observe(self.available.len()));
        trace!(pool = %self.name, resource_id = %resource.id(), "acquired resource");

        Some(resource)
    }

    /// Hands a resource back to the pool.
    ///
    /// An accepted resource is appended to the end of the available collection, so every
    /// resource that was already available is acquired before it.
    ///
    /// # Errors
    ///
    /// Under [`ReleasePolicy::Strict`], returns [`ReleaseError::ForeignResource`] if the
    /// resource was created by another pool and [`ReleaseError::NotCheckedOut`] if the
    /// resource is not currently checked out from this pool. The pool is unchanged in both
    /// cases.
    ///
    /// Under [`ReleasePolicy::Lenient`], never returns an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::num::NonZero;
    ///
    /// use resource_pool::{ReleaseError, ReleaseOutcome, ResourcePool};
    ///
    /// let mut pool = ResourcePool::new(NonZero::new(2).unwrap());
    ///
    /// let resource = pool.acquire().unwrap();
    /// let copy = resource.clone();
    ///
    /// assert_eq!(pool.release(resource), Ok(ReleaseOutcome::Returned));
    ///
    /// // The same resource cannot be released twice.
    /// assert!(matches!(
    ///     pool.release(copy),
    ///     Err(ReleaseError::NotCheckedOut { .. })
    /// ));
    /// ```
    pub fn release(&mut self, resource: Resource) -> Result<ReleaseOutcome, ReleaseError> {
        match self.release_policy {
            ReleasePolicy::Strict => self.release_strict(resource),
            ReleasePolicy::Lenient => Ok(self.release_lenient(resource)),
        }
    }

    fn release_strict(&mut self, resource: Resource) -> Result<ReleaseOutcome, ReleaseError> {
        if resource.pool_id() != self.id {
            REJECTED.with(Event::observe_once);
            debug!(
                pool = %self.name,
                resource_id = %resource.id(),
                owner = %resource.pool_id(),
                "rejected release of resource owned by another pool"
            );

            return Err(ReleaseError::ForeignResource {
                resource_id: resource.id(),
                owner: resource.pool_id(),
                pool: self.id,
            });
        }

        if !self.checked_out.remove(&resource.id()) {
            REJECTED.with(Event::observe_once);
            debug!(
                pool = %self.name,
                resource_id = %resource.id(),
                "rejected release of resource that is not checked out"
            );

            return Err(ReleaseError::NotCheckedOut {
                resource_id: resource.id(),
                pool: self.id,
            });
        }

        // Every resource we created is either available or checked out, and we just confirmed
        // this one was checked out, so there is guaranteed to be room for it.
        debug_assert!(self.available.len() < self.capacity.get());

        self.push_available(resource);
        Ok(ReleaseOutcome::Returned)
    }

    fn release_lenient(&mut self, resource: Resource) -> ReleaseOutcome {
        if self.available.len() >= self.capacity.get() {
            DISCARDED.with(Event::observe_once);
            debug!(
                pool = %self.name,
                resource_id = %resource.id(),
                "discarded released resource because the pool is full"
            );

            return ReleaseOutcome::Discarded;
        }

        if resource.pool_id() == self.id {
            self.checked_out.remove(&resource.id());
        }

        self.push_available(resource);
        ReleaseOutcome::Returned
    }

    fn push_available(&mut self, resource: Resource) {
        RETURNED.with(Event::observe_once);
        trace!(pool = %self.name, resource_id = %resource.id(), "released resource");

        self.available.push_back(resource);
    }

    /// The process-unique identifier of this pool.
    #[must_use]
    pub fn id(&self) -> PoolId {
        self.id
    }

    /// The human-readable name of this pool.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of resources the pool was created with.
    ///
    /// The pool never holds more than this many resources in its available collection.
    #[must_use]
    pub fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    /// The policy that governs how released resources are treated.
    #[must_use]
    pub fn release_policy(&self) -> ReleasePolicy {
        self.release_policy
    }

    /// The number of entries in the available collection.
    ///
    /// Under [`ReleasePolicy::Lenient`] this counts duplicate entries separately.
    #[must_use]
    pub fn available(&self) -> usize {
        self.available.len()
    }

    /// The number of distinct resources of this pool that are currently checked out.
    ///
    /// Under [`ReleasePolicy::Strict`], `available() + outstanding() == capacity()` always
    /// holds.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.checked_out.len()
    }

    /// Whether the next [`acquire()`][Self::acquire] will return `None`.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.available.is_empty()
    }

    /// The identifiers of the available resources, in the order they will be acquired.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::num::NonZero;
    ///
    /// use resource_pool::ResourcePool;
    ///
    /// let mut pool = ResourcePool::new(NonZero::new(3).unwrap());
    ///
    /// let first = pool.acquire().unwrap();
    /// pool.release(first).unwrap();
    ///
    /// let ids = pool.available_ids().map(|id| id.get()).collect::<Vec<_>>();
    /// assert_eq!(ids, [2, 3, 1]);
    /// ```
    pub fn available_ids(&self) -> impl ExactSizeIterator<Item = ResourceId> {
        self.available.iter().map(Resource::id)
    }
}
