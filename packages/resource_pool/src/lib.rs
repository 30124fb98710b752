#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! This package provides [`ResourcePool`], a pool of a fixed number of pre-created resources
//! that callers borrow and hand back instead of creating and destroying their own.
//!
//! # Features
//!
//! - **Eager creation**: All resources are created up front, identified by `1..=capacity`.
//! - **First-in-first-out issuance**: The resource that has been available the longest is
//!   handed out first. Released resources go to the back of the line.
//! - **Non-blocking**: Acquiring from an exhausted pool returns `None` immediately.
//! - **Release checking**: By default, the pool refuses resources that belong to another pool
//!   or that were already released, so no resource is ever handed out twice at the same time.
//!   A [lenient policy][ReleasePolicy::Lenient] that accepts anything that fits is available.
//! - **Observability**: Pool activity is logged via `tracing` and counted via `nm` events.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZero;
//!
//! use resource_pool::ResourcePool;
//!
//! let mut pool = ResourcePool::new(NonZero::new(3).unwrap());
//!
//! // Resources are handed out in the order they were created.
//! let first = pool.acquire().unwrap();
//! let second = pool.acquire().unwrap();
//! let third = pool.acquire().unwrap();
//!
//! assert_eq!(first.process(), "Processing object 1");
//!
//! // Once every resource is checked out, there is nothing more to acquire.
//! assert!(pool.acquire().is_none());
//!
//! // A released resource is immediately available again.
//! pool.release(second).unwrap();
//! assert_eq!(pool.acquire().unwrap().id().get(), 2);
//! # drop((first, third));
//! ```
//!
//! # Thread safety
//!
//! The pool is not synchronized and requires an exclusive reference to acquire or release.

mod builder;
mod error;
mod metrics;
mod pool;
mod release_policy;
mod resource;

pub use builder::*;
pub use error::*;
pub use pool::*;
pub use release_policy::*;
pub use resource::*;
