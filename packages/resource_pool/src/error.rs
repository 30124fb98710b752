use thiserror::Error;

use crate::{PoolId, ResourceId};

/// Reasons why a pool refused to take back a released resource.
///
/// Only pools using [`ReleasePolicy::Strict`][crate::ReleasePolicy::Strict] reject releases.
/// A rejected resource is dropped; the pool state is left unchanged.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum ReleaseError {
    /// The resource was created by a different pool.
    #[error("resource {resource_id} belongs to pool {owner} and cannot be released into pool {pool}")]
    ForeignResource {
        /// The identifier of the rejected resource, as assigned by its owner.
        resource_id: ResourceId,

        /// The pool that created the resource.
        owner: PoolId,

        /// The pool the resource was released into.
        pool: PoolId,
    },

    /// The resource is not checked out, typically because it was already released.
    #[error("resource {resource_id} is not checked out from pool {pool}")]
    NotCheckedOut {
        /// The identifier of the rejected resource.
        resource_id: ResourceId,

        /// The pool the resource was released into.
        pool: PoolId,
    },
}

/// The caller provided a release policy name that is not recognized.
#[derive(Debug, Error)]
#[error("invalid release policy '{invalid_value}': expected 'strict' or 'lenient'")]
pub struct ParsePolicyError {
    /// The value that could not be parsed.
    pub(crate) invalid_value: String,
}

impl ParsePolicyError {
    /// The value that could not be parsed.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }
}
