//! Shows how the two release policies treat a resource that is released twice:
//!
//! * A strict pool refuses the second release.
//! * A lenient pool stores the resource twice and later hands it out twice.

use std::num::NonZero;

use new_zealand::nz;
use resource_pool::{ReleasePolicy, ResourcePool};

const CAPACITY: NonZero<usize> = nz!(3);

fn main() {
    for policy in [ReleasePolicy::Strict, ReleasePolicy::Lenient] {
        let mut pool = ResourcePool::builder()
            .capacity(CAPACITY)
            .release_policy(policy)
            .build();

        // Take everything so that the pool has room for two copies of the same resource.
        let resource = pool.acquire().unwrap();
        let _others = (1..CAPACITY.get())
            .map(|_| pool.acquire().unwrap())
            .collect::<Vec<_>>();

        let copy = resource.clone();

        println!("{policy} pool, first release: {:?}", pool.release(resource));
        println!("{policy} pool, second release: {:?}", pool.release(copy));

        let available = pool
            .available_ids()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{policy} pool now has available: [{available}]");
    }
}
