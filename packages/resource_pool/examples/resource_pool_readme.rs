//! Example used in the package README and crate-level documentation.

use std::num::NonZero;

use resource_pool::ResourcePool;

fn main() {
    let mut pool = ResourcePool::new(NonZero::new(3).unwrap());

    let first = pool.acquire().unwrap();
    let second = pool.acquire().unwrap();
    let third = pool.acquire().unwrap();

    for resource in [first, second, third] {
        println!("{}", resource.process());
        pool.release(resource).unwrap();
    }
}
