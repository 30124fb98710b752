#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Walks a [`ResourcePool`] through its lifecycle and prints what happens along the way.
//!
//! Each round acquires every resource, processes it and releases it again. Afterwards, the
//! tool shows what an exhausted pool and a double release look like under the selected release
//! policy, then prints the metrics collected during the run.
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=resource_pool=trace`) to control log output.

use std::io;
use std::iter;
use std::num::NonZero;

use argh::FromArgs;
use new_zealand::nz;
use resource_pool::{ReleasePolicy, Resource, ResourcePool};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CAPACITY: NonZero<usize> = nz!(3);

/// Demonstrates acquiring and releasing resources from a bounded pool.
#[derive(Debug, FromArgs)]
struct Args {
    /// number of resources in the pool (default 3)
    #[argh(option, default = "DEFAULT_CAPACITY")]
    capacity: NonZero<usize>,

    /// how released resources are checked: strict or lenient (default strict)
    #[argh(option, default = "ReleasePolicy::Strict")]
    policy: ReleasePolicy,

    /// how many times to cycle every resource through the pool (default 1)
    #[argh(option, default = "1")]
    rounds: usize,

    /// log every pool operation unless RUST_LOG says otherwise
    #[argh(switch, short = 'v')]
    verbose: bool,
}

// Process entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
#[cfg_attr(coverage_nightly, coverage(off))]
fn main() {
    let args: Args = argh::from_env();

    init_tracing(args.verbose);

    for line in run(&args) {
        println!("{line}");
    }

    println!();
    println!("{}", nm::Report::collect());
}

#[cfg_attr(test, mutants::skip)] // Only affects log output.
#[cfg_attr(coverage_nightly, coverage(off))]
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "trace" } else { "info" };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_error| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs the walkthrough, returning the lines to show to the user.
fn run(args: &Args) -> Vec<String> {
    let mut pool = ResourcePool::builder()
        .capacity(args.capacity)
        .release_policy(args.policy)
        .name("demo")
        .build();

    info!(
        capacity = args.capacity.get(),
        policy = %args.policy,
        rounds = args.rounds,
        "starting walkthrough"
    );

    let mut output = Vec::new();

    for round in 1..=args.rounds {
        output.push(format!("Round {round}"));

        let held = drain(&mut pool);

        for resource in held {
            output.push(resource.process());

            if let Err(error) = pool.release(resource) {
                warn!(%error, "pool refused to take back a resource it handed out");
            }
        }
    }

    let mut held = drain(&mut pool);

    if pool.acquire().is_none() {
        output.push(format!(
            "Every resource is checked out ({} in total), nothing left to acquire",
            held.len()
        ));
    }

    if let Some(resource) = held.pop() {
        let copy = resource.clone();
        let id = resource.id();

        output.push(format!("Releasing resource {id}: {:?}", pool.release(resource)));
        output.push(format!(
            "Releasing resource {id} again: {:?}",
            pool.release(copy)
        ));
    }

    let available = pool
        .available_ids()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    output.push(format!("Available: [{available}]"));

    output
}

fn drain(pool: &mut ResourcePool) -> Vec<Resource> {
    iter::from_fn(|| pool.acquire()).collect()
}
