//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `timesplit_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use timesplit_core::{FacetCache, SplitAccessor, SplitConfig};

fn main() {
    println!("timesplit_core version={}", timesplit_core::core_version());

    let config = SplitConfig::default();
    let mut scheduled_at = None;
    let mut facets = FacetCache::new();
    let mut accessor = SplitAccessor::new(&mut scheduled_at, &mut facets, &config);
    accessor.set_date("2021-05-04");
    accessor.set_time("09:30");

    match accessor.composite() {
        Some(at) => println!("timesplit_core composed={}", at.format("%Y-%m-%dT%H:%MZ")),
        None => println!("timesplit_core composed=none"),
    }
}
