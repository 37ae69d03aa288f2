use std::env;

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::StdRng;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

/// Seed shared by every pattern generator in a test run. Set `OVERRIDE_SEED`
/// to reproduce a failing run.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| seed.parse().ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

//     .
// : . : :
// :.:::.::
pub fn random(len: usize) -> Vec<i32> {
    new_rng()
        .sample_iter(rand::distributions::Standard)
        .take(len)
        .collect()
}

// :.:.:.::
pub fn random_uniform(len: usize, lo: i32, hi: i32) -> Vec<i32> {
    let dist = Uniform::new_inclusive(lo, hi);

    new_rng().sample_iter(dist).take(len).collect()
}

// Zipfian distributed values, low exponents give many duplicates.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).unwrap();

    new_rng()
        .sample_iter(dist)
        .take(len)
        .map(|val| val as i32)
        .collect()
}

// :::::::
pub fn all_equal(len: usize) -> Vec<i32> {
    (0..len).map(|_| 66).collect()
}

//   .:
//  .:::
// .:::::
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

// :.
// :::.
// :::::.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

// .:  :.  .:
// :::.::::::
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 || saw_count == 0 {
        return ascending(len);
    }

    let chunk_len = (len / saw_count).max(1);
    let mut vals = Vec::with_capacity(len);
    let mut up = true;

    while vals.len() < len {
        let chunk_end = (vals.len() + chunk_len).min(len);
        let chunk = (vals.len() as i32)..(chunk_end as i32);
        if up {
            vals.extend(chunk);
        } else {
            vals.extend(chunk.rev());
        }
        up = !up;
    }

    vals
}
