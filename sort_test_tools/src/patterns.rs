use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Provides a set of input patterns for testing and benchmarking the ordering engine.
/// Currently limited to i32 values.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    let directions = random_uniform((len / chunk_len) + 1, 0..=1);

    for (chunk, direction) in vals.chunks_mut(chunk_len).zip(directions) {
        if direction == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);

    vals[..len / 2].sort_unstable();
    vals[len / 2..].sort_unstable_by(|a, b| b.cmp(a));

    vals
}

/// Musser's median-of-3 killer, degrades quicksort with a plain first/middle/last median to
/// quadratic time.
pub fn median_of_three_killer(len: usize) -> Vec<i32> {
    // .: .: .:  . . . .
    //  :  :  :  ::::::::

    let k = len / 2;
    let mut vals = vec![0i32; len];

    for i in 1..=k {
        if i % 2 == 1 {
            vals[i - 1] = i as i32;
            vals[i] = (k + i) as i32;
        }
        vals[k + i - 1] = (2 * i) as i32;
    }

    if len % 2 == 1 {
        vals[len - 1] = len as i32;
    }

    vals
}

/// McIlroy's adversary for quicksort, "A Killer Adversary for Quicksort" (1999).
///
/// Element values are decided lazily during comparison, each time in the way that hurts the
/// sort the most. Elements are ids into the value table, all of which start out as `gas`, larger
/// than any decided value.
pub struct Antiqsort {
    vals: Vec<usize>,
    gas: usize,
    solid: usize,
    candidate: usize,
}

impl Antiqsort {
    pub fn new(len: usize) -> Self {
        Self {
            vals: vec![len; len],
            gas: len,
            solid: 0,
            candidate: 0,
        }
    }

    /// The element ids to sort with [`Antiqsort::is_less`].
    pub fn ids(&self) -> Vec<usize> {
        (0..self.vals.len()).collect()
    }

    pub fn is_less(&mut self, x: &usize, y: &usize) -> bool {
        let (x, y) = (*x, *y);

        if self.vals[x] == self.gas && self.vals[y] == self.gas {
            if x == self.candidate {
                self.freeze(x);
            } else {
                self.freeze(y);
            }
        }

        if self.vals[x] == self.gas {
            self.candidate = x;
        } else if self.vals[y] == self.gas {
            self.candidate = y;
        }

        self.vals[x] < self.vals[y]
    }

    /// Values decided so far, indexed by element id. Undecided elements hold `gas`.
    pub fn values(&self) -> &[usize] {
        &self.vals
    }

    fn freeze(&mut self, x: usize) {
        self.vals[x] = self.solid;
        self.solid += 1;
    }
}

/// Returns the seed used for all random patterns of this process.
///
/// The seed is random once per process, unless the `OVERRIDE_SEED` environment variable pins it.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"))
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
