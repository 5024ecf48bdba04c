// Seedable random source used for card sampling.
//
// Xoshiro256++ with SplitMix64 seeding. The algorithm is pinned here instead of
// borrowed from a general-purpose RNG crate so that a given seed reproduces
// the same card batch on every platform and every release of this crate.

/// Anything that can hand out uniformly distributed `u64`s.
///
/// Sampling helpers are provided on top of `next_u64`, so every draw in a
/// generation run is routed through one stream in a fixed order.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform integer in `[low, high)`, rejection sampled to avoid modulo bias.
    fn range_usize(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low < high, "range_usize: low must be less than high");
        let range = (high - low) as u64;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1)) as usize;
        }
        let threshold = range.wrapping_neg() % range;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range) as usize;
            }
        }
    }

    /// Draw `k` distinct items from `items`, in draw order.
    ///
    /// Partial Fisher-Yates over an index table; `k` is clamped to `items.len()`.
    fn sample<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T>
    where
        Self: Sized,
    {
        let k = k.min(items.len());
        let mut indices: Vec<usize> = (0..items.len()).collect();
        for i in 0..k {
            let j = self.range_usize(i, items.len());
            indices.swap(i, j);
        }
        indices[..k].iter().map(|&i| items[i].clone()).collect()
    }
}

/// Xoshiro256++ generator.
#[derive(Debug, Clone)]
pub struct BingoRng {
    s: [u64; 4],
}

impl BingoRng {
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Seed from the wall clock. Callers should log the returned seed if they
    /// want the run to be reproducible.
    pub fn entropy_seed() -> u64 {
        let now = chrono::Utc::now();
        let nanos = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp());
        let mut sm = nanos as u64 ^ u64::from(std::process::id()).rotate_left(32);
        splitmix64(&mut sm)
    }
}

impl RandomSource for BingoRng {
    fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
