/// Bucket counts the table grows through. Beyond the last entry the count keeps
/// doubling and is bumped to the next prime by trial division.
const PRIME_BUCKET_COUNTS: &[usize] = &[
    53, 97, 193, 389, 769, 1543, 3079, 6151, 12289, 24593, 49157, 98317, 196613, 393241,
    786433, 1572869, 3145739, 6291469, 12582917, 25165843,
];

/// Grow when `len > buckets * MAX_LOAD_NUM / MAX_LOAD_DEN`.
const MAX_LOAD_NUM: usize = 3;
const MAX_LOAD_DEN: usize = 4;

/// Set of distinct integers backed by a separately chained hash table.
///
/// The bucket for `v` is `v mod p` (non-negative remainder) where `p` is the
/// current prime bucket count. Each bucket is a short unsorted chain.
#[derive(Debug, Clone)]
pub struct UniqueIntSet {
    buckets: Vec<Vec<i64>>,
    len: usize,
}

impl Default for UniqueIntSet {
    fn default() -> Self {
        Self::new()
    }
}

impl UniqueIntSet {
    pub fn new() -> Self {
        Self::with_buckets(PRIME_BUCKET_COUNTS[0])
    }

    /// Pre-size the table so that `capacity` values fit without rehashing.
    pub fn with_capacity(capacity: usize) -> Self {
        let wanted = capacity.saturating_mul(MAX_LOAD_DEN) / MAX_LOAD_NUM + 1;
        Self::with_buckets(bucket_count_at_least(wanted))
    }

    fn with_buckets(count: usize) -> Self {
        let mut buckets = Vec::with_capacity(count);
        buckets.resize_with(count, Vec::new);
        Self { buckets, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Insert `value`. Returns false if it was already present.
    pub fn insert(&mut self, value: i64) -> bool {
        if self.contains(value) {
            return false;
        }
        if (self.len + 1) * MAX_LOAD_DEN > self.buckets.len() * MAX_LOAD_NUM {
            self.grow();
        }
        let idx = bucket_index(value, self.buckets.len());
        self.buckets[idx].push(value);
        self.len += 1;
        true
    }

    pub fn contains(&self, value: i64) -> bool {
        let idx = bucket_index(value, self.buckets.len());
        self.buckets[idx].iter().any(|&v| v == value)
    }

    /// All distinct values, in bucket order.
    pub fn values(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        for chain in &self.buckets {
            out.extend_from_slice(chain);
        }
        out
    }

    /// Consume the set, handing its values to the caller.
    pub fn into_values(self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        for chain in self.buckets {
            out.extend(chain);
        }
        out
    }

    fn grow(&mut self) {
        let new_count = bucket_count_at_least(self.buckets.len() * 2);
        let mut rehashed: Vec<Vec<i64>> = Vec::with_capacity(new_count);
        rehashed.resize_with(new_count, Vec::new);

        for chain in std::mem::take(&mut self.buckets) {
            for v in chain {
                rehashed[bucket_index(v, new_count)].push(v);
            }
        }
        self.buckets = rehashed;
    }
}

impl Extend<i64> for UniqueIntSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl FromIterator<i64> for UniqueIntSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

fn bucket_index(value: i64, bucket_count: usize) -> usize {
    // bucket_count is far below i64::MAX, and rem_euclid is never negative
    value.rem_euclid(bucket_count as i64) as usize
}

fn bucket_count_at_least(n: usize) -> usize {
    if let Some(&p) = PRIME_BUCKET_COUNTS.iter().find(|&&p| p >= n) {
        return p;
    }
    let mut candidate = n | 1;
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
