use std::hash::{DefaultHasher, Hash, Hasher};

/// Prime modulus of the MAD compression step
const MAD_PRIME: u64 = 109_345_121;

/// Multiply-add-divide compression of a key hash into `[0, capacity)`.
///
/// `scale` must be non-zero modulo `MAD_PRIME`.
#[derive(Debug, Clone, Copy)]
pub struct MadHasher {
    scale: u64,
    shift: u64,
}

impl MadHasher {
    pub fn new(scale: u64, shift: u64) -> Self {
        let scale = scale % MAD_PRIME;
        MadHasher {
            scale: if scale == 0 { 1 } else { scale },
            shift: shift % MAD_PRIME,
        }
    }

    pub fn slot<K: Hash + ?Sized>(&self, key: &K, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        let h = raw_hash(key) % MAD_PRIME;
        let mixed = (self.scale * h + self.shift) % MAD_PRIME;
        (mixed % capacity as u64) as usize
    }
}

impl Default for MadHasher {
    fn default() -> Self {
        MadHasher::new(7_919, 104_729)
    }
}

/// Deterministic hash of a key (SipHash with fixed keys)
pub fn raw_hash<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Smallest prime >= n
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

/// Capacity after a resize: next prime at or above twice the current one
pub fn grown_capacity(capacity: usize) -> usize {
    next_prime(capacity.saturating_mul(2).max(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes() {
        assert!(is_prime(2));
        assert!(is_prime(401));
        assert!(!is_prime(400));
        assert_eq!(next_prime(400), 401);
        assert_eq!(next_prime(0), 2);
        assert_eq!(grown_capacity(200), 401);
        assert_eq!(grown_capacity(500), 1009);
    }

    #[test]
    fn slot_is_stable_and_in_range() {
        let hasher = MadHasher::default();
        for key in ["fantasy", "to-read", "classics"] {
            let a = hasher.slot(key, 1000);
            let b = hasher.slot(key, 1000);
            assert_eq!(a, b);
            assert!(a < 1000);
        }
    }
}
