use rand::Rng;

/// `n` values drawn uniformly from `0..max_value`.
pub fn generate_random_array<R: Rng>(rng: &mut R, n: usize, max_value: i64) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(0..max_value)).collect()
}

/// Random inclusive range inside `0..n`, `n` must be positive.
pub fn random_range<R: Rng>(rng: &mut R, n: usize) -> (usize, usize) {
    let l = rng.gen_range(0..n);
    let r = rng.gen_range(l..n);
    (l, r)
}
