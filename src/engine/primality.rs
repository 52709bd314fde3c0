// Primality Test

/// Trial division over candidates of the form 6k±1.
///
/// The bound is checked as `i * i <= n` in `u64`, so the whole `i64` range
/// is covered without a floating point square root.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let n = n as u64;
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // i stays below 2^32 + 6 here, so i * i never leaves u64.
    let mut i: u64 = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
