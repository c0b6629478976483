// Deterministic-shape input generators. Allocation is fallible so a
// driver can report a failed size and move on instead of aborting.

use rand::Rng;
use std::collections::TryReserveError;

/// A requested buffer could not be allocated.
#[derive(Debug, thiserror::Error)]
#[error("could not allocate a buffer of {len} elements: {source}")]
pub struct AllocError {
    pub len: usize,
    source: TryReserveError,
}

fn reserve(len: usize) -> Result<Vec<i32>, AllocError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|source| AllocError { len, source })?;
    Ok(buf)
}

/// Pseudo-random fill in `[0, modulus)`.
pub fn random(len: usize, modulus: i32) -> Result<Vec<i32>, AllocError> {
    let mut buf = reserve(len)?;
    let mut rng = rand::thread_rng();
    buf.extend((0..len).map(|_| rng.gen_range(0..modulus)));
    Ok(buf)
}

/// `0, 1, ..., len - 1`: already sorted, and the shape binary search
/// requires.
pub fn ascending(len: usize) -> Result<Vec<i32>, AllocError> {
    let mut buf = reserve(len)?;
    buf.extend(0..len as i32);
    Ok(buf)
}

/// `len, len - 1, ..., 1`: the reverse-ordered worst case.
pub fn descending(len: usize) -> Result<Vec<i32>, AllocError> {
    let mut buf = reserve(len)?;
    buf.extend((1..=len as i32).rev());
    Ok(buf)
}
