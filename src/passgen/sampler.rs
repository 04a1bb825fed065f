//! Uniform sampling with replacement.

use crate::error::{PassgenError, Result};
use rand::Rng;

/// Draws `length` characters from `pool`, each one independently and uniformly.
///
/// Characters may repeat. A negative `length` is rejected with
/// [`PassgenError::InvalidLength`]; zero yields an empty string. A length the
/// allocator cannot hold fails with [`PassgenError::TooLong`] instead of aborting.
pub fn sample<R: Rng + ?Sized>(pool: &[char], length: i64, rng: &mut R) -> Result<String> {
    if length < 0 {
        return Err(PassgenError::InvalidLength(length));
    }
    let count = usize::try_from(length).map_err(|_| PassgenError::TooLong(length))?;
    if pool.is_empty() {
        return Err(PassgenError::EmptyPool);
    }

    // The standard pool is all ASCII, so `count` bytes is the exact size.
    let mut password = String::new();
    password
        .try_reserve_exact(count)
        .map_err(|_| PassgenError::TooLong(length))?;
    password.extend((0..count).map(|_| pool[rng.gen_range(0..pool.len())]));
    Ok(password)
}
