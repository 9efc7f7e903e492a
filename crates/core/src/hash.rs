//! Stable string hashing.
//!
//! The rolling hash is part of the identifier and bearing wire format: every
//! persisted id and every initial bearing is derived from it, so the exact
//! arithmetic (31-multiplier over UTF-16 code units, wrapped to signed 32 bits)
//! must not change.

/// Rolling hash `h = h * 31 + unit` over the UTF-16 code units of `s`, wrapped to `i32`.
pub fn hash_to_int(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Map a string onto a whole-degree compass bearing in `0..360`.
pub fn hash_to_degrees(s: &str) -> u16 {
    // `%` keeps the sign of the dividend, so the result lies in (-360, 360).
    (hash_to_int(s) % 360).unsigned_abs() as u16
}

/// Interpret a hash as an unsigned 32-bit seed.
#[inline]
pub fn hash_to_seed(s: &str) -> u32 {
    hash_to_int(s) as u32
}
