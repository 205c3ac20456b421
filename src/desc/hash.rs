//! Stable hash codes that do not depend on the process-wide hasher seed.

/// Polynomial string hash over UTF-16 code units (`h = 31 * h + c`), wrapping on overflow.
pub fn string_hash_code(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}
