/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;

/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 1_099_511_628_211;

///
/// FNV-1a 64-bit hash (compile-time safe).
///
/// Used for canonical type hashes, so the result must stay identical across
/// compilers, platforms and runs for the same input bytes.
///
/// - **`const fn`**: hashes can be used as `const` items and `match` arms
/// - **No seeding**: the same bytes always produce the same value
/// - **Not cryptographically secure**, and collisions are not detected
///
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;

    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }

    hash
}

/// [`fnv1a_64`] over the UTF-8 bytes of `s`.
#[must_use]
pub const fn fnv1a_64_str(s: &str) -> u64 {
    fnv1a_64(s.as_bytes())
}

///
/// TESTS
///
