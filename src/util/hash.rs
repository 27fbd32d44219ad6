use std::hash::{BuildHasherDefault, Hasher};

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Hashes a byte string with 32-bit FNV-1a.
///
/// Every byte is folded into the accumulator with
/// `hash = (hash ^ byte) * 16777619`, starting from `2166136261`.
/// Multiplication wraps.
///
/// # Parameters
/// - `bytes`: The bytes to hash, usually a variable name.
///
/// # Returns
/// The 32-bit hash.
///
/// # Example
/// ```
/// use arbcalc::util::hash::{FNV_OFFSET_BASIS, fnv1a};
///
/// assert_eq!(fnv1a(b""), FNV_OFFSET_BASIS);
/// assert_eq!(fnv1a(b"a"), 0xe40c_292c);
/// ```
#[must_use]
pub const fn fnv1a(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// A [`Hasher`] running FNV-1a over everything written to it.
///
/// Lets collections such as `HashMap` use the same hash function as the
/// symbol table. Only the low 32 bits of [`Hasher::finish`] carry
/// information.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1aHasher(u32);

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self(FNV_OFFSET_BASIS)
    }
}

impl Hasher for Fnv1aHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 ^= u32::from(byte);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        u64::from(self.0)
    }
}

/// Builder for [`Fnv1aHasher`], usable as the `S` parameter of `HashMap`.
pub type FnvBuildHasher = BuildHasherDefault<Fnv1aHasher>;
