/// String hashing shared by the symbol table and the command table.
///
/// This module provides the 32-bit FNV-1a hash used to place variable names
/// into symbol table buckets, plus a [`std::hash::Hasher`] adapter so the same
/// function can key standard collections.
pub mod hash;
