//! The machine word and its wire encoding.
//!
//! Every quantity the interpreter manipulates — registers, memory cells,
//! the program counter — is a [`Word`]: an unsigned 32-bit integer with
//! modular (wrapping) arithmetic. Signed opcodes reinterpret the same bit
//! pattern as two's-complement `i32` rather than going through a C-style
//! union, per the spec's redesign notes.

/// A single machine word. Arithmetic on words is always wrapping; signed
/// interpretation is an explicit reinterpreting cast.
pub type Word = u32;

/// Reinterpret a word's bit pattern as a signed two's-complement integer.
#[inline]
pub fn as_signed(w: Word) -> i32 {
    w as i32
}

/// Reinterpret a signed two's-complement integer as its bit-pattern word.
#[inline]
pub fn from_signed(v: i32) -> Word {
    v as u32
}

/// Mask a shift amount to the 5 bits that are meaningful for a 32-bit
/// shift (`count mod 32`). Rust panics in debug builds on a shift by a
/// full word width; the spec calls for `mod 32` semantics anyway.
#[inline]
pub fn shift_amount(count: Word) -> u32 {
    count & 0x1f
}

/// Unpack four big-endian bytes into a [`Word`].
#[inline]
pub fn word_from_be_bytes(bytes: [u8; 4]) -> Word {
    Word::from_be_bytes(bytes)
}

/// Pack a [`Word`] into four big-endian bytes.
#[inline]
pub fn word_to_be_bytes(word: Word) -> [u8; 4] {
    word.to_be_bytes()
}

/// Stream a byte slice into big-endian words, stopping at the last whole
/// word. Used by both dialects' loaders once the header has been
/// consumed; a trailing partial word (fewer than 4 bytes left) is simply
/// not emitted; callers that care about trailing-partial-word bytes check
/// the remaining length themselves before calling this.
pub fn be_words(bytes: &[u8]) -> impl Iterator<Item = Word> + '_ {
    bytes.chunks_exact(4).map(|chunk| {
        let arr: [u8; 4] = chunk.try_into().expect("chunks_exact(4) yields len-4 slices");
        word_from_be_bytes(arr)
    })
}
