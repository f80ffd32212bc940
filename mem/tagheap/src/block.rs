//! # Block Layout
//!
//! Every block in the managed region starts with an in-band boundary-tag
//! record, followed by the caller-visible payload:
//!
//! ```text
//! +---------------------+----------------------------+
//! | BlockHeader (12 B)  |      payload               |
//! +---------------------+----------------------------+
//! ^ offset              ^ offset + HEADER_SIZE        ^ next
//! ```
//!
//! `prev` and `next` are byte offsets from the heap base rather than
//! addresses, so the chain is position-independent within the region. The
//! blocks tile the region exactly: a block's payload runs up to the offset
//! stored in `next`, and the last block is followed by the terminal
//! sentinel header.

use bitfield_struct::bitfield;

/// Alignment unit for sizes and payload addresses. Must be a power of two.
pub const ALIGN: usize = 4;

/// Smallest payload a block may carry. Splits never leave a free tail
/// smaller than this.
pub const MIN_ALLOC: usize = align_up(12, ALIGN);

/// Signature of a live header; anything else means corruption.
pub(crate) const MAGIC: u16 = 0x1EA0;

/// In-band header size, rounded up to the alignment unit.
pub(crate) const HEADER_SIZE: usize = align_up(size_of::<BlockHeader>(), ALIGN);

/// Packed state word of a block header.
#[bitfield(u32)]
pub(crate) struct BlockTag {
    /// Header signature; must equal [`MAGIC`].
    #[bits(16)]
    pub magic: u16,
    /// Whether the block is currently allocated.
    pub used: bool,
    #[bits(15)]
    __reserved: u16,
}

impl BlockTag {
    /// A tag for a fresh free block.
    pub(crate) const fn free() -> Self {
        Self::new().with_magic(MAGIC)
    }

    /// A tag for an in-use block (also carried by the sentinel).
    pub(crate) const fn in_use() -> Self {
        Self::new().with_magic(MAGIC).with_used(true)
    }
}

/// Boundary-tag record stored at the base of every block.
///
/// Offsets are `u32` so the record is 12 bytes on 32- and 64-bit targets
/// alike; this caps the region at 4 GiB, far beyond any fixed embedded
/// region.
#[repr(C)]
pub(crate) struct BlockHeader {
    pub tag: BlockTag,
    /// Offset of the previous block in address order. The first block
    /// points at itself (offset 0).
    pub prev: u32,
    /// Offset of the next block in address order. The sentinel points at
    /// itself.
    pub next: u32,
}

/// Align `value` upwards to `align` (must be a power of two).
#[inline]
pub(crate) const fn align_up(value: usize, align: usize) -> usize {
    (value + (align - 1)) & !(align - 1)
}

/// Align `value` downwards to `align` (must be a power of two).
#[inline]
pub(crate) const fn align_down(value: usize, align: usize) -> usize {
    value & !(align - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_three_words() {
        assert_eq!(size_of::<BlockHeader>(), 12);
        assert_eq!(HEADER_SIZE, 12);
        assert_eq!(MIN_ALLOC, 12);
    }

    #[test]
    fn alignment_rounding() {
        assert_eq!(align_up(0, 4), 0);
        assert_eq!(align_up(1, 4), 4);
        assert_eq!(align_up(12, 4), 12);
        assert_eq!(align_up(13, 4), 16);
        assert_eq!(align_down(13, 4), 12);
        assert_eq!(align_down(16, 4), 16);
    }

    #[test]
    fn tag_round_trip() {
        let tag = BlockTag::free();
        assert_eq!(tag.magic(), MAGIC);
        assert!(!tag.used());

        let mut tag = BlockTag::in_use();
        assert!(tag.used());
        tag.set_used(false);
        assert_eq!(tag.magic(), MAGIC);
        assert!(!tag.used());
    }
}
