//! Packed opaque-mask adapter.
//!
//! The host mesher hands over one packed bit field describing which of the
//! 26 neighborhood cells are opaque. Bits 0..=5 cover the six face offsets
//! in the order `-x, +x, -y, +y, -z, +z`; bits 6..=25 cover the remaining
//! cells in x-major enumeration order (each component negative, zero,
//! positive), skipping the faces already assigned. Corner-diagonal bits
//! exist in the layout but are never consulted: only a cell's light matters
//! at the diagonal, not its occlusion.
//!
//! The layout reproduces the producer's asserted convention and has not
//! been verified against the engine end to end. Anyone needing bit-exact
//! interoperability should confirm it against the actual mask producer.

use crate::Diaphanous;
use lumen_geom::Offset;

/// Packed "cell is opaque" bits for a 3x3x3 neighborhood.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpaqueMask(pub u32);

impl OpaqueMask {
    /// No opaque neighbors.
    pub const CLEAR: OpaqueMask = OpaqueMask(0);

    /// Bit position for `offset`, or `None` for the center cell.
    pub const fn bit(offset: Offset) -> Option<u32> {
        match (offset.x, offset.y, offset.z) {
            (0, 0, 0) => return None,
            (-1, 0, 0) => return Some(0),
            (1, 0, 0) => return Some(1),
            (0, -1, 0) => return Some(2),
            (0, 1, 0) => return Some(3),
            (0, 0, -1) => return Some(4),
            (0, 0, 1) => return Some(5),
            _ => {}
        }
        // Remaining cells count up from bit 6 in x-major order.
        let mut bit = 6u32;
        let mut x = -1i8;
        while x <= 1 {
            let mut y = -1i8;
            while y <= 1 {
                let mut z = -1i8;
                while z <= 1 {
                    let rank = (x != 0) as u8 + (y != 0) as u8 + (z != 0) as u8;
                    if rank >= 2 {
                        if x == offset.x && y == offset.y && z == offset.z {
                            return Some(bit);
                        }
                        bit += 1;
                    }
                    z += 1;
                }
                y += 1;
            }
            x += 1;
        }
        // Offset components are constrained to {-1, 0, 1}, so every
        // non-center cell was matched above.
        None
    }

    /// Whether the cell at `offset` is flagged opaque. The center cell has
    /// no bit and reports `false`.
    #[inline]
    pub fn is_opaque(self, offset: Offset) -> bool {
        match Self::bit(offset) {
            Some(bit) => self.0 & (1 << bit) != 0,
            None => false,
        }
    }

    /// Expand into the per-cell diaphanous set the blend core consumes.
    ///
    /// Only the 18 face and edge flags are produced; corner-diagonal bits
    /// are ignored.
    pub fn diaphanous(self) -> Diaphanous {
        Diaphanous::from_fn(|o| !self.is_opaque(o))
    }
}
