//! Minimal index types for per-vertex voxel lighting (no engine dependency).
#![forbid(unsafe_code)]

/// One of the three coordinate axes a cube face can point along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The two remaining axes, in a fixed order.
    #[inline]
    pub const fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

/// One of the eight octant corners of a unit voxel.
///
/// The discriminant encodes the sign per axis: bit 0 = x, bit 1 = y,
/// bit 2 = z, with 0 meaning negative and 1 meaning positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Corner {
    NxNyNz = 0,
    PxNyNz = 1,
    NxPyNz = 2,
    PxPyNz = 3,
    NxNyPz = 4,
    PxNyPz = 5,
    NxPyPz = 6,
    PxPyPz = 7,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::NxNyNz,
        Corner::PxNyNz,
        Corner::NxPyNz,
        Corner::PxPyNz,
        Corner::NxNyPz,
        Corner::PxNyPz,
        Corner::NxPyPz,
        Corner::PxPyPz,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Corner> {
        if index < 8 { Some(Corner::ALL[index]) } else { None }
    }

    /// Signed unit step of this corner along `axis` (-1 or +1).
    #[inline]
    pub const fn step(self, axis: Axis) -> i8 {
        let bit = match axis {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        };
        if (self as usize >> bit) & 1 == 1 { 1 } else { -1 }
    }

    /// The corner-diagonal offset pointing into this corner's octant.
    #[inline]
    pub const fn diagonal(self) -> Offset {
        Offset::new(self.step(Axis::X), self.step(Axis::Y), self.step(Axis::Z))
    }
}

/// A relative cell position in the 3x3x3 neighborhood around a voxel.
/// Components are unit steps in `{-1, 0, 1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Offset {
    pub const ZERO: Offset = Offset::new(0, 0, 0);

    /// Number of distinct offsets, center included.
    pub const COUNT: usize = 27;

    #[inline]
    pub const fn new(x: i8, y: i8, z: i8) -> Offset {
        assert!(-1 <= x && x <= 1 && -1 <= y && y <= 1 && -1 <= z && z <= 1);
        Offset { x, y, z }
    }

    /// Linear index in 0..27 (z-major, then y, then x).
    #[inline]
    pub const fn index(self) -> usize {
        ((self.z + 1) as usize) * 9 + ((self.y + 1) as usize) * 3 + ((self.x + 1) as usize)
    }

    #[inline]
    pub const fn from_index(index: usize) -> Offset {
        assert!(index < Offset::COUNT);
        Offset {
            x: (index % 3) as i8 - 1,
            y: ((index / 3) % 3) as i8 - 1,
            z: (index / 9) as i8 - 1,
        }
    }

    /// Number of nonzero components: 0 center, 1 face, 2 edge, 3 corner.
    #[inline]
    pub const fn rank(self) -> u8 {
        (self.x != 0) as u8 + (self.y != 0) as u8 + (self.z != 0) as u8
    }

    #[inline]
    pub const fn is_face(self) -> bool {
        self.rank() == 1
    }

    #[inline]
    pub const fn is_edge(self) -> bool {
        self.rank() == 2
    }

    #[inline]
    pub const fn is_corner(self) -> bool {
        self.rank() == 3
    }

    /// Component along `axis`.
    #[inline]
    pub const fn get(self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Offset with `step` along `axis` and zero elsewhere.
    #[inline]
    pub const fn axial(axis: Axis, step: i8) -> Offset {
        Offset::ZERO.with(axis, step)
    }

    /// Copy of `self` with the component along `axis` replaced by `step`.
    #[inline]
    pub const fn with(self, axis: Axis, step: i8) -> Offset {
        match axis {
            Axis::X => Offset::new(step, self.y, self.z),
            Axis::Y => Offset::new(self.x, step, self.z),
            Axis::Z => Offset::new(self.x, self.y, step),
        }
    }
}
