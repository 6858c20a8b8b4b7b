//! Per-vertex light blending for voxel cube meshing.
//!
//! A cube vertex needs a separate light value for each of the three faces it
//! belongs to, because occlusion differs per face: 8 corners x 3 axes = 24
//! slots per voxel. Each slot is blended from up to four samples of the
//! 3x3x3 neighborhood, and a corner-diagonal sample may only contribute when
//! an unobstructed L-shaped path (through the face cell and at least one of
//! the two edge cells) connects it to the vertex. Without that gate a lit
//! cell behind a solid diagonal wall bleeds light onto the vertex.
//!
//! The core is channel-agnostic: the same pass runs for block light and sky
//! light, parameterized by the caller's combine function (max in practice).
#![forbid(unsafe_code)]

use rayon::prelude::*;

pub use lumen_geom::{Axis, Corner, Offset};

pub mod mask;


/// Number of per-vertex output slots (8 corners x 3 axes).
pub const VERTEX_SLOTS: usize = 24;

/// Output slot for one corner's light along one face axis.
#[inline]
pub const fn slot(corner: Corner, axis: Axis) -> usize {
    corner.index() * 3 + axis.index()
}

/// Light samples for the 3x3x3 neighborhood around one voxel.
///
/// Indexed by [`Offset`]. The center slot exists so indexing stays uniform,
/// but the blend never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborLights<L>([L; Offset::COUNT]);

impl<L: Copy> NeighborLights<L> {
    #[inline]
    pub fn splat(value: L) -> Self {
        Self([value; Offset::COUNT])
    }

    pub fn from_fn(mut sample: impl FnMut(Offset) -> L) -> Self {
        Self(core::array::from_fn(|i| sample(Offset::from_index(i))))
    }

    #[inline]
    pub fn get(&self, offset: Offset) -> L {
        self.0[offset.index()]
    }

    #[inline]
    pub fn set(&mut self, offset: Offset, value: L) {
        self.0[offset.index()] = value;
    }
}

/// Which neighborhood cells light can pass through.
///
/// Only the 6 face and 12 edge offsets are ever consulted; a corner-diagonal
/// cell contributes light but its own occlusion does not matter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diaphanous(u32);

impl Diaphanous {
    /// Every cell open.
    pub const OPEN: Diaphanous = Diaphanous((1u32 << Offset::COUNT) - 1);

    /// Every cell sealed.
    pub const SEALED: Diaphanous = Diaphanous(0);

    /// Build from a predicate over the 18 face and edge offsets.
    pub fn from_fn(mut passes: impl FnMut(Offset) -> bool) -> Self {
        let mut set = Diaphanous::SEALED;
        for i in 0..Offset::COUNT {
            let o = Offset::from_index(i);
            if (o.is_face() || o.is_edge()) && passes(o) {
                set.set(o, true);
            }
        }
        set
    }

    /// Whether light passes through the cell at `offset`.
    #[inline]
    pub fn passes(self, offset: Offset) -> bool {
        debug_assert!(offset.is_face() || offset.is_edge());
        self.0 >> offset.index() & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, offset: Offset, open: bool) {
        let bit = 1u32 << offset.index();
        if open {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }
}

/// The 24 per-vertex light slots for one voxel, indexed by [`slot`].
///
/// Initial values are caller-supplied; the blend always folds them with the
/// face-center sample rather than discarding them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLights<L>([L; VERTEX_SLOTS]);

impl<L: Copy> VertexLights<L> {
    #[inline]
    pub fn splat(value: L) -> Self {
        Self([value; VERTEX_SLOTS])
    }

    #[inline]
    pub fn get(&self, corner: Corner, axis: Axis) -> L {
        self.0[slot(corner, axis)]
    }

    #[inline]
    pub fn set(&mut self, corner: Corner, axis: Axis, value: L) {
        self.0[slot(corner, axis)] = value;
    }

    #[inline]
    pub fn as_slice(&self) -> &[L] {
        &self.0
    }
}

/// Blend one corner's light along one face axis.
///
/// The face-adjacent sample always folds in; it is never gated because the
/// face cell is directly visible from the vertex. If that cell is opaque
/// nothing further may contribute. Otherwise both edge samples fold in, and
/// the corner-diagonal sample folds in only while at least one of the two
/// edge cells is open.
pub fn blend_axis<L, F>(
    initial: L,
    open_center: bool,
    open_edge1: bool,
    open_edge2: bool,
    light_center: L,
    light_edge1: L,
    light_edge2: L,
    light_corner: L,
    combine: &F,
) -> L
where
    L: Copy,
    F: Fn(L, L) -> L,
{
    let mut light = combine(initial, light_center);
    if open_center {
        light = combine(light, light_edge1);
        light = combine(light, light_edge2);
        if open_edge1 || open_edge2 {
            light = combine(light, light_corner);
        }
    }
    light
}

/// Blend all three face axes of one corner into `out`.
///
/// For axis `a` with remaining axes `b` and `c`, the relevant cells are the
/// face cell signed on `a` only, the two edge cells signed on `{a,b}` and
/// `{a,c}`, and the corner-diagonal cell signed on all three. The two edges
/// are interchangeable.
pub fn update_corner<L, F>(
    corner: Corner,
    lights: &NeighborLights<L>,
    open: &Diaphanous,
    out: &mut VertexLights<L>,
    combine: &F,
) where
    L: Copy,
    F: Fn(L, L) -> L,
{
    let light_diag = lights.get(corner.diagonal());
    for axis in Axis::ALL {
        let [b, c] = axis.others();
        let center = Offset::axial(axis, corner.step(axis));
        let edge_b = center.with(b, corner.step(b));
        let edge_c = center.with(c, corner.step(c));
        let blended = blend_axis(
            out.get(corner, axis),
            open.passes(center),
            open.passes(edge_b),
            open.passes(edge_c),
            lights.get(center),
            lights.get(edge_b),
            lights.get(edge_c),
            light_diag,
            combine,
        );
        out.set(corner, axis, blended);
    }
}

/// Blend every corner of one voxel.
///
/// Corners read the same immutable snapshot and write disjoint slots, so
/// iteration order does not matter.
pub fn update_all_corners<L, F>(
    lights: &NeighborLights<L>,
    open: &Diaphanous,
    out: &mut VertexLights<L>,
    combine: F,
) where
    L: Copy,
    F: Fn(L, L) -> L,
{
    for corner in Corner::ALL {
        update_corner(corner, lights, open, out, &combine);
    }
}

/// One voxel's inputs and output slots; the unit of a batch light pass.
#[derive(Clone, Copy, Debug)]
pub struct CellLightJob<L> {
    pub neighbors: NeighborLights<L>,
    pub open: Diaphanous,
    pub vertices: VertexLights<L>,
}

/// Blend a batch of voxels in parallel.
///
/// Each job owns its snapshot and sink, so cells never observe another
/// cell's partially-updated state.
pub fn update_batch<L, F>(jobs: &mut [CellLightJob<L>], combine: F)
where
    L: Copy + Send + Sync,
    F: Fn(L, L) -> L + Sync,
{
    let t0 = std::time::Instant::now();
    jobs.par_iter_mut().for_each(|job| {
        let CellLightJob { neighbors, open, vertices } = job;
        update_all_corners(neighbors, open, vertices, &combine);
    });
    let ms = t0.elapsed().as_millis();
    log::info!(target: "perf", "ms={} vertex_light_batch cells={}", ms, jobs.len());
}
