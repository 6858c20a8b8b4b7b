use lumen_lighting::{
    Axis, Corner, Diaphanous, NeighborLights, Offset, VertexLights, blend_axis, slot,
    update_all_corners,
};
use proptest::prelude::*;

fn max(a: u8, b: u8) -> u8 {
    a.max(b)
}

fn neighbor_lights() -> impl Strategy<Value = NeighborLights<u8>> {
    prop::collection::vec(any::<u8>(), Offset::COUNT)
        .prop_map(|v| NeighborLights::from_fn(|o| v[o.index()]))
}

fn diaphanous() -> impl Strategy<Value = Diaphanous> {
    any::<u32>().prop_map(|bits| Diaphanous::from_fn(|o| bits >> o.index() & 1 == 1))
}

proptest! {
    // Swapping the two edges (flags and samples together) never changes
    // the blend.
    #[test]
    fn edge_swap_symmetry(
        initial: u8,
        open_center: bool,
        open_e1: bool,
        open_e2: bool,
        l_center: u8,
        l_e1: u8,
        l_e2: u8,
        l_corner: u8,
    ) {
        let a = blend_axis(initial, open_center, open_e1, open_e2, l_center, l_e1, l_e2, l_corner, &max);
        let b = blend_axis(initial, open_center, open_e2, open_e1, l_center, l_e2, l_e1, l_corner, &max);
        prop_assert_eq!(a, b);
    }

    // With an opaque face cell the blend is exactly combine(initial, center),
    // whatever the other samples hold.
    #[test]
    fn opaque_center_is_a_hard_gate(
        initial: u8,
        open_e1: bool,
        open_e2: bool,
        l_center: u8,
        l_e1: u8,
        l_e2: u8,
        l_corner: u8,
    ) {
        let out = blend_axis(initial, false, open_e1, open_e2, l_center, l_e1, l_e2, l_corner, &max);
        prop_assert_eq!(out, initial.max(l_center));
    }

    // Under max the result is bounded by what was allowed to contribute.
    #[test]
    fn max_blend_is_bounded(
        initial: u8,
        open_center: bool,
        open_e1: bool,
        open_e2: bool,
        l_center: u8,
        l_e1: u8,
        l_e2: u8,
        l_corner: u8,
    ) {
        let out = blend_axis(initial, open_center, open_e1, open_e2, l_center, l_e1, l_e2, l_corner, &max);
        prop_assert!(out >= initial.max(l_center));
        let ceiling = initial.max(l_center).max(l_e1).max(l_e2).max(l_corner);
        prop_assert!(out <= ceiling);
    }

    // With every cell open each slot is the max of its initial value and
    // the seven cells of its octant selection.
    #[test]
    fn open_cube_slots_take_their_octant_max(
        lights in neighbor_lights(),
        initial: u8,
    ) {
        let mut out = VertexLights::splat(initial);
        update_all_corners(&lights, &Diaphanous::OPEN, &mut out, max);
        for corner in Corner::ALL {
            for axis in Axis::ALL {
                let [b, c] = axis.others();
                let center = Offset::axial(axis, corner.step(axis));
                let edge_b = center.with(b, corner.step(b));
                let edge_c = center.with(c, corner.step(c));
                let want = initial
                    .max(lights.get(center))
                    .max(lights.get(edge_b))
                    .max(lights.get(edge_c))
                    .max(lights.get(corner.diagonal()));
                prop_assert_eq!(out.get(corner, axis), want);
            }
        }
    }

    // The driver never reads the center cell of the snapshot.
    #[test]
    fn center_sample_is_never_consulted(
        lights in neighbor_lights(),
        open in diaphanous(),
        initial: u8,
        poison: u8,
    ) {
        let mut poisoned = lights;
        poisoned.set(Offset::ZERO, poison);
        let mut a = VertexLights::splat(initial);
        let mut b = VertexLights::splat(initial);
        update_all_corners(&lights, &open, &mut a, max);
        update_all_corners(&poisoned, &open, &mut b, max);
        prop_assert_eq!(a, b);
    }

    // Opening additional cells can only admit more light under max.
    #[test]
    fn opening_cells_is_monotone_under_max(
        lights in neighbor_lights(),
        open in diaphanous(),
        extra_bits: u32,
        initial: u8,
    ) {
        let mut wider = open;
        for i in 0..Offset::COUNT {
            let o = Offset::from_index(i);
            if (o.is_face() || o.is_edge()) && extra_bits >> i & 1 == 1 {
                wider.set(o, true);
            }
        }
        let mut narrow_out = VertexLights::splat(initial);
        let mut wide_out = VertexLights::splat(initial);
        update_all_corners(&lights, &open, &mut narrow_out, max);
        update_all_corners(&lights, &wider, &mut wide_out, max);
        for corner in Corner::ALL {
            for axis in Axis::ALL {
                let s = slot(corner, axis);
                prop_assert!(wide_out.as_slice()[s] >= narrow_out.as_slice()[s]);
            }
        }
    }
}
