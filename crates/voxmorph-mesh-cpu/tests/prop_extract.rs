use proptest::prelude::*;
use voxmorph_grid::VoxelGrid;
use voxmorph_mesh_cpu::{
    FaceDir, MeshBuild, ParallelOptions, extract_mesh, extract_mesh_par, extract_sequence,
};

fn dim() -> impl Strategy<Value = usize> {
    1usize..=9
}

fn arb_grid() -> impl Strategy<Value = VoxelGrid> {
    (dim(), dim(), dim()).prop_flat_map(|(sx, sy, sz)| {
        prop::collection::vec(prop::bool::weighted(0.45), sx * sy * sz).prop_map(move |bits| {
            let cells = bits.into_iter().map(u8::from).collect();
            VoxelGrid::from_cells(sx, sy, sz, cells).unwrap()
        })
    })
}

// Direct-neighbor reference mesher over a sealed grid.
fn reference_mesh(sealed: &VoxelGrid) -> MeshBuild {
    let mut mb = MeshBuild::default();
    let (sx, sy, sz) = sealed.dims();
    for i in 0..sx {
        for j in 0..sy {
            for k in 0..sz {
                if !sealed.is_solid(i, j, k) {
                    continue;
                }
                for face in FaceDir::ALL {
                    let (di, dj, dk) = face.grid_delta();
                    let ni = i.checked_add_signed(di);
                    let nj = j.checked_add_signed(dj);
                    let nk = k.checked_add_signed(dk);
                    let solid = match (ni, nj, nk) {
                        (Some(a), Some(b), Some(c)) if a < sx && b < sy && c < sz => {
                            sealed.is_solid(a, b, c)
                        }
                        _ => false,
                    };
                    if !solid {
                        mb.add_voxel_face(i, j, k, face);
                    }
                }
            }
        }
    }
    mb
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    // Four vertices per quad and every index in range
    #[test]
    fn quads_index_their_own_vertices(g in arb_grid()) {
        let mut g = g;
        let mb = extract_mesh(&mut g);
        prop_assert_eq!(mb.pos.len(), 4 * mb.quads.len());
        for (n, q) in mb.quads.iter().enumerate() {
            for &ix in q {
                prop_assert!((ix as usize) < mb.pos.len());
                // Each quad only references the four vertices appended with it
                prop_assert_eq!(ix as usize / 4, n);
            }
        }
    }

    // Clamped sampling agrees with direct lookup once the shell is sealed
    #[test]
    fn matches_direct_neighbor_reference(g in arb_grid()) {
        let mut sealed = g.clone();
        sealed.seal_boundary();
        let expected = reference_mesh(&sealed);
        let mut g = g;
        prop_assert_eq!(extract_mesh(&mut g), expected);
    }

    // Slab-parallel extraction is identical to the serial scan
    #[test]
    fn parallel_is_byte_identical(g in arb_grid(), threads in 1usize..=4) {
        let mut a = g.clone();
        let mut b = g;
        let serial = extract_mesh(&mut a);
        let par = extract_mesh_par(&mut b, &ParallelOptions::with_threads(threads)).unwrap();
        prop_assert_eq!(par, serial);
    }

    // Re-extracting an already sealed grid reproduces the same mesh
    #[test]
    fn extraction_is_idempotent(g in arb_grid()) {
        let mut g = g;
        let first = extract_mesh(&mut g);
        let second = extract_mesh(&mut g);
        prop_assert_eq!(first, second);
    }

    // Sequence extraction keeps one independent mesh per frame
    #[test]
    fn sequence_preserves_frame_independence(frames in prop::collection::vec(arb_grid(), 1..5)) {
        let isolated: Vec<MeshBuild> = frames
            .iter()
            .cloned()
            .map(|mut f| extract_mesh(&mut f))
            .collect();
        let mut frames = frames;
        let seq = extract_sequence(&mut frames).unwrap();
        prop_assert_eq!(seq.len(), frames.len());
        prop_assert_eq!(seq, isolated);
    }
}
