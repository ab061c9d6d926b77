//! Shared constants for voxmorph-mesh-cpu.

/// World units per voxel edge.
pub const VOXEL_SCALE: f32 = 2.0;

pub const FACES_PER_VOXEL: usize = 6;
pub const VERTS_PER_FACE: usize = 4;
