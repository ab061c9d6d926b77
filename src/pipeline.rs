use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use voxmorph_grid::{Orientation, VoxelGrid};
use voxmorph_mesh_cpu::{MeshBuild, ParallelOptions, extract_mesh_par, extract_sequence_par};
use voxmorph_shapes::{ShapeConfig, ShapeError, morph_frames};

use crate::cli::{AnimateArgs, CommonArgs, MeshArgs};
use crate::pacing;
use crate::payload::{AnimationPayload, MeshPayload};

fn load_shape(path: &Path, common: &CommonArgs) -> Result<ShapeConfig, ShapeError> {
    let cfg = ShapeConfig::from_path(path)?.with_overrides(common.size, common.seed);
    cfg.validate()?;
    log::debug!("loaded shape {} ({:?})", path.display(), cfg.kind);
    Ok(cfg)
}

fn orient(grid: VoxelGrid, raw: bool) -> VoxelGrid {
    if raw {
        grid
    } else {
        grid.reoriented(Orientation::FlipIJ)
    }
}

fn log_volume(label: &str, grid: &VoxelGrid) {
    let (sx, sy, sz) = grid.dims();
    log::info!(
        "{label}: {sx}x{sy}x{sz} grid, {} solid voxels",
        grid.solid_count()
    );
}

pub fn mesh_config(cfg: &ShapeConfig, common: &CommonArgs) -> Result<MeshBuild, Box<dyn Error>> {
    let mut grid = orient(cfg.build_grid()?, common.raw_orientation);
    log_volume("shape", &grid);
    let opts = ParallelOptions {
        threads: common.threads,
    };
    let mesh = extract_mesh_par(&mut grid, &opts)?;
    log::info!(
        "mesh: {} vertices, {} quads",
        mesh.vertex_count(),
        mesh.face_count()
    );
    if let Some(b) = mesh.bounds() {
        log::debug!(
            "mesh bounds min={:?} size={:?}",
            b.min.to_array(),
            b.size().to_array()
        );
    }
    Ok(mesh)
}

pub fn animate_configs(
    from: &ShapeConfig,
    to: &ShapeConfig,
    frames: usize,
    common: &CommonArgs,
) -> Result<Vec<MeshBuild>, Box<dyn Error>> {
    let t0 = Instant::now();
    let a = from.density()?;
    let b = to.density()?;
    let mut grids: Vec<VoxelGrid> = morph_frames(&a, &b, frames)?
        .into_iter()
        .map(|g| orient(g, common.raw_orientation))
        .collect();
    log::info!(
        target: "perf",
        "ms={} morph_frames frames={}",
        t0.elapsed().as_millis(),
        grids.len()
    );
    for (t, g) in grids.iter().enumerate() {
        log_volume(&format!("frame {t}"), g);
    }
    let opts = ParallelOptions {
        threads: common.threads,
    };
    let meshes = extract_sequence_par(&mut grids, &opts)?;
    for (t, m) in meshes.iter().enumerate() {
        log::info!(
            "frame {t} mesh: {} vertices, {} quads",
            m.vertex_count(),
            m.face_count()
        );
    }
    Ok(meshes)
}

fn write_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            let mut w = BufWriter::new(File::create(path)?);
            serde_json::to_writer(&mut w, value)?;
            w.flush()?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer(&mut w, value)?;
            writeln!(w)?;
        }
    }
    Ok(())
}

pub fn run_mesh(args: &MeshArgs) -> Result<(), Box<dyn Error>> {
    let cfg = load_shape(&args.shape, &args.common)?;
    let mesh = mesh_config(&cfg, &args.common)?;
    write_json(&MeshPayload::from(&mesh), args.common.out.as_deref())
}

pub fn run_animate(args: &AnimateArgs) -> Result<(), Box<dyn Error>> {
    let from = load_shape(&args.from, &args.common)?;
    let to = load_shape(&args.to, &args.common)?;
    let meshes = animate_configs(&from, &to, args.frames, &args.common)?;
    let interval = pacing::interval_ms(meshes.len(), args.interval_ms);
    log::info!("animation: {} frames, {interval:.1} ms interval", meshes.len());
    write_json(
        &AnimationPayload::new(&meshes, interval),
        args.common.out.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxmorph_mesh_cpu::MeshError;
    use voxmorph_shapes::{ShapeKind, Sphere};

    fn common(raw: bool) -> CommonArgs {
        CommonArgs {
            size: None,
            seed: None,
            threads: Some(2),
            out: None,
            raw_orientation: raw,
        }
    }

    fn ball(size: usize, radius: f32) -> ShapeConfig {
        ShapeConfig {
            size,
            seed: 0,
            kind: ShapeKind::Sphere(Sphere { radius }),
        }
    }

    #[test]
    fn symmetric_shapes_ignore_orientation() {
        let cfg = ball(12, 0.3);
        let flipped = mesh_config(&cfg, &common(false)).unwrap();
        let raw = mesh_config(&cfg, &common(true)).unwrap();
        assert_eq!(flipped.face_count(), raw.face_count());
        assert!(!raw.is_empty());
    }

    #[test]
    fn animation_yields_one_mesh_per_frame() {
        let meshes = animate_configs(&ball(10, 0.1), &ball(10, 0.35), 4, &common(false)).unwrap();
        assert_eq!(meshes.len(), 4);
        assert!(meshes[0].face_count() < meshes[3].face_count());
    }

    #[test]
    fn zero_frames_is_empty_input() {
        let err = animate_configs(&ball(8, 0.2), &ball(8, 0.3), 0, &common(true)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MeshError>(),
            Some(MeshError::EmptyInput)
        ));
    }

    #[test]
    fn mismatched_sizes_are_rejected() {
        let err = animate_configs(&ball(8, 0.2), &ball(9, 0.3), 3, &common(true)).unwrap_err();
        assert!(err.downcast_ref::<ShapeError>().is_some());
    }
}
