use std::time::Instant;

use voxmorph_grid::VoxelGrid;

use crate::emit::mesh_slab_into;
use crate::mesh_build::MeshBuild;
use crate::neighbors::NeighborSampler;

/// Progress of a single extraction pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExtractStage {
    Idle,
    Sealing,
    Scanning,
    Done,
}

/// One extraction pass over an exclusively borrowed grid.
///
/// The grid's outer shell is cleared in place during the sealing stage; callers that need
/// the original boundary must extract from a copy. [`Extractor::step`] performs one stage at
/// a time and [`Extractor::stage`] reports the last stage completed.
pub struct Extractor<'g> {
    grid: &'g mut VoxelGrid,
    stage: ExtractStage,
    mesh: MeshBuild,
    started: Option<Instant>,
}

impl<'g> Extractor<'g> {
    pub fn new(grid: &'g mut VoxelGrid) -> Self {
        Self {
            grid,
            stage: ExtractStage::Idle,
            mesh: MeshBuild::default(),
            started: None,
        }
    }

    #[inline]
    pub fn stage(&self) -> ExtractStage {
        self.stage
    }

    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &*self.grid
    }

    /// Mesh accumulated so far; complete once the stage is `Scanning` or later.
    #[inline]
    pub fn mesh(&self) -> &MeshBuild {
        &self.mesh
    }

    fn advance(&mut self, next: ExtractStage) {
        log::trace!("extract stage {:?} -> {:?}", self.stage, next);
        self.stage = next;
    }

    /// Performs the next stage and returns it. A finished extractor stays `Done`.
    pub fn step(&mut self) -> ExtractStage {
        match self.stage {
            ExtractStage::Idle => {
                self.started = Some(Instant::now());
                self.grid.seal_boundary();
                self.advance(ExtractStage::Sealing);
            }
            ExtractStage::Sealing => {
                let (sx, _, _) = self.grid.dims();
                if let Some(sampler) = NeighborSampler::new(&*self.grid) {
                    self.mesh.reserve_quads(self.grid.solid_count());
                    for i in 0..sx {
                        mesh_slab_into(&mut self.mesh, &sampler, i);
                    }
                }
                self.advance(ExtractStage::Scanning);
            }
            ExtractStage::Scanning => {
                let (sx, sy, sz) = self.grid.dims();
                let ms = self.started.map_or(0, |t0| t0.elapsed().as_millis());
                log::info!(
                    target: "perf",
                    "ms={} mesher_extract dims=({}, {}, {}) solid={} faces={}",
                    ms,
                    sx,
                    sy,
                    sz,
                    self.grid.solid_count(),
                    self.mesh.face_count()
                );
                self.advance(ExtractStage::Done);
            }
            ExtractStage::Done => {}
        }
        self.stage
    }

    /// Runs the remaining stages and returns the finished mesh.
    pub fn run(mut self) -> MeshBuild {
        while self.step() != ExtractStage::Done {}
        self.mesh
    }
}

/// Seals `grid` in place and extracts its exposed-face mesh.
pub fn extract_mesh(grid: &mut VoxelGrid) -> MeshBuild {
    Extractor::new(grid).run()
}

/// Same as [`extract_mesh`], consuming the grid.
pub fn extract_mesh_owned(mut grid: VoxelGrid) -> MeshBuild {
    extract_mesh(&mut grid)
}
