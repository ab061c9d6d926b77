//! JSON hand-off consumed by the browser viewer.

use serde::Serialize;
use voxmorph_mesh_cpu::MeshBuild;

#[derive(Debug, Serialize, PartialEq)]
pub struct MeshPayload {
    pub verts: Vec<[f32; 3]>,
    pub faces: Vec<[u32; 4]>,
}

impl From<&MeshBuild> for MeshPayload {
    fn from(mb: &MeshBuild) -> Self {
        Self {
            verts: mb.pos.iter().map(|v| v.to_array()).collect(),
            faces: mb.quads.clone(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AnimationPayload {
    pub verts: Vec<Vec<[f32; 3]>>,
    pub faces: Vec<Vec<[u32; 4]>>,
    pub interval_ms: f32,
}

impl AnimationPayload {
    pub fn new(meshes: &[MeshBuild], interval_ms: f32) -> Self {
        let (verts, faces) = meshes
            .iter()
            .map(|mb| {
                let p = MeshPayload::from(mb);
                (p.verts, p.faces)
            })
            .unzip();
        Self {
            verts,
            faces,
            interval_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxmorph_mesh_cpu::FaceDir;

    fn one_face() -> MeshBuild {
        let mut mb = MeshBuild::default();
        mb.add_voxel_face(0, 0, 0, FaceDir::PosZ);
        mb
    }

    #[test]
    fn single_payload_shape() {
        let json = serde_json::to_value(MeshPayload::from(&one_face())).unwrap();
        assert_eq!(json["verts"][0], serde_json::json!([0.0, 2.0, 2.0]));
        assert_eq!(json["faces"], serde_json::json!([[0, 1, 3, 2]]));
        assert!(json.get("interval_ms").is_none());
    }

    #[test]
    fn animation_payload_keeps_frames_apart() {
        let frames = vec![one_face(), MeshBuild::default()];
        let json = serde_json::to_value(AnimationPayload::new(&frames, 12.5)).unwrap();
        assert_eq!(json["verts"].as_array().unwrap().len(), 2);
        assert_eq!(json["faces"][1], serde_json::json!([]));
        assert_eq!(json["interval_ms"], serde_json::json!(12.5));
    }
}
