use voxmorph_grid::EMPTY;

use crate::face::FaceDir;
use crate::neighbors::Neighbors;

/// Bitset of exposed faces, one bit per [`FaceDir::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceMask(pub u8);

impl FaceMask {
    pub const ALL: FaceMask = FaceMask(0b11_1111);

    #[inline]
    pub fn from_neighbors(n: &Neighbors) -> FaceMask {
        let mut bits = 0u8;
        for (slot, &occ) in n.0.iter().enumerate() {
            if occ == EMPTY {
                bits |= 1 << slot;
            }
        }
        FaceMask(bits)
    }

    #[inline]
    pub fn contains(self, face: FaceDir) -> bool {
        (self.0 >> face.index()) & 1 == 1
    }

    #[inline]
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Exposed faces in index order.
    #[inline]
    pub fn iter(self) -> impl Iterator<Item = FaceDir> {
        FaceDir::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_follows_empty_slots() {
        let m = FaceMask::from_neighbors(&Neighbors([0, 1, 1, 0, 1, 0]));
        assert_eq!(m.count(), 3);
        let faces: Vec<_> = m.iter().collect();
        assert_eq!(faces, vec![FaceDir::PosZ, FaceDir::PosY, FaceDir::NegX]);
        assert!(FaceMask::from_neighbors(&Neighbors([1; 6])).is_empty());
        assert_eq!(FaceMask::from_neighbors(&Neighbors([0; 6])), FaceMask::ALL);
    }
}
