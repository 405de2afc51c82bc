//! Indexed facet lists (triangles and quads) with optional UV indices.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A list of `N`-sided facets.
///
/// `vert_inds[i]` indexes the owning mesh's vertex list. `uv_inds` is either
/// empty (no UVs) or holds exactly one UV index set per facet, indexing the
/// mesh's UV list. Corner `k` of `vert_inds[i]` pairs with corner `k` of
/// `uv_inds[i]`.
///
/// # Example
///
/// ```
/// use mesh_types::Tris;
///
/// let mut tris = Tris::new();
/// tris.push_with_uvs([0, 1, 2], [5, 6, 7]);
/// assert_eq!(tris.len(), 1);
/// assert!(tris.has_uvs());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "[u32; N]: Serialize",
        deserialize = "[u32; N]: Deserialize<'de>"
    ))
)]
pub struct Facets<const N: usize> {
    /// Vertex indices, one array per facet, CCW winding.
    pub vert_inds: Vec<[u32; N]>,
    /// UV indices, empty or parallel to `vert_inds`.
    pub uv_inds: Vec<[u32; N]>,
}

/// Triangle facets.
pub type Tris = Facets<3>;

/// Quad facets.
pub type Quads = Facets<4>;

impl<const N: usize> Default for Facets<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Facets<N> {
    /// Number of triangles each facet contributes to the tri-equivalent
    /// index space (1 for tris, 2 for quads).
    pub const TRIS_PER_FACET: usize = N - 2;

    /// Create an empty facet list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vert_inds: Vec::new(),
            uv_inds: Vec::new(),
        }
    }

    /// Create a facet list from its parts.
    #[inline]
    #[must_use]
    pub const fn from_parts(vert_inds: Vec<[u32; N]>, uv_inds: Vec<[u32; N]>) -> Self {
        Self { vert_inds, uv_inds }
    }

    /// Create a facet list without UVs.
    #[inline]
    #[must_use]
    pub const fn from_verts(vert_inds: Vec<[u32; N]>) -> Self {
        Self {
            vert_inds,
            uv_inds: Vec::new(),
        }
    }

    /// Append a facet without UVs.
    pub fn push(&mut self, verts: [u32; N]) {
        self.vert_inds.push(verts);
    }

    /// Append a facet together with its UV indices.
    pub fn push_with_uvs(&mut self, verts: [u32; N], uvs: [u32; N]) {
        self.vert_inds.push(verts);
        self.uv_inds.push(uvs);
    }

    /// Number of facets.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vert_inds.len()
    }

    /// Whether there are no facets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vert_inds.is_empty()
    }

    /// Whether the facets carry UV indices.
    #[inline]
    #[must_use]
    pub fn has_uvs(&self) -> bool {
        !self.uv_inds.is_empty()
    }

    /// Whether UV coverage is all-or-nothing.
    #[inline]
    #[must_use]
    pub fn uvs_consistent(&self) -> bool {
        self.uv_inds.is_empty() || self.uv_inds.len() == self.vert_inds.len()
    }

    /// Number of tri-equivalents these facets contribute.
    #[inline]
    #[must_use]
    pub fn tri_equiv_count(&self) -> usize {
        self.len() * Self::TRIS_PER_FACET
    }

    /// Corner positions (within a facet) of the `k`-th fan triangle.
    ///
    /// Quads split as `[0, 1, 2]` and `[0, 2, 3]`.
    #[inline]
    #[must_use]
    pub const fn fan_corners(k: usize) -> [usize; 3] {
        [0, k + 1, k + 2]
    }

    /// Iterate over the fan triangles of every facet as vertex index triples.
    pub fn vert_tris(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.vert_inds.iter().flat_map(|f| {
            (0..Self::TRIS_PER_FACET).map(move |k| Self::fan_corners(k).map(|c| f[c]))
        })
    }

    /// Iterate over the fan triangles of every facet as UV index triples.
    pub fn uv_tris(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.uv_inds.iter().flat_map(|f| {
            (0..Self::TRIS_PER_FACET).map(move |k| Self::fan_corners(k).map(|c| f[c]))
        })
    }

    /// Copy with every vertex index shifted by `vert_offset` and every UV
    /// index by `uv_offset`.
    #[must_use]
    pub fn offset(&self, vert_offset: u32, uv_offset: u32) -> Self {
        Self {
            vert_inds: self
                .vert_inds
                .iter()
                .map(|f| f.map(|i| i + vert_offset))
                .collect(),
            uv_inds: self
                .uv_inds
                .iter()
                .map(|f| f.map(|i| i + uv_offset))
                .collect(),
        }
    }

    /// Copy keeping only facets whose `keep` flag is set.
    ///
    /// `keep` must have one entry per facet.
    #[must_use]
    pub fn filtered(&self, keep: &[bool]) -> Self {
        let pick = |inds: &[[u32; N]]| {
            inds.iter()
                .zip(keep)
                .filter(|&(_, &k)| k)
                .map(|(f, _)| *f)
                .collect::<Vec<_>>()
        };
        Self {
            vert_inds: pick(&self.vert_inds),
            uv_inds: if self.has_uvs() {
                pick(&self.uv_inds)
            } else {
                Vec::new()
            },
        }
    }

    /// Copy with vertex and UV indices passed through the given maps.
    #[must_use]
    pub fn remapped(&self, vert_map: &[u32], uv_map: &[u32]) -> Self {
        Self {
            vert_inds: self
                .vert_inds
                .iter()
                .map(|f| f.map(|i| vert_map[i as usize]))
                .collect(),
            uv_inds: self
                .uv_inds
                .iter()
                .map(|f| f.map(|i| uv_map[i as usize]))
                .collect(),
        }
    }

    /// Append all facets of `other`.
    pub fn extend_from(&mut self, other: &Self) {
        self.vert_inds.extend_from_slice(&other.vert_inds);
        self.uv_inds.extend_from_slice(&other.uv_inds);
    }
}
