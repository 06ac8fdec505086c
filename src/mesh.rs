use glam::Vec3;
use thiserror::Error;

const STL_HEADER_LEN: usize = 80;
const STL_TRIANGLE_LEN: usize = 50;

#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("mesh data too short ({0} bytes)")]
    TooShort(usize),
    #[error("binary STL should be {expected} bytes but is {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("mesh data is neither binary STL nor UTF-8 text")]
    NotText,
    #[error("invalid number in ASCII STL: {0:?}")]
    BadNumber(String),
    #[error("ASCII STL vertex count {0} is not a multiple of three")]
    Ragged(usize),
    #[error("mesh has no triangles")]
    Empty,
}

/// GPU vertex layout: position then normal.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Non-indexed triangle list. `positions.len()` is a multiple of three and
/// `normals` runs parallel to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Axis-aligned bounds as (min, max). `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }

    /// One normal per face, written to all three corners.
    pub fn compute_flat_normals(&mut self) {
        self.normals.clear();
        for tri in self.positions.chunks_exact(3) {
            let n = (tri[1] - tri[0]).cross(tri[2] - tri[0]).normalize_or_zero();
            self.normals.extend_from_slice(&[n, n, n]);
        }
    }

    /// Recompute normals, move the bounding-box centre to the origin and scale
    /// uniformly so the largest extent equals `target_size`.
    pub fn normalize(&mut self, target_size: f32) {
        self.compute_flat_normals();
        let Some((lo, hi)) = self.bounds() else {
            return;
        };
        let center = (lo + hi) * 0.5;
        let extent = (hi - lo).max_element();
        let scale = if extent > f32::EPSILON {
            target_size / extent
        } else {
            1.0
        };
        for p in &mut self.positions {
            *p = (*p - center) * scale;
        }
    }

    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(self.normals.iter().chain(std::iter::repeat(&Vec3::ZERO)))
            .map(|(p, n)| Vertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect()
    }
}

/// Decode binary or ASCII STL. Normals stored in the file are ignored;
/// call [`MeshData::normalize`] to rebuild them.
pub fn parse_stl(bytes: &[u8]) -> Result<MeshData, MeshError> {
    if is_binary_stl(bytes) {
        return parse_binary(bytes);
    }
    if bytes.trim_ascii_start().starts_with(b"solid") {
        return parse_ascii(bytes);
    }
    parse_binary(bytes)
}

fn is_binary_stl(bytes: &[u8]) -> bool {
    if bytes.len() < STL_HEADER_LEN + 4 {
        return false;
    }
    binary_len(read_u32(bytes, STL_HEADER_LEN)) == Some(bytes.len())
}

// Total file size implied by a triangle count; `None` on overflow.
fn binary_len(count: u32) -> Option<usize> {
    (count as usize)
        .checked_mul(STL_TRIANGLE_LEN)?
        .checked_add(STL_HEADER_LEN + 4)
}

fn parse_binary(bytes: &[u8]) -> Result<MeshData, MeshError> {
    if bytes.len() < STL_HEADER_LEN + 4 {
        return Err(MeshError::TooShort(bytes.len()));
    }
    let count = read_u32(bytes, STL_HEADER_LEN);
    let expected = binary_len(count).unwrap_or(usize::MAX);
    if expected != bytes.len() {
        return Err(MeshError::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }
    if count == 0 {
        return Err(MeshError::Empty);
    }
    let mut positions = Vec::with_capacity(count as usize * 3);
    let body = &bytes[STL_HEADER_LEN + 4..];
    for tri in body.chunks_exact(STL_TRIANGLE_LEN) {
        // 12 bytes of facet normal, three vertices, 2 bytes attribute count
        for v in 0..3 {
            let at = 12 + v * 12;
            positions.push(Vec3::new(
                read_f32(tri, at),
                read_f32(tri, at + 4),
                read_f32(tri, at + 8),
            ));
        }
    }
    Ok(MeshData {
        positions,
        normals: Vec::new(),
    })
}

fn parse_ascii(bytes: &[u8]) -> Result<MeshData, MeshError> {
    let text = std::str::from_utf8(bytes).map_err(|_| MeshError::NotText)?;
    let mut positions = Vec::new();
    // keywords lead their line; a solid may itself be named `vertex`
    for line in text.lines() {
        let mut tokens = line.split_ascii_whitespace();
        if tokens.next() != Some("vertex") {
            continue;
        }
        let mut xyz = [0.0f32; 3];
        for c in &mut xyz {
            let raw = tokens.next().unwrap_or_default();
            *c = raw
                .parse()
                .map_err(|_| MeshError::BadNumber(raw.to_string()))?;
        }
        positions.push(Vec3::from_array(xyz));
    }
    if positions.len() % 3 != 0 {
        return Err(MeshError::Ragged(positions.len()));
    }
    if positions.is_empty() {
        return Err(MeshError::Empty);
    }
    Ok(MeshData {
        positions,
        normals: Vec::new(),
    })
}

#[inline]
fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
fn read_f32(bytes: &[u8], at: usize) -> f32 {
    f32::from_bits(read_u32(bytes, at))
}
