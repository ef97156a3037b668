//! Vertex compaction shared by component extraction and cleanup.

use mesh_types::{Face, PolyMesh};

/// Build a new mesh from a subset of faces, keeping only the vertices they
/// reference.
///
/// Referenced indices are sorted ascending and renumbered `0..k`, positions
/// are copied, and face loops are rewritten into the new index space. Face
/// order and cached normals are preserved. Indices must be in range.
#[allow(clippy::cast_possible_truncation)]
// Truncation: the compacted count never exceeds the source vertex count, which fits u32
pub(crate) fn compact_faces<'a>(
    mesh: &PolyMesh,
    faces: impl IntoIterator<Item = &'a Face>,
) -> PolyMesh {
    let faces: Vec<&Face> = faces.into_iter().collect();

    let mut used = vec![false; mesh.vertices.len()];
    for face in &faces {
        for &v in &face.vertices {
            used[v as usize] = true;
        }
    }

    let mut remap = vec![u32::MAX; mesh.vertices.len()];
    let mut vertices = Vec::new();
    for (old_idx, vertex) in mesh.vertices.iter().enumerate() {
        if used[old_idx] {
            remap[old_idx] = vertices.len() as u32;
            vertices.push(*vertex);
        }
    }

    let faces = faces
        .into_iter()
        .map(|face| Face {
            vertices: face.vertices.iter().map(|&v| remap[v as usize]).collect(),
            normal: face.normal,
        })
        .collect();

    PolyMesh::from_parts(vertices, faces)
}
