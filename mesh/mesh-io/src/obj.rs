//! Wavefront OBJ file format support.
//!
//! Only geometry is read: `v` positions and `f` loops. Texture coordinates,
//! normals, groups and materials are skipped.
//!
//! # Format
//!
//! ```text
//! # comment
//! v x y z [w]
//! vt u v
//! vn x y z
//! f v1 v2 v3 ...
//! f v1/vt1 v2/vt2 v3/vt3 ...
//! f v1//vn1 v2//vn2 v3//vn3 ...
//! f v1/vt1/vn1 v2/vt2/vn2 v3/vt3/vn3 ...
//! ```
//!
//! Indices on disk are 1-based; negative indices count back from the most
//! recent vertex. In memory they are 0-based. Indices pointing past the
//! vertex list are not rejected here, so the repair passes can report them.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use mesh_types::{Face, PolyMesh, Vertex};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Load a mesh from an OBJ file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist,
/// [`IoError::InvalidContent`] if a `v` or `f` line is malformed, or
/// [`IoError::Io`] if reading fails.
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_obj;
///
/// let mesh = load_obj("model.obj").unwrap();
/// println!("Loaded {} faces", mesh.faces.len());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<PolyMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let mesh = read_obj(BufReader::new(file))?;
    debug!(
        "Loaded {} vertices and {} faces from {}",
        mesh.vertices.len(),
        mesh.faces.len(),
        path.display()
    );
    Ok(mesh)
}

/// Parse OBJ text held in memory.
///
/// # Errors
///
/// Returns [`IoError::InvalidContent`] if a `v` or `f` line is malformed.
///
/// # Example
///
/// ```
/// use mesh_io::parse_obj;
///
/// let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")?;
/// assert_eq!(mesh.faces[0].vertices, vec![0, 1, 2]);
/// # Ok::<(), mesh_io::IoError>(())
/// ```
pub fn parse_obj(text: &str) -> IoResult<PolyMesh> {
    read_obj(text.as_bytes())
}

/// Read OBJ data from any buffered reader.
///
/// # Errors
///
/// Returns [`IoError::InvalidContent`] if a `v` or `f` line is malformed,
/// or [`IoError::Io`] if reading fails.
pub fn read_obj<R: BufRead>(reader: R) -> IoResult<PolyMesh> {
    let mut mesh = PolyMesh::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_idx + 1;
        let content = line.split('#').next().unwrap_or_default();

        let mut parts = content.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        match keyword {
            "v" => {
                let coords: Vec<&str> = parts.take(3).collect();
                if coords.len() < 3 {
                    return Err(IoError::invalid_content(
                        line_no,
                        format!("vertex needs 3 coordinates, got {}", coords.len()),
                    ));
                }
                let mut xyz = [0.0; 3];
                for (slot, token) in xyz.iter_mut().zip(&coords) {
                    *slot = token.parse().map_err(|_| {
                        IoError::invalid_content(line_no, format!("bad coordinate {token:?}"))
                    })?;
                }
                mesh.vertices.push(Vertex::from(xyz));
            }
            "f" => {
                let vertex_count = mesh.vertices.len();
                let vertices = parts
                    .map(|token| parse_face_index(token, vertex_count, line_no))
                    .collect::<IoResult<Vec<u32>>>()?;
                mesh.faces.push(Face::new(vertices));
            }
            _ => {
                // vt, vn, o, g, s, usemtl, mtllib, l, p: attributes we don't keep
            }
        }
    }

    Ok(mesh)
}

/// Convert one face token (`v`, `v/vt`, `v//vn`, `v/vt/vn`) to a 0-based index.
fn parse_face_index(token: &str, vertex_count: usize, line: usize) -> IoResult<u32> {
    let position = token.split('/').next().unwrap_or_default();
    let raw: i64 = position
        .parse()
        .map_err(|_| IoError::invalid_content(line, format!("bad face index {token:?}")))?;

    let resolved = match raw {
        0 => {
            return Err(IoError::invalid_content(line, "face index 0 is not allowed"));
        }
        r if r > 0 => r - 1,
        r => i64::try_from(vertex_count).unwrap_or(i64::MAX) + r,
    };

    u32::try_from(resolved).map_err(|_| {
        IoError::invalid_content(line, format!("face index {raw} is out of range"))
    })
}

/// Save a mesh to an OBJ file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::{load_obj, save_obj};
///
/// let mesh = load_obj("input.obj").unwrap();
/// save_obj(&mesh, "output.obj").unwrap();
/// ```
pub fn save_obj<P: AsRef<Path>>(mesh: &PolyMesh, path: P) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_obj(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh as OBJ text: all `v` lines, then all `f` lines.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the writer fails.
pub fn write_obj<W: Write>(mesh: &PolyMesh, mut writer: W) -> IoResult<()> {
    writeln!(writer, "# {} vertices, {} faces", mesh.vertices.len(), mesh.faces.len())?;
    for vertex in &mesh.vertices {
        writeln!(writer, "{}", vertex_line(vertex))?;
    }
    for face in &mesh.faces {
        writeln!(writer, "{}", face_line(face))?;
    }
    Ok(())
}

/// Render a mesh as OBJ text.
///
/// # Example
///
/// ```
/// use mesh_types::PolyMesh;
/// use mesh_io::to_obj_string;
///
/// let mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
///     vec![vec![0, 1, 2]],
/// );
/// assert!(to_obj_string(&mesh).ends_with("f 1 2 3\n"));
/// ```
#[must_use]
pub fn to_obj_string(mesh: &PolyMesh) -> String {
    let mut out = format!("# {} vertices, {} faces\n", mesh.vertices.len(), mesh.faces.len());
    for line in mesh
        .vertices
        .iter()
        .map(vertex_line)
        .chain(mesh.faces.iter().map(face_line))
    {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn vertex_line(vertex: &Vertex) -> String {
    let p = &vertex.position;
    format!("v {} {} {}", p.x, p.y, p.z)
}

fn face_line(face: &Face) -> String {
    let mut line = String::from("f");
    for &v in &face.vertices {
        line.push(' ');
        line.push_str(&(u64::from(v) + 1).to_string());
    }
    line
}

/// Save each mesh to `<dir>/<stem>_part<N>.obj`, numbering from 1.
///
/// The directory is created if missing. Returns the written paths in
/// input order.
///
/// # Errors
///
/// Returns an error if the directory or any file cannot be written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::{load_obj, save_components};
///
/// let mesh = load_obj("input.obj").unwrap();
/// let paths = save_components(&[mesh], "out", "input").unwrap();
/// assert!(paths[0].ends_with("input_part1.obj"));
/// ```
pub fn save_components<P: AsRef<Path>>(
    meshes: &[PolyMesh],
    dir: P,
    stem: &str,
) -> IoResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(meshes.len());
    for (idx, mesh) in meshes.iter().enumerate() {
        let path = dir.join(format!("{stem}_part{}.obj", idx + 1));
        save_obj(mesh, &path)?;
        debug!("Wrote {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use mesh_types::MeshTopology;

    fn create_test_triangle() -> PolyMesh {
        PolyMesh::from_positions(
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![vec![0, 1, 2]],
        )
    }

    #[test]
    fn parse_all_face_token_forms() {
        let text = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vn 0 0 1
f 1 2 3
f 1/1 3/1 4/1
f 1//1 2//1 4//1
f 2/1/1 3/1/1 4/1/1
";
        let mesh = parse_obj(text).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 4);
        assert_eq!(mesh.faces[1].vertices, vec![0, 2, 3]);
        assert_eq!(mesh.faces[3].vertices, vec![1, 2, 3]);
    }

    #[test]
    fn negative_indices_are_relative() {
        let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n").unwrap();
        assert_eq!(mesh.faces[0].vertices, vec![0, 1, 2]);
    }

    #[test]
    fn comments_and_extra_components_ignored() {
        let text = "# header\nv 1 2 3 1.0 # homogeneous w\n\no part\ng group\ns off\nusemtl red\nf 1 1 1\n";
        let mesh = parse_obj(text).unwrap();
        assert_eq!(mesh.vertices[0], Vertex::from_coords(1.0, 2.0, 3.0));
        assert_eq!(mesh.faces[0].vertices, vec![0, 0, 0]);
    }

    #[test]
    fn polygons_and_short_faces_kept() {
        let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\nf 1 2\n").unwrap();
        assert_eq!(mesh.faces[0].len(), 4);
        assert_eq!(mesh.faces[1].len(), 2);
    }

    #[test]
    fn out_of_range_index_passes_through() {
        let mesh = parse_obj("v 0 0 0\nf 1 2 9\n").unwrap();
        assert_eq!(mesh.faces[0].vertices, vec![0, 1, 8]);
    }

    #[test]
    fn zero_index_rejected_with_line() {
        let err = parse_obj("v 0 0 0\n\nf 0 1 1\n").unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { line: 3, .. }));
    }

    #[test]
    fn malformed_lines_rejected() {
        assert!(matches!(
            parse_obj("v 1 2\n"),
            Err(IoError::InvalidContent { line: 1, .. })
        ));
        assert!(matches!(
            parse_obj("v 1 x 3\n"),
            Err(IoError::InvalidContent { .. })
        ));
        assert!(matches!(
            parse_obj("v 0 0 0\nf 1 a 1\n"),
            Err(IoError::InvalidContent { line: 2, .. })
        ));
        // Relative index reaching before the first vertex
        assert!(matches!(
            parse_obj("v 0 0 0\nf -2 1 1\n"),
            Err(IoError::InvalidContent { .. })
        ));
    }

    #[test]
    fn writes_one_based_faces() {
        let text = to_obj_string(&create_test_triangle());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "v 0 0 0");
        assert_eq!(lines[2], "v 1 0 0");
        assert_eq!(lines[4], "f 1 2 3");
    }

    #[test]
    fn write_obj_matches_string() {
        let mesh = create_test_triangle();
        let mut buf = Vec::new();
        write_obj(&mesh, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_obj_string(&mesh));
    }

    #[test]
    fn roundtrip_file() {
        let original = PolyMesh::from_positions(
            &[[0.125, -3.5, 1e-7], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [2.0, 2.0, 2.0]],
            vec![vec![0, 1, 2], vec![1, 3, 2, 0]],
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.obj");

        save_obj(&original, &path).unwrap();
        let loaded = load_obj(&path).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_obj("nonexistent_file_12345.obj");
        assert!(result.is_err());
        if let Err(IoError::FileNotFound { path }) = result {
            assert!(path.to_string_lossy().contains("nonexistent"));
        }
    }

    #[test]
    fn save_components_numbers_from_one() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");
        let meshes = vec![create_test_triangle(), create_test_triangle()];

        let paths = save_components(&meshes, &out, "model").unwrap();

        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("model_part1.obj"));
        assert!(paths[1].ends_with("model_part2.obj"));
        assert_eq!(load_obj(&paths[1]).unwrap(), meshes[1]);
    }
}
