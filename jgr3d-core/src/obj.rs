/// Wavefront OBJ loader for vertex and face data
///
/// Only `v` and `f` lines are read. Texture coordinates, normals, groups
/// and materials are skipped.
use nom::{
    bytes::complete::take_till,
    character::complete::{char, digit1, space0, space1},
    combinator::{all_consuming, opt, recognize},
    multi::{many0, separated_list1},
    number::complete::float,
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};
use std::io::BufRead;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geometry::{Mesh, Point3D, Triangle};

/// Parse an OBJ document from a reader
pub fn parse_obj<R: BufRead>(reader: R) -> Result<Mesh> {
    let mut loader = ObjLoader::new();
    for (index, line) in reader.lines().enumerate() {
        loader.push_line(index + 1, &line?)?;
    }
    Ok(loader.finish())
}

/// Parse an OBJ document held in memory
pub fn parse_obj_str(input: &str) -> Result<Mesh> {
    parse_obj(input.as_bytes())
}

/// Incremental loader: faces are resolved against the vertices read so far.
#[derive(Debug, Default)]
pub struct ObjLoader {
    vertices: Vec<Point3D>,
    mesh: Mesh,
    skipped: usize,
}

impl ObjLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Feed one line. `line_number` is 1-based and only used in errors.
    pub fn push_line(&mut self, line_number: usize, line: &str) -> Result<()> {
        // Anything after `#` is a comment
        let line = line.split_once('#').map_or(line, |(code, _)| code).trim();
        let (keyword, rest) = match line.split_once(|c: char| c.is_ascii_whitespace()) {
            Some((keyword, rest)) => (keyword, rest.trim_start()),
            None => (line, ""),
        };

        match keyword {
            "v" => {
                let (_, vertex) = all_consuming(vertex_coords)(rest)
                    .map_err(|_| malformed(line_number, "vertex", line))?;
                self.vertices.push(vertex);
            }
            "f" => {
                let (_, refs) = all_consuming(face_refs)(rest)
                    .map_err(|_| malformed(line_number, "face", line))?;
                if refs.len() < 3 {
                    return Err(malformed(line_number, "face", line));
                }

                let corners = refs
                    .iter()
                    .map(|index| self.resolve(line_number, index))
                    .collect::<Result<Vec<_>>>()?;

                // Fan out polygons: (0, i, i + 1)
                for i in 1..corners.len() - 1 {
                    self.mesh
                        .add_triangle(Triangle::new(corners[0], corners[i], corners[i + 1]));
                }
            }
            "" => {}
            _ => self.skipped += 1,
        }
        Ok(())
    }

    pub fn finish(self) -> Mesh {
        info!(
            vertices = self.vertices.len(),
            triangles = self.mesh.len(),
            "loaded mesh"
        );
        if self.skipped > 0 {
            debug!(lines = self.skipped, "skipped unsupported lines");
        }
        self.mesh
    }

    /// Negative, zero and overflowing indices all miss the vertex list
    fn resolve(&self, line: usize, index: &str) -> Result<Point3D> {
        let invalid = || Error::InvalidFaceReference {
            line,
            index: index.to_string(),
            vertex_count: self.vertices.len(),
        };
        let slot = index.parse::<usize>().ok().and_then(|i| i.checked_sub(1));
        slot.and_then(|i| self.vertices.get(i))
            .copied()
            .ok_or_else(invalid)
    }
}

fn malformed(line: usize, kind: &'static str, content: &str) -> Error {
    Error::MalformedLine {
        line,
        kind,
        content: content.to_string(),
    }
}

/// `x y z`, followed by any number of ignored numeric fields (`w`, or `r g b`)
fn vertex_coords(input: &str) -> IResult<&str, Point3D> {
    let (input, (x, y, z)) = tuple((
        float,
        preceded(space1, float),
        preceded(space1, float),
    ))(input)?;
    let (input, _) = terminated(many0(preceded(space1, float)), space0)(input)?;
    Ok((input, Point3D::new(x, y, z)))
}

/// Whitespace separated vertex references
fn face_refs(input: &str) -> IResult<&str, Vec<&str>> {
    terminated(separated_list1(space1, face_ref), space0)(input)
}

/// `v`, `v/vt`, `v//vn` or `v/vt/vn`; only the vertex index text is kept
fn face_ref(input: &str) -> IResult<&str, &str> {
    let (input, index) = recognize(pair(opt(char('-')), digit1))(input)?;
    let (input, _) = opt(preceded(
        char('/'),
        take_till(|c: char| c.is_ascii_whitespace()),
    ))(input)?;
    Ok((input, index))
}
