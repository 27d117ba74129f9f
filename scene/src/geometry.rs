/// Wireframe geometry primitives
use std::collections::HashMap;

use nalgebra::Point3;

/// Golden ratio, the construction constant for the icosahedron.
const PHI: f32 = 1.618_034;

/// A mesh reduced to what wireframe rendering needs: shared vertices,
/// triangular faces, and the deduplicated undirected edge list.
#[derive(Debug, Clone)]
pub struct WireMesh {
    vertices: Vec<Point3<f32>>,
    faces: Vec<[u16; 3]>,
    edges: Vec<[u16; 2]>,
}

impl WireMesh {
    /// Regular icosahedron with every vertex pushed onto a sphere of the
    /// given radius. 12 vertices, 30 edges, 20 faces.
    pub fn icosahedron(radius: f32) -> Self {
        let raw = [
            (-1.0, PHI, 0.0),
            (1.0, PHI, 0.0),
            (-1.0, -PHI, 0.0),
            (1.0, -PHI, 0.0),
            (0.0, -1.0, PHI),
            (0.0, 1.0, PHI),
            (0.0, -1.0, -PHI),
            (0.0, 1.0, -PHI),
            (PHI, 0.0, -1.0),
            (PHI, 0.0, 1.0),
            (-PHI, 0.0, -1.0),
            (-PHI, 0.0, 1.0),
        ];
        let vertices = raw
            .iter()
            .map(|&(x, y, z)| push_to_sphere(Point3::new(x, y, z), radius))
            .collect();

        let faces = vec![
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        Self::from_parts(vertices, faces)
    }

    /// One level of midpoint subdivision, new vertices re-projected onto
    /// the sphere. Applied once to the icosahedron this yields the
    /// 42-vertex / 120-edge / 80-face ball the backdrop renders.
    pub fn subdivide(&self, radius: f32) -> Self {
        let mut vertices = self.vertices.clone();
        let mut midpoints: HashMap<(u16, u16), u16> = HashMap::new();
        let mut faces = Vec::with_capacity(self.faces.len() * 4);

        let mut midpoint = |a: u16, b: u16, vertices: &mut Vec<Point3<f32>>| -> u16 {
            let key = if a < b { (a, b) } else { (b, a) };
            *midpoints.entry(key).or_insert_with(|| {
                let pa = vertices[a as usize];
                let pb = vertices[b as usize];
                let mid = Point3::new(
                    (pa.x + pb.x) * 0.5,
                    (pa.y + pb.y) * 0.5,
                    (pa.z + pb.z) * 0.5,
                );
                vertices.push(push_to_sphere(mid, radius));
                (vertices.len() - 1) as u16
            })
        };

        for &[a, b, c] in &self.faces {
            let ab = midpoint(a, b, &mut vertices);
            let bc = midpoint(b, c, &mut vertices);
            let ca = midpoint(c, a, &mut vertices);
            faces.push([a, ab, ca]);
            faces.push([b, bc, ab]);
            faces.push([c, ca, bc]);
            faces.push([ab, bc, ca]);
        }

        Self::from_parts(vertices, faces)
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[[u16; 2]] {
        &self.edges
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Builds the undirected edge list from the face list.
    fn from_parts(vertices: Vec<Point3<f32>>, faces: Vec<[u16; 3]>) -> Self {
        let mut edges: Vec<[u16; 2]> = faces
            .iter()
            .flat_map(|&[a, b, c]| [[a, b], [b, c], [c, a]])
            .map(|[a, b]| if a < b { [a, b] } else { [b, a] })
            .collect();
        edges.sort_unstable();
        edges.dedup();

        Self {
            vertices,
            faces,
            edges,
        }
    }
}

fn push_to_sphere(point: Point3<f32>, radius: f32) -> Point3<f32> {
    let len = (point.x * point.x + point.y * point.y + point.z * point.z).sqrt();
    Point3::new(
        point.x / len * radius,
        point.y / len * radius,
        point.z / len * radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icosahedron_has_canonical_counts() {
        let mesh = WireMesh::icosahedron(1.0);
        assert_eq!(mesh.vertices().len(), 12);
        assert_eq!(mesh.edges().len(), 30);
        assert_eq!(mesh.face_count(), 20);
    }

    #[test]
    fn subdivision_quadruples_faces() {
        let mesh = WireMesh::icosahedron(1.0).subdivide(1.0);
        assert_eq!(mesh.vertices().len(), 42);
        assert_eq!(mesh.edges().len(), 120);
        assert_eq!(mesh.face_count(), 80);
    }

    #[test]
    fn vertices_sit_on_the_sphere() {
        for mesh in [
            WireMesh::icosahedron(2.5),
            WireMesh::icosahedron(2.5).subdivide(2.5),
        ] {
            for v in mesh.vertices() {
                let len = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
                assert!((len - 2.5).abs() < 1e-4, "vertex off sphere: {v:?}");
            }
        }
    }

    #[test]
    fn edges_are_unique_and_in_range() {
        let mesh = WireMesh::icosahedron(1.0).subdivide(1.0);
        let count = mesh.vertices().len() as u16;
        let mut seen = std::collections::HashSet::new();
        for &[a, b] in mesh.edges() {
            assert!(a < b);
            assert!(b < count);
            assert!(seen.insert((a, b)), "duplicate edge {a}-{b}");
        }
    }
}
