/// The animated shape field behind the page content
use nalgebra::{Matrix4, Vector3};

use crate::camera::{Camera, project_point};
use crate::geometry::WireMesh;

/// How many shapes the backdrop spawns unless told otherwise.
pub const DEFAULT_SHAPE_COUNT: usize = 15;

/// Shapes are scattered within this half-extent per axis.
pub const FIELD_EXTENT: f32 = 10.0;

/// Per-axis angular velocity is sampled within ±MAX_SPIN rad/frame.
pub const MAX_SPIN: f32 = 0.01;

/// Sphere radius of each wireframe shape.
pub const SHAPE_RADIUS: f32 = 1.0;

/// Euler angles in radians, one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Advance by a per-frame rate. Accumulation is unbounded; rotation
    /// is periodic so wrapping is not needed.
    pub fn advance(&mut self, rate: Euler) {
        self.x += rate.x;
        self.y += rate.y;
        self.z += rate.z;
    }

    /// Rotation matrix applying the axes in Z, Y, X order.
    pub fn rotation_matrix(&self) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(self.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, self.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, self.z));
        rz * ry * rx
    }
}

/// One tumbling wireframe shape: a fixed position, the current pose, and
/// the constant per-frame angular velocity it was born with.
#[derive(Debug, Clone)]
pub struct Shape {
    pub position: Vector3<f32>,
    pub rotation: Euler,
    pub spin: Euler,
}

impl Shape {
    fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_translation(&self.position) * self.rotation.rotation_matrix()
    }
}

/// The backdrop scene: a shared wireframe mesh, the shape field, and the
/// camera watching it. The scene exclusively owns its shapes; the caller
/// owns frame scheduling and the output surface.
pub struct Scene {
    mesh: WireMesh,
    shapes: Vec<Shape>,
    camera: Camera,
}

impl Scene {
    /// Builds a scene sized to the viewport with `shape_count` shapes.
    ///
    /// `sample` must yield values in `[0, 1)`; every random draw the scene
    /// ever makes flows through it, so construction is deterministic under
    /// test and `Math.random`-driven in the browser.
    pub fn new(
        width: u32,
        height: u32,
        shape_count: usize,
        sample: &mut dyn FnMut() -> f32,
    ) -> Self {
        let mesh = WireMesh::icosahedron(SHAPE_RADIUS).subdivide(SHAPE_RADIUS);
        let shapes = (0..shape_count)
            .map(|_| Shape {
                position: Vector3::new(
                    centered(sample) * FIELD_EXTENT,
                    centered(sample) * FIELD_EXTENT,
                    centered(sample) * FIELD_EXTENT,
                ),
                rotation: Euler::new(
                    sample() * std::f32::consts::PI,
                    sample() * std::f32::consts::PI,
                    sample() * std::f32::consts::PI,
                ),
                spin: Euler::new(
                    centered(sample) * MAX_SPIN,
                    centered(sample) * MAX_SPIN,
                    centered(sample) * MAX_SPIN,
                ),
            })
            .collect();

        Self {
            mesh,
            shapes,
            camera: Camera::new(width, height),
        }
    }

    /// One animation frame: every shape turns by its own angular velocity.
    pub fn tick(&mut self) {
        for shape in &mut self.shapes {
            shape.rotation.advance(shape.spin);
        }
    }

    /// Keeps the camera in step with a viewport size change.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Projects every wireframe edge of every shape to screen space and
    /// hands the resulting line segments to `draw`. Segments with an
    /// endpoint behind the camera are culled.
    pub fn for_each_segment(
        &self,
        width: u32,
        height: u32,
        mut draw: impl FnMut((f32, f32), (f32, f32)),
    ) {
        let view_projection = self.camera.view_projection();
        let vertices = self.mesh.vertices();

        for shape in &self.shapes {
            let mvp = view_projection * shape.model_matrix();
            for &[a, b] in self.mesh.edges() {
                let from = project_point(&mvp, &vertices[a as usize], width, height);
                let to = project_point(&mvp, &vertices[b as usize], width, height);
                if let (Some(from), Some(to)) = (from, to) {
                    draw(from, to);
                }
            }
        }
    }
}

/// Maps a `[0, 1)` draw onto `[-1, 1)`.
fn centered(sample: &mut dyn FnMut() -> f32) -> f32 {
    (sample() - 0.5) * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for `Math.random`.
    fn ramp_sampler() -> impl FnMut() -> f32 {
        let mut state = 0u32;
        move || {
            state = (state * 31 + 7) % 97;
            state as f32 / 97.0
        }
    }

    fn scene_with(count: usize) -> Scene {
        let mut sample = ramp_sampler();
        Scene::new(800, 600, count, &mut sample)
    }

    #[test]
    fn holds_exactly_the_requested_shape_count() {
        for count in [0, 1, DEFAULT_SHAPE_COUNT, 40] {
            assert_eq!(scene_with(count).shapes().len(), count);
        }
    }

    #[test]
    fn sampled_poses_stay_within_bounds() {
        let scene = scene_with(DEFAULT_SHAPE_COUNT);
        for shape in scene.shapes() {
            for p in [shape.position.x, shape.position.y, shape.position.z] {
                assert!(p.abs() <= FIELD_EXTENT, "position out of field: {p}");
            }
            for r in [shape.rotation.x, shape.rotation.y, shape.rotation.z] {
                assert!((0.0..std::f32::consts::PI).contains(&r));
            }
            for s in [shape.spin.x, shape.spin.y, shape.spin.z] {
                assert!(s.abs() <= MAX_SPIN, "spin out of range: {s}");
            }
        }
    }

    #[test]
    fn rotation_accumulates_linearly_over_frames() {
        for frames in [0u32, 1, 7, 60] {
            let mut scene = scene_with(DEFAULT_SHAPE_COUNT);
            let start: Vec<(Euler, Euler)> = scene
                .shapes()
                .iter()
                .map(|s| (s.rotation, s.spin))
                .collect();

            for _ in 0..frames {
                scene.tick();
            }

            for (shape, (rotation, spin)) in scene.shapes().iter().zip(&start) {
                let f = frames as f32;
                assert!((shape.rotation.x - (rotation.x + f * spin.x)).abs() < 1e-4);
                assert!((shape.rotation.y - (rotation.y + f * spin.y)).abs() < 1e-4);
                assert!((shape.rotation.z - (rotation.z + f * spin.z)).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn spin_never_changes_after_construction() {
        let mut scene = scene_with(DEFAULT_SHAPE_COUNT);
        let spins: Vec<Euler> = scene.shapes().iter().map(|s| s.spin).collect();
        for _ in 0..120 {
            scene.tick();
        }
        for (shape, spin) in scene.shapes().iter().zip(&spins) {
            assert_eq!(shape.spin, *spin);
        }
    }

    #[test]
    fn resize_twice_matches_resize_once() {
        let mut once = scene_with(3);
        once.resize(1280, 720);

        let mut twice = scene_with(3);
        twice.resize(1280, 720);
        twice.resize(1280, 720);

        assert_eq!(once.camera().aspect(), twice.camera().aspect());
    }

    #[test]
    fn a_centred_shape_projects_all_edges() {
        // Constant 0.5 draws put the single shape at the origin, well in
        // front of the camera, so every subdivided edge survives culling.
        let mut sample = || 0.5f32;
        let scene = Scene::new(800, 600, 1, &mut sample);

        let mut segments = 0usize;
        scene.for_each_segment(800, 600, |_, _| segments += 1);
        assert_eq!(segments, 120);
    }

    #[test]
    fn empty_scene_draws_nothing() {
        let scene = scene_with(0);
        let mut segments = 0usize;
        scene.for_each_segment(800, 600, |_, _| segments += 1);
        assert_eq!(segments, 0);
    }
}
