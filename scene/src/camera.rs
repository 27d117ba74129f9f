/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

/// Vertical field of view, radians. Matches the wide lens the backdrop
/// was designed around.
pub const FIELD_OF_VIEW: f32 = 75.0 * std::f32::consts::PI / 180.0;

/// How far the camera sits back from the origin along +Z.
pub const CAMERA_DISTANCE: f32 = 15.0;

/// Perspective camera looking at the origin from a fixed distance.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Point3<f32>,
    target: Point3<f32>,
    up: Vector3<f32>,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, CAMERA_DISTANCE),
            target: Point3::origin(),
            up: Vector3::y(),
            fov: FIELD_OF_VIEW,
            aspect: aspect_of(width, height),
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Re-derives the aspect ratio from a new viewport size. Calling this
    /// twice with the same size leaves the camera unchanged.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = aspect_of(width, height);
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Combined projection * view, computed once per frame by callers that
    /// project many points.
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Projects a single world-space point to screen pixels.
    pub fn project(&self, point: &Point3<f32>, width: u32, height: u32) -> Option<(f32, f32)> {
        project_point(&self.view_projection(), point, width, height)
    }
}

/// Projects a point through a precomputed model-view-projection matrix.
/// Returns `None` for points at or behind the eye plane; points outside
/// the viewport still project (the output surface clips them for free).
pub fn project_point(
    mvp: &Matrix4<f32>,
    point: &Point3<f32>,
    width: u32,
    height: u32,
) -> Option<(f32, f32)> {
    let clip = mvp * point.to_homogeneous();
    if clip.w <= f32::EPSILON {
        return None;
    }

    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;

    let screen_x = (ndc_x + 1.0) * 0.5 * width as f32;
    let screen_y = (1.0 - ndc_y) * 0.5 * height as f32;
    Some((screen_x, screen_y))
}

fn aspect_of(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_starts_back_from_origin() {
        let camera = Camera::new(800, 600);
        assert!((camera.aspect() - 800.0 / 600.0).abs() < 1e-6);
        assert!(camera.view_matrix().norm() > 0.0);
    }

    #[test]
    fn set_viewport_is_idempotent() {
        let mut once = Camera::new(800, 600);
        once.set_viewport(1920, 1080);

        let mut twice = Camera::new(800, 600);
        twice.set_viewport(1920, 1080);
        twice.set_viewport(1920, 1080);

        assert_eq!(once.aspect(), twice.aspect());
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let camera = Camera::new(800, 600);
        let (x, y) = camera
            .project(&Point3::origin(), 800, 600)
            .expect("origin is in front of the camera");
        assert!((x - 400.0).abs() < 1e-2);
        assert!((y - 300.0).abs() < 1e-2);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let camera = Camera::new(800, 600);
        let behind = Point3::new(0.0, 0.0, CAMERA_DISTANCE + 5.0);
        assert_eq!(camera.project(&behind, 800, 600), None);
    }

    #[test]
    fn zero_height_viewport_does_not_blow_up() {
        let mut camera = Camera::new(800, 600);
        camera.set_viewport(800, 0);
        assert!(camera.aspect().is_finite());
    }
}
