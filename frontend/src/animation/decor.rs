use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[cfg(test)]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn rotate_y(&self, angle: f64) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }

    pub fn rotate_x(&self, angle: f64) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(self.x, self.y * cos - self.z * sin, self.y * sin + self.z * cos)
    }
}

pub fn fibonacci_sphere(count: usize) -> Vec<Vec3> {
    let golden_angle = PI * (3.0 - 5f64.sqrt());
    (0..count)
        .map(|i| {
            let y = if count == 1 {
                0.0
            } else {
                1.0 - (i as f64 / (count - 1) as f64) * 2.0
            };
            let radius = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f64;
            Vec3::new(theta.cos() * radius, y, theta.sin() * radius)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub depth: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub distance: f64,
    pub focal: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: 3.0,
            focal: 2.2,
        }
    }
}

impl Camera {
    /// Perspective projection into a `width` x `height` canvas with the sphere
    /// centred. Points behind the camera yield `None`.
    pub fn project(&self, point: Vec3, width: f64, height: f64) -> Option<Projected> {
        let z = point.z + self.distance;
        if z <= 0.01 {
            return None;
        }
        let radius_px = width.min(height) * 0.5;
        let scale = self.focal / z;
        Some(Projected {
            x: width * 0.5 + point.x * scale * radius_px,
            y: height * 0.5 - point.y * scale * radius_px,
            scale,
            depth: ((1.0 - point.z) * 0.5).clamp(0.0, 1.0),
        })
    }
}

pub fn rotation_at(elapsed_ms: f64) -> (f64, f64) {
    let seconds = elapsed_ms / 1000.0;
    (seconds * 0.15, (seconds * 0.05).sin() * 0.35)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_points_are_unit_length() {
        let points = fibonacci_sphere(200);
        assert_eq!(points.len(), 200);
        for point in points {
            assert!((point.length() - 1.0).abs() < 1e-9);
        }
        assert_eq!(fibonacci_sphere(1), vec![Vec3::new(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn rotation_preserves_length() {
        let point = Vec3::new(0.3, -0.4, 0.5);
        let rotated = point.rotate_y(1.1).rotate_x(-0.7);
        assert!((rotated.length() - point.length()).abs() < 1e-12);
        let quarter = Vec3::new(1.0, 0.0, 0.0).rotate_y(PI / 2.0);
        assert!((quarter.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn centre_projects_to_middle() {
        let camera = Camera::default();
        let p = camera.project(Vec3::new(0.0, 0.0, 0.0), 800.0, 600.0).unwrap();
        assert_eq!((p.x, p.y), (400.0, 300.0));
        assert_eq!(p.depth, 0.5);
    }

    #[test]
    fn near_points_render_larger() {
        let camera = Camera::default();
        let near = camera.project(Vec3::new(0.0, 0.0, -1.0), 800.0, 600.0).unwrap();
        let far = camera.project(Vec3::new(0.0, 0.0, 1.0), 800.0, 600.0).unwrap();
        assert!(near.scale > far.scale);
        assert!(near.depth > far.depth);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let camera = Camera::default();
        assert!(camera.project(Vec3::new(0.0, 0.0, -3.5), 800.0, 600.0).is_none());
    }
}
