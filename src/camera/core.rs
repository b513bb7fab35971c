use glam::{Mat4, Vec3};

/// Receives the camera placement computed each frame.
///
/// The orbit camera only ever produces `(eye, target, up)`; building the
/// view matrix, projection and GPU state is the sink's business.
pub trait CameraSink {
    /// Place the camera at `eye`, looking at `target`, with `up` as the
    /// screen-space up reference.
    fn set_view(&mut self, eye: Vec3, target: Vec3, up: Vec3);
}

impl<T: CameraSink + ?Sized> CameraSink for &mut T {
    fn set_view(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        (**self).set_view(eye, target, up);
    }
}

/// Look-at camera defined by eye position, target and up direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl Camera {
    /// Build the right-handed view matrix.
    ///
    /// Undefined (non-finite) when `eye == target`, which happens when the
    /// camera is zoomed all the way onto its pivot.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Unit direction from eye toward target, or `None` if they coincide.
    #[must_use]
    pub fn forward(&self) -> Option<Vec3> {
        (self.target - self.eye).try_normalize()
    }
}

impl CameraSink for Camera {
    fn set_view(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.eye = eye;
        self.target = target;
        self.up = up;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_stores_placement() {
        let mut camera = Camera::default();
        camera.set_view(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::NEG_Y);
        assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.up, Vec3::NEG_Y);
    }

    #[test]
    fn view_matrix_maps_target_onto_negative_z() {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        };
        let in_view = camera.view_matrix().transform_point3(camera.target);
        assert!((in_view - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-5);
    }

    #[test]
    fn forward_is_none_on_target() {
        let camera = Camera {
            eye: Vec3::ONE,
            target: Vec3::ONE,
            up: Vec3::Y,
        };
        assert!(camera.forward().is_none());

        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, 4.0),
            ..camera
        };
        let forward = camera.forward().unwrap();
        assert!((forward - Vec3::new(1.0, 1.0, -3.0).normalize()).length() < 1e-6);
    }
}
