//! Camera rig and banner float
//!
//! Scroll drives the camera down and in toward the scene; the pointer tilts
//! the whole particle group a few degrees; the floating title block bobs on
//! its own slow cycle. All pure functions of their inputs.

use glam::Vec3;

use super::pointer::PointerOffset;

/// Camera position for a scroll progress in [0, 1].
///
/// The camera always looks at the origin; only its position moves.
pub fn camera_position(scroll_progress: f32) -> Vec3 {
    let t = scroll_progress.clamp(0.0, 1.0);
    Vec3::new(0.0, 1.0 - t * 3.0, 10.0 - t * 5.0)
}

/// Whole-group tilt (x, y rotation in radians) from the pointer offset.
pub fn group_tilt(pointer: PointerOffset) -> (f32, f32) {
    (pointer.y * 0.1, pointer.x * 0.1)
}

/// Vertical bob and yaw for the floating banner at a given elapsed time.
pub fn banner_float(elapsed_secs: f32) -> (f32, f32) {
    let dy = (elapsed_secs * 0.5).sin() * 0.2;
    let yaw = (elapsed_secs * 0.3).sin() * 0.2;
    (dy, yaw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_endpoints() {
        assert_eq!(camera_position(0.0), Vec3::new(0.0, 1.0, 10.0));
        assert_eq!(camera_position(1.0), Vec3::new(0.0, -2.0, 5.0));
        // Out-of-range scroll clamps instead of overshooting
        assert_eq!(camera_position(2.5), camera_position(1.0));
        assert_eq!(camera_position(-1.0), camera_position(0.0));
    }

    #[test]
    fn test_tilt_is_linear_in_pointer() {
        let (rx, ry) = group_tilt(PointerOffset { x: 1.0, y: -1.0 });
        assert!((rx + 0.1).abs() < 1e-6);
        assert!((ry - 0.1).abs() < 1e-6);

        let (rx, ry) = group_tilt(PointerOffset::default());
        assert_eq!((rx, ry), (0.0, 0.0));
    }

    #[test]
    fn test_banner_float_starts_level() {
        let (dy, yaw) = banner_float(0.0);
        assert_eq!((dy, yaw), (0.0, 0.0));

        // Peak of the bob cycle
        let (dy, _) = banner_float(std::f32::consts::PI);
        assert!(dy.abs() <= 0.2);
    }
}
