//! Normalized pointer offset
//!
//! The mousemove handler writes the latest offset; the frame callback reads
//! whatever is current. Stale reads are fine (visual-only), so there is no
//! buffering or queueing anywhere.

/// Pointer position normalized to [-1, 1] on both axes.
///
/// X grows rightward, Y grows upward (screen Y is inverted during capture).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    /// Normalize raw client coordinates against the viewport.
    ///
    /// A degenerate viewport maps to the center offset rather than producing
    /// non-finite values.
    pub fn from_client(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        if viewport_w <= 0.0 || viewport_h <= 0.0 {
            return Self::default();
        }
        Self {
            x: (client_x / viewport_w) * 2.0 - 1.0,
            y: -(client_y / viewport_h) * 2.0 + 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        let p = PointerOffset::from_client(640.0, 360.0, 1280.0, 720.0);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn test_corners() {
        let top_left = PointerOffset::from_client(0.0, 0.0, 1280.0, 720.0);
        assert_eq!(top_left, PointerOffset { x: -1.0, y: 1.0 });

        let bottom_right = PointerOffset::from_client(1280.0, 720.0, 1280.0, 720.0);
        assert_eq!(bottom_right, PointerOffset { x: 1.0, y: -1.0 });
    }

    #[test]
    fn test_degenerate_viewport() {
        let p = PointerOffset::from_client(100.0, 100.0, 0.0, 0.0);
        assert_eq!(p, PointerOffset::default());
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
