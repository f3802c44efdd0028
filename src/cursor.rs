//! Custom cursor state
//!
//! The page hides the native cursor and renders its own dot, which trails the
//! pointer on a spring so fast flicks feel fluid instead of snappy. Widgets
//! swap the style token on hover enter/leave; the entry point owns one
//! `Cursor` and passes it to whichever closure needs it.

use glam::Vec2;

use crate::consts::MOBILE_BREAKPOINT_PX;

/// Cursor style tokens set by hoverable widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    /// Over a clickable element
    Pointer,
    /// Over media that opens enlarged
    Expand,
    /// Over selectable text
    Text,
}

impl CursorStyle {
    /// Rendered diameter in CSS pixels.
    pub fn diameter_px(&self) -> f32 {
        match self {
            CursorStyle::Default => 16.0,
            CursorStyle::Pointer => 24.0,
            CursorStyle::Expand => 48.0,
            CursorStyle::Text => 16.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Pointer => "pointer",
            CursorStyle::Expand => "expand",
            CursorStyle::Text => "text",
        }
    }
}

/// One-dimensional damped spring integrated with real dt.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    pub fn new(position: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            stiffness,
            damping,
        }
    }

    /// Advance the spring by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let force = (self.target - self.position) * self.stiffness;
        self.velocity += force * dt;
        self.velocity *= (-self.damping * dt).exp();
        self.position += self.velocity * dt;
    }

    /// Within `epsilon` of the target and essentially at rest.
    pub fn settled(&self, epsilon: f32) -> bool {
        (self.target - self.position).abs() < epsilon && self.velocity.abs() < epsilon
    }
}

/// Spring tuning for the cursor trail.
const CURSOR_STIFFNESS: f32 = 200.0;
const CURSOR_DAMPING: f32 = 25.0;

/// The custom cursor: smoothed position, active style, visibility.
#[derive(Debug, Clone)]
pub struct Cursor {
    x: Spring,
    y: Spring,
    style: CursorStyle,
    visible: bool,
    enabled: bool,
}

impl Cursor {
    /// Build the cursor for a given viewport width. Small viewports keep the
    /// native cursor, so the custom one starts (and stays) disabled there.
    pub fn new(viewport_w: f32) -> Self {
        Self {
            x: Spring::new(-100.0, CURSOR_STIFFNESS, CURSOR_DAMPING),
            y: Spring::new(-100.0, CURSOR_STIFFNESS, CURSOR_DAMPING),
            style: CursorStyle::Default,
            visible: false,
            enabled: viewport_w > MOBILE_BREAKPOINT_PX,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Re-evaluate on viewport resize.
    pub fn set_viewport(&mut self, viewport_w: f32) {
        self.enabled = viewport_w > MOBILE_BREAKPOINT_PX;
        if !self.enabled {
            self.visible = false;
        }
    }

    /// Latest raw pointer position (the spring chases this).
    pub fn set_target(&mut self, client_x: f32, client_y: f32) {
        self.x.target = client_x;
        self.y.target = client_y;
        self.visible = self.enabled;
    }

    /// Pointer left / re-entered the document.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible && self.enabled;
    }

    pub fn set_style(&mut self, style: CursorStyle) {
        self.style = style;
    }

    pub fn style(&self) -> CursorStyle {
        self.style
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Advance the trail springs by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
    }

    /// Smoothed position to draw at this frame.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.position, self.y.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_converges() {
        let mut spring = Spring::new(0.0, CURSOR_STIFFNESS, CURSOR_DAMPING);
        spring.target = 100.0;
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.settled(0.5), "position {} velocity {}", spring.position, spring.velocity);
    }

    #[test]
    fn test_spring_is_stable_under_large_dt() {
        let mut spring = Spring::new(0.0, CURSOR_STIFFNESS, CURSOR_DAMPING);
        spring.target = 50.0;
        // A dropped-frame hitch must not explode the integration
        for _ in 0..100 {
            spring.step(0.1);
        }
        assert!(spring.position.is_finite());
        assert!((spring.position - 50.0).abs() < 5.0);
    }

    #[test]
    fn test_cursor_trails_target() {
        let mut cursor = Cursor::new(1280.0);
        cursor.set_target(400.0, 300.0);
        assert!(cursor.visible());

        cursor.step(1.0 / 60.0);
        let mid = cursor.position();
        // Moving toward the target but not teleporting
        assert!(mid.x > -100.0 && mid.x < 400.0);

        for _ in 0..600 {
            cursor.step(1.0 / 60.0);
        }
        let settled = cursor.position();
        assert!((settled.x - 400.0).abs() < 1.0);
        assert!((settled.y - 300.0).abs() < 1.0);
    }

    #[test]
    fn test_mobile_viewport_disables_cursor() {
        let mut cursor = Cursor::new(640.0);
        assert!(!cursor.enabled());
        cursor.set_target(10.0, 10.0);
        assert!(!cursor.visible());

        // Growing the viewport past the breakpoint re-enables it
        cursor.set_viewport(1024.0);
        cursor.set_target(10.0, 10.0);
        assert!(cursor.visible());
    }

    #[test]
    fn test_style_tokens() {
        let mut cursor = Cursor::new(1280.0);
        assert_eq!(cursor.style(), CursorStyle::Default);
        cursor.set_style(CursorStyle::Pointer);
        assert_eq!(cursor.style().diameter_px(), 24.0);
        assert_eq!(cursor.style().as_str(), "pointer");
    }
}
