//! Diagnostic text overlay for the collision scene
//!
//! The scene never draws; it hands formatted lines to whatever implements
//! [`DebugOverlay`]. Line content and the two-decimal coordinate formatting
//! live here, layout and rendering are the implementor's concern.

use super::CollisionScene;
use crate::foundation::math::Point3;

/// Screen x position of every diagnostic line
const TEXT_X: f32 = 50.0;
/// Screen y position of the sphere coordinate line
const SPHERE_LINE_Y: f32 = 180.0;
/// Screen y position of the hit indicator line
const HIT_LINE_Y: f32 = 200.0;
/// Screen y position of the contact coordinate line
const CONTACT_LINE_Y: f32 = 220.0;
/// Text scale for all diagnostic lines
const TEXT_SCALE: f32 = 1.0;

/// Sink for positioned diagnostic text lines
///
/// The narrow contract to the external text-rendering collaborator.
pub trait DebugOverlay {
    /// Queue one text line at a screen position with a scale factor
    fn print(&mut self, text: &str, x: f32, y: f32, scale: f32);
}

/// An overlay that discards everything
///
/// For headless callers that want scene updates without diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOverlay;

impl DebugOverlay for NullOverlay {
    fn print(&mut self, _text: &str, _x: f32, _y: f32, _scale: f32) {}
}

fn format_point(point: Point3) -> String {
    format!("({:.2},{:.2},{:.2})", point.x, point.y, point.z)
}

impl CollisionScene {
    /// Emit the diagnostic lines for the current frame
    ///
    /// Always writes the sphere position; on a hit additionally writes the
    /// `HIT` indicator and the contact coordinates.
    pub fn write_diagnostics(&self, overlay: &mut dyn DebugOverlay) {
        let sphere_line = format!("Sphere:{}", format_point(self.sphere().center()));
        overlay.print(&sphere_line, TEXT_X, SPHERE_LINE_Y, TEXT_SCALE);

        if let Some(contact) = self.contact() {
            overlay.print("HIT", TEXT_X, HIT_LINE_Y, TEXT_SCALE);
            overlay.print(&format_point(contact.point), TEXT_X, CONTACT_LINE_Y, TEXT_SCALE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::input::{DirectionFlags, StaticInput};

    /// Records printed lines for assertions
    #[derive(Default)]
    struct RecordingOverlay {
        lines: Vec<(String, f32, f32)>,
    }

    impl DebugOverlay for RecordingOverlay {
        fn print(&mut self, text: &str, x: f32, y: f32, _scale: f32) {
            self.lines.push((text.to_owned(), x, y));
        }
    }

    #[test]
    fn test_no_contact_emits_sphere_line_only() {
        let scene = CollisionScene::from_config(&SceneConfig::default()).unwrap();
        let mut overlay = RecordingOverlay::default();
        scene.write_diagnostics(&mut overlay);

        assert_eq!(overlay.lines.len(), 1);
        let (text, x, y) = &overlay.lines[0];
        assert_eq!(text, "Sphere:(0.00,2.00,0.00)");
        assert_eq!((*x, *y), (50.0, 180.0));
    }

    #[test]
    fn test_hit_emits_indicator_and_contact() {
        let mut scene = CollisionScene::from_config(&SceneConfig::default()).unwrap();
        let down = StaticInput::new(DirectionFlags::DOWN);
        for _ in 0..110 {
            scene.update(&down);
        }
        assert!(scene.is_hit());

        let mut overlay = RecordingOverlay::default();
        scene.write_diagnostics(&mut overlay);

        assert_eq!(overlay.lines.len(), 3);
        assert_eq!(overlay.lines[1].0, "HIT");
        assert_eq!(overlay.lines[1].2, 200.0);
        assert_eq!(overlay.lines[2].0, "(0.00,0.00,0.00)");
        assert_eq!(overlay.lines[2].2, 220.0);
    }

    #[test]
    fn test_null_overlay_accepts_everything() {
        let scene = CollisionScene::from_config(&SceneConfig::default()).unwrap();
        let mut overlay = NullOverlay;
        scene.write_diagnostics(&mut overlay);
    }

    #[test]
    fn test_negative_coordinates_format() {
        assert_eq!(
            format_point(Point3::new(-1.5, 0.25, 2.0)),
            "(-1.50,0.25,2.00)"
        );
    }
}
