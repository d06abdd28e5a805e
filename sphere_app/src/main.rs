//! Sphere drop demo
//!
//! Headless demonstration of the collision scene: the sphere starts above
//! the triangle and descends under scripted "down" input until the
//! narrow-phase test reports contact. Diagnostic overlay lines go to
//! stdout; progress narration goes through the logger.

use collide_engine::prelude::*;

/// Frames to simulate before giving up on a contact
const FRAME_LIMIT: u32 = 240;
/// How often to echo the overlay while descending
const OVERLAY_EVERY: u32 = 30;

/// Overlay that writes each line to stdout with its layout position
struct ConsoleOverlay;

impl DebugOverlay for ConsoleOverlay {
    fn print(&mut self, text: &str, x: f32, y: f32, _scale: f32) {
        println!("[{:>3},{:>3}] {}", x as i32, y as i32, text);
    }
}

struct DemoApp {
    scene: CollisionScene,
    input: StaticInput,
    overlay: ConsoleOverlay,
    timer: Timer,
}

impl DemoApp {
    fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        Ok(Self {
            scene: CollisionScene::from_config(config)?,
            input: StaticInput::new(DirectionFlags::DOWN),
            overlay: ConsoleOverlay,
            timer: Timer::new(),
        })
    }

    /// Run frames until first contact or the frame limit
    fn run(&mut self) {
        log::info!("starting descent from {:?}", self.scene.sphere().center());

        for frame in 1..=FRAME_LIMIT {
            self.scene.update(&self.input);
            self.timer.update();

            if self.scene.is_hit() {
                log::info!("contact on frame {frame}");
                self.scene.write_diagnostics(&mut self.overlay);
                return;
            }
            if frame % OVERLAY_EVERY == 0 {
                self.scene.write_diagnostics(&mut self.overlay);
            }
        }

        log::warn!("no contact within {FRAME_LIMIT} frames");
        self.scene.write_diagnostics(&mut self.overlay);
    }
}

fn main() -> Result<(), SceneError> {
    collide_engine::foundation::logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load_from_file(&path)?,
        None => SceneConfig::default(),
    };

    let mut app = DemoApp::new(&config)?;
    app.run();

    log::info!(
        "simulated {} frames at {:.0} fps average",
        app.timer.frame_count(),
        app.timer.average_fps()
    );
    Ok(())
}
