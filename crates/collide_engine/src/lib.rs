//! # Collide Engine
//!
//! A minimal real-time 3D collision scene: validated geometric primitives,
//! a sphere-vs-triangle narrow-phase test, and a frame-synchronous scene
//! controller that drives the test from directional input.
//!
//! ## Features
//!
//! - **Validated Primitives**: sphere, plane, and triangle value types that
//!   reject ill-formed geometry at construction
//! - **Narrow-Phase Queries**: stateless closest-point sphere/triangle and
//!   sphere/plane intersection tests with contact reporting
//! - **Scene Controller**: per-frame input sampling, sphere movement, and
//!   contact-state tracking with a diagnostic text overlay
//! - **External Collaborators**: input sources, overlays, and renderers are
//!   reached only through narrow traits; the engine never draws
//!
//! ## Quick Start
//!
//! ```rust
//! use collide_engine::prelude::*;
//!
//! fn main() -> Result<(), SceneError> {
//!     let config = SceneConfig::default();
//!     let mut scene = CollisionScene::from_config(&config)?;
//!
//!     // Hold "down" for one frame: the sphere descends one step.
//!     let input = StaticInput::new(DirectionFlags::DOWN);
//!     scene.update(&input);
//!
//!     if scene.is_hit() {
//!         println!("contact at {:?}", scene.contact());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod collision;
pub mod config;
pub mod foundation;
pub mod input;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        collision::{
            query::{sphere_plane, sphere_triangle, Contact},
            Plane, PrimitiveError, Sphere, Triangle, TriangleFeature,
        },
        config::{Config, ConfigError, SceneConfig},
        foundation::{
            math::{Point3, Vec3},
            time::Timer,
        },
        input::{DirectionFlags, DirectionalInput, StaticInput},
        scene::{CollisionScene, ContactState, DebugOverlay, NullOverlay, SceneError},
    };
}
