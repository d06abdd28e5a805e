//! Scene controller
//!
//! Owns the scene's primitives and advances them one frame at a time:
//! sample input, move the sphere, run the narrow-phase test, expose the
//! result. There is no collision response; the sphere is free to
//! interpenetrate the triangle and the only visible effect of a hit is the
//! state exposed here and the diagnostic overlay lines.

mod diagnostics;

pub use diagnostics::{DebugOverlay, NullOverlay};

use crate::collision::query::{self, Contact};
use crate::collision::{Plane, PrimitiveError, Sphere, Triangle};
use crate::config::{ConfigError, SceneConfig};
use crate::foundation::math::Vec3;
use crate::input::{DirectionFlags, DirectionalInput};
use thiserror::Error;

/// Errors produced while building a scene
#[derive(Error, Debug)]
pub enum SceneError {
    /// A configured primitive failed validation
    #[error("invalid primitive: {0}")]
    Primitive(#[from] PrimitiveError),

    /// Scene configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Per-frame contact state of the scene
///
/// Recomputed from scratch every update from the current-frame geometry
/// alone; there is no hysteresis between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ContactState {
    /// The sphere does not touch the triangle
    #[default]
    NoContact,
    /// The sphere touches or penetrates the triangle
    InContact(Contact),
}

/// The collision scene: one movable sphere over one static triangle
///
/// The plane is part of the scene setup alongside the triangle but is not
/// wired into the per-frame test; it is exposed for callers that want the
/// simpler [`query::sphere_plane`] check.
pub struct CollisionScene {
    sphere: Sphere,
    plane: Plane,
    triangle: Triangle,
    move_step: f32,
    contact: ContactState,
}

impl CollisionScene {
    /// Create a scene from already validated primitives
    pub fn new(sphere: Sphere, plane: Plane, triangle: Triangle, move_step: f32) -> Self {
        Self {
            sphere,
            plane,
            triangle,
            move_step,
            contact: ContactState::NoContact,
        }
    }

    /// Build a scene from configuration
    ///
    /// Every configured value passes through the validating primitive
    /// constructors; this is where configuration errors surface.
    pub fn from_config(config: &SceneConfig) -> Result<Self, SceneError> {
        let sphere = Sphere::new(config.sphere.center, config.sphere.radius)?;
        let plane = Plane::new(config.plane.normal, config.plane.distance)?;
        let triangle = Triangle::new(
            config.triangle.p0,
            config.triangle.p1,
            config.triangle.p2,
            config.triangle.normal,
        )?;
        Ok(Self::new(sphere, plane, triangle, config.controls.move_step))
    }

    /// Advance the scene by one frame
    ///
    /// Samples the input once, applies at most one displacement per axis
    /// (the positive direction wins when both signals of an axis are
    /// active), then re-evaluates the sphere/triangle test.
    pub fn update(&mut self, input: &dyn DirectionalInput) {
        let flags = input.sample();

        let mut delta = Vec3::zeros();
        if flags.contains(DirectionFlags::UP) {
            delta.y += self.move_step;
        } else if flags.contains(DirectionFlags::DOWN) {
            delta.y -= self.move_step;
        }
        if flags.contains(DirectionFlags::LEFT) {
            delta.x += self.move_step;
        } else if flags.contains(DirectionFlags::RIGHT) {
            delta.x -= self.move_step;
        }
        self.sphere.translate(delta);

        let next = match query::sphere_triangle(&self.sphere, &self.triangle) {
            Some(contact) => ContactState::InContact(contact),
            None => ContactState::NoContact,
        };

        match (self.contact, next) {
            (ContactState::NoContact, ContactState::InContact(contact)) => {
                log::debug!("sphere entered contact at {:?}", contact.point);
            }
            (ContactState::InContact(_), ContactState::NoContact) => {
                log::debug!("sphere left contact");
            }
            _ => {}
        }
        self.contact = next;
    }

    /// The movable sphere
    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    /// The static plane
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// The static triangle
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// Contact state from the most recent update
    pub fn contact_state(&self) -> ContactState {
        self.contact
    }

    /// Contact of the most recent update, if any
    pub fn contact(&self) -> Option<Contact> {
        match self.contact {
            ContactState::InContact(contact) => Some(contact),
            ContactState::NoContact => None,
        }
    }

    /// Whether the most recent update found a hit
    pub fn is_hit(&self) -> bool {
        matches!(self.contact, ContactState::InContact(_))
    }
}
