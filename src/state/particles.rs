//! Particle field simulation for the hero background.
//!
//! Coordinates are logical (CSS) pixels. The host scales its drawing context
//! by the device pixel ratio, so bounds here must stay the unscaled viewport
//! size; using backing-store pixels would let particles wander off-screen.
//!
//! Lifecycle: a new field is empty. [`ParticleField::reseed`] builds a
//! fresh particle set for a viewport (on startup and on every resize, with
//! the previous set discarded), and [`ParticleField::step`] advances one
//! animation frame.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::Rng;

use crate::config::ParticleSettings;

/// Logical viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
}

impl Particle {
    fn spawn<R: Rng>(rng: &mut R, viewport: Viewport, settings: &ParticleSettings) -> Self {
        let speed = settings.max_speed;
        Self {
            x: uniform(rng, 0.0, viewport.width),
            y: uniform(rng, 0.0, viewport.height),
            dx: uniform(rng, -speed, speed),
            dy: uniform(rng, -speed, speed),
            radius: uniform(rng, settings.min_radius, settings.max_radius),
        }
    }

    /// Move by one velocity step, then reverse any axis that left
    /// `[0, bound]`. Only the sign of the velocity ever changes.
    fn advance(&mut self, viewport: Viewport) {
        self.x += self.dx;
        self.y += self.dy;
        if self.x > viewport.width || self.x < 0.0 {
            self.dx = -self.dx;
        }
        if self.y > viewport.height || self.y < 0.0 {
            self.dy = -self.dy;
        }
    }
}

fn uniform<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low { rng.random_range(low..high) } else { low }
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    settings: ParticleSettings,
    viewport: Option<Viewport>,
    particles: Vec<Particle>,
}

impl ParticleField {
    #[must_use]
    pub fn new(settings: ParticleSettings) -> Self {
        Self { settings, viewport: None, particles: Vec::new() }
    }

    /// Number of particles seeded for `viewport`:
    /// `floor(width * height / area_per_particle)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn count_for(&self, viewport: Viewport) -> usize {
        let per = self.settings.area_per_particle;
        if per <= 0.0 || !per.is_finite() {
            return 0;
        }
        let count = (viewport.area() / per).floor();
        if count.is_finite() && count > 0.0 { count as usize } else { 0 }
    }

    /// Discard every particle and build a new set sized for `viewport`.
    pub fn reseed<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        let count = self.count_for(viewport);
        self.particles = (0..count)
            .map(|_| Particle::spawn(rng, viewport, &self.settings))
            .collect();
        self.viewport = Some(viewport);
        log::debug!("seeded {count} particles for {}x{}", viewport.width, viewport.height);
    }

    /// Advance every particle one frame. No-op before the first reseed.
    pub fn step(&mut self) {
        let Some(viewport) = self.viewport else {
            return;
        };
        for particle in &mut self.particles {
            particle.advance(viewport);
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[must_use]
    pub fn settings(&self) -> &ParticleSettings {
        &self.settings
    }
}
