use rand::Rng;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Droplet,
    Peach,
    Berry,
}

/// Ranges a particle's placement and timing are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleBand {
    pub x: (f32, f32),
    pub duration: (f32, f32),
    pub delay: (f32, f32),
}

impl ParticleBand {
    pub const DROPLET: ParticleBand = ParticleBand {
        x: PARTICLE_X,
        duration: DROPLET_DURATION,
        delay: PARTICLE_DELAY,
    };

    pub const FRUIT: ParticleBand = ParticleBand {
        x: PARTICLE_X,
        duration: FRUIT_DURATION,
        delay: PARTICLE_DELAY,
    };
}

/// Where a particle is in its fall animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Pending,       // still inside its start delay
    Falling(f32),  // animation progress in [0, 1)
    Settled,       // animation over, waiting for removal
}

/// A short-lived decorative element.
///
/// Removal is driven by the emitter's fixed lifetime, not by `duration`: a
/// particle can be dropped mid-fall or stay settled for a while.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    pub x: f32,        // fraction of the panel width
    pub duration: f32, // seconds
    pub delay: f32,    // seconds
    pub age: f32,      // seconds since spawn
}

impl Particle {
    /// Draws a fresh particle from `rng`. Timings are kept to hundredths of a second.
    pub fn random<R: Rng>(rng: &mut R, kind: ParticleKind, band: &ParticleBand) -> Self {
        Self {
            kind,
            x: rng.random_range(band.x.0..band.x.1),
            duration: hundredths(rng.random_range(band.duration.0..band.duration.1)),
            delay: hundredths(rng.random_range(band.delay.0..band.delay.1)),
            age: 0.0,
        }
    }

    pub fn phase(&self) -> Phase {
        let t = self.age - self.delay;
        if t < 0.0 {
            Phase::Pending
        } else if t < self.duration {
            Phase::Falling(t / self.duration)
        } else {
            Phase::Settled
        }
    }
}

fn hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
