use rand::Rng;
use tracing::trace;

use crate::config::{EmitterTiming, ReelConfig};
use crate::particle::{Particle, ParticleBand, ParticleKind};
use crate::scene::Decoration;
use crate::timer::Interval;

/// Which kinds an emitter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindMix {
    Droplets,
    Fruit, // peach or berry, even odds
}

impl KindMix {
    fn pick<R: Rng>(self, rng: &mut R) -> ParticleKind {
        match self {
            KindMix::Droplets => ParticleKind::Droplet,
            KindMix::Fruit => {
                if rng.random::<f32>() > 0.5 {
                    ParticleKind::Peach
                } else {
                    ParticleKind::Berry
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterSpec {
    pub period: f32,
    pub lifetime: f32,
    pub band: ParticleBand,
    pub mix: KindMix,
}

impl EmitterSpec {
    pub fn droplets(timing: EmitterTiming) -> Self {
        Self {
            period: timing.period,
            lifetime: timing.lifetime,
            band: ParticleBand::DROPLET,
            mix: KindMix::Droplets,
        }
    }

    pub fn fruit(timing: EmitterTiming) -> Self {
        Self {
            period: timing.period,
            lifetime: timing.lifetime,
            band: ParticleBand::FRUIT,
            mix: KindMix::Fruit,
        }
    }

    /// The emitter a decoration needs, if any.
    pub fn for_decoration(decoration: Decoration, config: &ReelConfig) -> Option<Self> {
        match decoration {
            Decoration::Droplets => Some(Self::droplets(config.droplets)),
            Decoration::Breakfast => Some(Self::fruit(config.fruit)),
            Decoration::Linen | Decoration::Coffee | Decoration::Bathroom => None,
        }
    }

    /// Most particles alive at once when every removal happens on time.
    pub fn steady_state_limit(&self) -> usize {
        (self.lifetime / self.period).ceil() as usize
    }
}

/// Spawns one particle per period and drops each one after a fixed lifetime.
pub struct Emitter<R: Rng> {
    spec: EmitterSpec,
    spawn: Interval,
    particles: Vec<Particle>,
    rng: R,
}

impl<R: Rng> Emitter<R> {
    /// Creates a stopped emitter.
    pub fn new(spec: EmitterSpec, rng: R) -> Self {
        Self {
            spawn: Interval::new(spec.period),
            spec,
            particles: Vec::new(),
            rng,
        }
    }

    pub fn start(&mut self) {
        self.spawn.start();
    }

    /// Cancels spawning and abandons the particles still alive.
    pub fn stop(&mut self) {
        self.spawn.stop();
        self.particles.clear();
    }

    pub fn is_running(&self) -> bool {
        self.spawn.is_running()
    }

    /// Spawns one particle right now.
    pub fn emit(&mut self) {
        let kind = self.spec.mix.pick(&mut self.rng);
        let particle = Particle::random(&mut self.rng, kind, &self.spec.band);
        trace!(?kind, x = particle.x, duration = particle.duration, "spawned particle");
        self.particles.push(particle);
    }

    pub fn update(&mut self, dt: f32) {
        for particle in self.particles.iter_mut() {
            particle.age += dt;
        }

        // Particles fired inside this step have already lived part of it
        let fired = self.spawn.tick(dt);
        let since_last = self.spawn.elapsed();
        for k in 0..fired {
            self.emit();
            if let Some(particle) = self.particles.last_mut() {
                particle.age = since_last + (fired - 1 - k) as f32 * self.spec.period;
            }
        }

        let lifetime = self.spec.lifetime;
        self.particles.retain(|p| p.age < lifetime);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn spec(&self) -> &EmitterSpec {
        &self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn droplets() -> Emitter<StdRng> {
        let spec = EmitterSpec::droplets(ReelConfig::default().droplets);
        Emitter::new(spec, StdRng::seed_from_u64(11))
    }

    #[test]
    fn stopped_emitter_spawns_nothing() {
        let mut emitter = droplets();
        emitter.update(5.0);
        assert!(emitter.particles().is_empty());
    }

    #[test]
    fn spawns_once_per_period() {
        let mut emitter = droplets();
        emitter.start();
        emitter.update(0.2);
        assert_eq!(emitter.particles().len(), 0);
        emitter.update(0.03);
        assert_eq!(emitter.particles().len(), 1);
    }

    #[test]
    fn droplet_spawned_at_zero_is_gone_after_its_lifetime() {
        let mut emitter = droplets();
        emitter.emit();
        emitter.update(7.99);
        assert_eq!(emitter.particles().len(), 1);
        emitter.update(0.02);
        assert!(emitter.particles().is_empty());
    }

    #[test]
    fn removal_ignores_animation_duration() {
        let spec = EmitterSpec::droplets(EmitterTiming { period: 0.22, lifetime: 20.0 });
        let mut emitter = Emitter::new(spec, StdRng::seed_from_u64(11));
        emitter.emit();
        let duration = emitter.particles()[0].duration;
        let delay = emitter.particles()[0].delay;
        // Still present well after its fall is over
        emitter.update(delay + duration + 0.5);
        assert_eq!(emitter.particles().len(), 1);
        assert_eq!(emitter.particles()[0].phase(), crate::particle::Phase::Settled);
    }

    #[test]
    fn particles_spawned_inside_a_long_step_are_aged() {
        let mut emitter = droplets();
        emitter.start();
        emitter.emit();
        emitter.update(8.01);
        // The particle from t=0 is gone, the 36 spawned at 0.22s steps remain
        assert_eq!(emitter.particles().len(), 36);
        assert!(emitter.particles().iter().all(|p| p.age < 8.0));
        let oldest = emitter.particles().iter().map(|p| p.age).fold(0.0, f32::max);
        assert!((oldest - (8.01 - 0.22)).abs() < 1e-3);
    }

    #[test]
    fn live_count_stays_within_steady_state_limit() {
        let mut emitter = droplets();
        let limit = emitter.spec().steady_state_limit();
        emitter.start();
        for _ in 0..(60 * 30) {
            emitter.update(1.0 / 60.0);
            assert!(emitter.particles().len() <= limit);
        }
        assert!(emitter.particles().len() >= limit - 1);
    }

    #[test]
    fn stop_cancels_spawning_and_drops_particles() {
        let mut emitter = droplets();
        emitter.start();
        emitter.update(2.0);
        assert!(!emitter.particles().is_empty());
        emitter.stop();
        emitter.update(10.0);
        assert!(emitter.particles().is_empty());
        assert!(!emitter.is_running());
    }

    #[test]
    fn fruit_mixes_peaches_and_berries() {
        let spec = EmitterSpec::fruit(ReelConfig::default().fruit);
        let mut emitter = Emitter::new(spec, StdRng::seed_from_u64(5));
        for _ in 0..40 {
            emitter.emit();
        }
        let kinds: Vec<_> = emitter.particles().iter().map(|p| p.kind).collect();
        assert!(kinds.contains(&ParticleKind::Peach));
        assert!(kinds.contains(&ParticleKind::Berry));
        assert!(!kinds.contains(&ParticleKind::Droplet));
    }

    #[test]
    fn only_particle_decorations_get_emitters() {
        let config = ReelConfig::default();
        assert!(EmitterSpec::for_decoration(Decoration::Coffee, &config).is_none());
        let fruit = EmitterSpec::for_decoration(Decoration::Breakfast, &config).unwrap();
        assert_eq!(fruit.lifetime, 9.0);
        assert_eq!(fruit.mix, KindMix::Fruit);
    }
}
