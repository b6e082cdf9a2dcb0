//! Property tests for the simulation laws

use proptest::prelude::*;

use sparkfall::sim::{Particle, ParticleGenerator, Rect};

fn rect() -> impl Strategy<Value = Rect> {
    (-100.0f32..100.0, -100.0f32..100.0, -50.0f32..150.0, -50.0f32..150.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn intersects_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn life_never_negative(values in prop::collection::vec(-1000.0f32..1000.0, 1..32)) {
        let mut p = Particle::new();
        for v in values {
            p.set_life(v);
            prop_assert!(p.life() >= 0.0);
        }
    }

    #[test]
    fn advance_revives_dead_and_never_resets_alive(
        life in -5.0f32..150.0,
        active in any::<bool>(),
        fade in -2.0f32..0.0,
    ) {
        let mut generator = ParticleGenerator::new(10.0, 10.0, 5);
        generator.set_max_particles(1);
        generator.initialize();
        let baseline = generator.particle_life();

        {
            let p = &mut generator.particles_mut()[0];
            p.set_life(life);
            p.set_active(active);
            p.set_fade_speed(fade);
        }
        let was_alive = generator.particles()[0].is_alive();
        let life_before = generator.particles()[0].life();

        generator.advance();
        let p = &generator.particles()[0];

        if was_alive {
            prop_assert_eq!(p.life(), (life_before + fade).max(0.0));
            prop_assert!(p.is_active() == active);
        } else {
            prop_assert!(p.is_alive());
            prop_assert_eq!(p.life(), baseline);
        }
    }

    #[test]
    fn pool_size_fixed_after_initialize(
        initial in 0usize..64,
        later in prop::collection::vec(0usize..1000, 0..8),
    ) {
        let mut generator = ParticleGenerator::new(0.0, 0.0, 1);
        generator.set_max_particles(initial);
        generator.initialize();

        for max in later {
            generator.set_max_particles(max);
            prop_assert_eq!(generator.max_particles(), initial);
            generator.advance();
            prop_assert_eq!(generator.particles().len(), initial);
        }
        generator.initialize();
        prop_assert_eq!(generator.max_particles(), initial);
    }
}
