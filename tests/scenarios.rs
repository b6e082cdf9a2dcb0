//! End-to-end frame scenarios

use std::cell::{Cell, RefCell};

use sparkfall::sim::{
    BounceBehavior, Collidable, CollisionBehavior, CollisionDetector, Particle, ParticleGenerator,
    Rect, step,
};
use sparkfall::{Settings, build_detector, build_generator, renderer};

/// Counts hooks and records pairs by slot tag (stored in z)
#[derive(Default)]
struct Counter {
    bounds: Cell<usize>,
    pairs: RefCell<Vec<(u8, u8)>>,
}

impl CollisionBehavior for Counter {
    fn bounds_collided(&self, _particle: &mut Particle, _bounds: &Rect) {
        self.bounds.set(self.bounds.get() + 1);
    }

    fn particles_collided(&self, one: &mut Particle, two: &mut Particle) {
        self.pairs
            .borrow_mut()
            .push((one.entity.z() as u8, two.entity.z() as u8));
    }
}

fn particle(x: f32, y: f32, tag: u8) -> Particle {
    let mut p = Particle::new();
    p.entity.set_position(x, y, tag as f32);
    p
}

#[test]
fn out_of_bounds_fires_bounds_hook_only() {
    let counter = Counter::default();
    let mut detector = CollisionDetector::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    detector.add_behavior(&counter);

    // Second particle overlaps the first one's boundary
    let mut particles = vec![particle(101.0, 50.0, 0), particle(101.5, 50.5, 1)];
    particles[1].entity.set_collision_eligible(false);

    detector.check_collisions(&mut particles);

    assert_eq!(counter.bounds.get(), 1);
    assert!(counter.pairs.borrow().is_empty());
}

#[test]
fn overlapping_pair_fires_once() {
    let counter = Counter::default();
    let mut detector = CollisionDetector::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    detector.add_behavior(&counter);

    let mut a = particle(10.0, 10.0, 0);
    a.entity.set_width(2.0);
    a.entity.set_height(2.0);
    let b = particle(11.0, 11.0, 1);
    assert!(a.boundary().intersects(&b.boundary()));

    let mut particles = vec![a, b];
    detector.check_collisions(&mut particles);

    assert_eq!(*counter.pairs.borrow(), vec![(0, 1)]);
    assert_eq!(counter.bounds.get(), 0);
}

#[test]
fn four_particles_each_pair_once_never_reversed() {
    let counter = Counter::default();
    let mut detector = CollisionDetector::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    detector.add_behavior(&counter);

    let mut particles: Vec<Particle> = (0..4).map(|i| particle(50.0, 50.0, i)).collect();
    detector.check_collisions(&mut particles);

    let pairs = counter.pairs.borrow();
    assert_eq!(*pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    assert!(pairs.iter().all(|(a, b)| a < b));
}

#[test]
fn fade_to_zero_then_respawn() {
    let mut generator = ParticleGenerator::new(20.0, 30.0, 42);
    generator.set_max_particles(1);
    generator.set_particle_life(1.0).unwrap();
    generator.set_spread_fade(-1.0, -1.0).unwrap();
    generator.initialize();
    assert_eq!(generator.particles()[0].life(), 1.0);

    generator.advance();
    let p = &generator.particles()[0];
    assert_eq!(p.life(), 0.0);
    assert_eq!(p.color().a, 0.0);
    assert!(!p.is_alive());

    generator.advance();
    let p = &generator.particles()[0];
    assert_eq!(p.life(), 1.0);
    assert!(p.is_alive());
    assert!((19.0..=21.0).contains(&p.entity.x()));
    assert!((29.0..=31.0).contains(&p.entity.y()));
}

#[test]
fn fountain_runs_from_settings() {
    let settings = Settings::from_json(r#"{ "seed": 3, "generator": { "max_particles": 30 } }"#)
        .unwrap();
    let mut generator = build_generator(&settings).unwrap();
    let bounce = BounceBehavior::default();
    let detector = build_detector(&settings, &bounce);

    let mut saw_bounds = false;
    for _ in 0..300 {
        let stats = step(&mut generator, &detector);
        saw_bounds |= stats.collisions.bounds_hits > 0;
    }

    assert_eq!(generator.max_particles(), 30);
    assert!(saw_bounds, "particles should eventually fall out of the plane");

    let snapshot = renderer::snapshot(generator.particles());
    assert_eq!(snapshot.len(), generator.alive_count());
    for state in &snapshot {
        assert!((0.0..=1.0).contains(&state.color.a));
    }
}
