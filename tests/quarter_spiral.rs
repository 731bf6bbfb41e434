mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use trilight_composer::animation::{MIN_SPIRAL_DELAY, QuarterSpiralAnimation};
    use trilight_composer::color::BLACK;
    use trilight_composer::{Animation, AnimationContext, Geometry, Palette};

    #[test]
    fn test_quarters_fill_clockwise_after_delay() {
        let geometry = Geometry::default();
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(60);
        let mut ctx = AnimationContext::new(&geometry, &palette, &mut rng);

        let mut spiral = QuarterSpiralAnimation::new(20.0, 0.04);
        let mut snapshot = spiral.initialize(&mut ctx);
        let color = spiral.current_color();
        assert!(snapshot.top_left.iter().all(|led| *led == BLACK));

        for _ in 0..19 {
            snapshot = spiral.step(&snapshot, &mut ctx).snapshot;
        }
        assert!(snapshot.top_left.iter().all(|led| *led == BLACK));

        snapshot = spiral.step(&snapshot, &mut ctx).snapshot;
        assert!(snapshot.top_left.iter().all(|led| *led == color));
        assert!(snapshot.top_right.iter().all(|led| *led == BLACK));

        for _ in 0..20 {
            snapshot = spiral.step(&snapshot, &mut ctx).snapshot;
        }
        assert!(snapshot.top_right.iter().all(|led| *led == color));
        for _ in 0..20 {
            snapshot = spiral.step(&snapshot, &mut ctx).snapshot;
        }
        assert!(snapshot.bottom_right.iter().all(|led| *led == color));
        assert!(snapshot.bottom_left.iter().all(|led| *led == BLACK));
        for _ in 0..20 {
            snapshot = spiral.step(&snapshot, &mut ctx).snapshot;
        }
        assert!(snapshot.bottom_left.iter().all(|led| *led == color));

        // A full round moves on to a new color and a shorter delay
        assert_ne!(spiral.current_color(), color);
        assert!(spiral.delay() < 20.0);
    }

    #[test]
    fn test_delay_accelerates_then_decelerates() {
        let geometry = Geometry::default();
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(61);
        let mut ctx = AnimationContext::new(&geometry, &palette, &mut rng);

        let mut spiral = QuarterSpiralAnimation::new(20.0, 0.04);
        let mut snapshot = spiral.initialize(&mut ctx);

        let mut delays = vec![(spiral.delay(), spiral.is_accelerating())];
        let mut finished = false;
        for _ in 0..200_000 {
            let step = spiral.step(&snapshot, &mut ctx);
            snapshot = step.snapshot;
            if step.done {
                finished = true;
                break;
            }
            let last = *delays.last().unwrap();
            if spiral.delay() != last.0 {
                delays.push((spiral.delay(), spiral.is_accelerating()));
            }
        }
        assert!(finished);
        assert!((spiral.delay() - spiral.initial_delay()).abs() < 1e-3);
        assert!(spiral.is_accelerating());

        let floor = delays
            .iter()
            .position(|(delay, _)| *delay <= MIN_SPIRAL_DELAY)
            .expect("delay never reached the floor");
        assert_eq!(delays[floor].0, MIN_SPIRAL_DELAY);

        for pair in delays[..=floor].windows(2) {
            assert!(pair[1].0 <= pair[0].0, "{:?}", pair);
        }
        for pair in delays[floor..].windows(2) {
            assert!(pair[1].0 >= pair[0].0, "{:?}", pair);
        }
        assert!(delays[floor + 1..].iter().all(|(_, accelerating)| !accelerating));
    }
}
