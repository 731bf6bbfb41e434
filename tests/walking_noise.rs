mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use trilight_composer::animation::WalkingNoiseAnimation;
    use trilight_composer::{
        Animation, AnimationContext, Geometry, LEN_SIDES, Palette, Rgb, Strand,
    };

    #[test]
    fn test_walker_moves_at_most_one_led() {
        let geometry = Geometry::default();
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(70);
        let mut ctx = AnimationContext::new(&geometry, &palette, &mut rng);

        let mut animation = WalkingNoiseAnimation::new(1_000);
        let mut snapshot = animation.initialize(&mut ctx);
        assert!(animation.walker() < LEN_SIDES);

        let mut moved = false;
        for _ in 0..500 {
            let before = animation.walker();
            snapshot = animation.step(&snapshot, &mut ctx).snapshot;
            let after = animation.walker();
            assert!(after < LEN_SIDES);
            assert!(before.abs_diff(after) <= 1);
            moved |= before != after;

            for strand in [Strand::Left, Strand::Right] {
                assert_eq!(
                    snapshot.strand_pixel(strand, after),
                    Some(animation.walker_color())
                );
            }
            assert!(snapshot.top.iter().all(|led| *led == animation.top_color()));
        }
        assert!(moved);
    }

    #[test]
    fn test_noise_stays_near_base_color() {
        let geometry = Geometry::default();
        // A single color makes base, walker and top identical
        let base = Rgb::new(120, 60, 200);
        let palette = Palette::new(&[base]).unwrap();
        let mut rng = SmallRng::seed_from_u64(71);
        let mut ctx = AnimationContext::new(&geometry, &palette, &mut rng);

        let mut animation = WalkingNoiseAnimation::new(1_000).with_noise(1.0, 10);
        let mut snapshot = animation.initialize(&mut ctx);
        assert_eq!(animation.base_color(), base);

        for _ in 0..200 {
            snapshot = animation.step(&snapshot, &mut ctx).snapshot;
            // With a pull of 0.2 the deviation settles below (0.8 * 10) / 0.2
            for strand in [Strand::Left, Strand::Right] {
                for i in 0..LEN_SIDES {
                    let led = snapshot.strand_pixel(strand, i).unwrap();
                    assert!(led.r.abs_diff(base.r) <= 43);
                    assert!(led.g.abs_diff(base.g) <= 43);
                    assert!(led.b.abs_diff(base.b) <= 43);
                }
            }
        }
        assert!(
            (0..LEN_SIDES).any(|i| snapshot.strand_pixel(Strand::Left, i) != Some(base)),
            "noise never changed a pixel"
        );
    }

    #[test]
    fn test_colors_reroll_after_walk_steps() {
        let geometry = Geometry::default();
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(72);
        let mut ctx = AnimationContext::new(&geometry, &palette, &mut rng);

        let mut animation = WalkingNoiseAnimation::new(25);
        let mut snapshot = animation.initialize(&mut ctx);
        assert_ne!(animation.base_color(), animation.walker_color());

        for frame in 1..=50 {
            let step = animation.step(&snapshot, &mut ctx);
            snapshot = step.snapshot;
            assert_eq!(step.done, frame % 25 == 0, "frame {}", frame);
        }
    }
}
