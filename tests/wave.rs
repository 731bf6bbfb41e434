mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use trilight_composer::animation::WaveAnimation;
    use trilight_composer::{
        Animation, AnimationContext, Geometry, LEN_SIDES, Palette, Strand, StrandSnapshot,
    };

    fn lit(snapshot: &StrandSnapshot, strand: Strand, wave: &WaveAnimation) -> Vec<usize> {
        (0..LEN_SIDES)
            .filter(|i| snapshot.strand_pixel(strand, *i) == Some(wave.wave_color()))
            .collect()
    }

    #[test]
    fn test_wave_band_moves_one_led_per_frame() {
        let geometry = Geometry::default();
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(30);
        let mut ctx = AnimationContext::new(&geometry, &palette, &mut rng);

        let mut wave = WaveAnimation::new(8);
        let mut snapshot = wave.initialize(&mut ctx);

        for k in 0..LEN_SIDES {
            let expected: Vec<usize> = (k..(k + 8).min(LEN_SIDES)).collect();
            assert_eq!(lit(&snapshot, Strand::Left, &wave), expected, "frame {}", k);
            assert_eq!(lit(&snapshot, Strand::Right, &wave), expected, "frame {}", k);
            assert!(snapshot.top.iter().all(|led| *led == wave.top_color()));

            let step = wave.step(&snapshot, &mut ctx);
            assert_eq!(step.done, k == LEN_SIDES - 1, "frame {}", k);
            snapshot = step.snapshot;
        }

        assert_eq!(wave.position(), 0);
        let expected: Vec<usize> = (0..8).collect();
        assert_eq!(lit(&snapshot, Strand::Left, &wave), expected);
    }

    #[test]
    fn test_wave_colors_are_pairwise_distinct() {
        let geometry = Geometry::default();
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(31);
        let mut ctx = AnimationContext::new(&geometry, &palette, &mut rng);

        let mut wave = WaveAnimation::default();
        let mut snapshot = wave.initialize(&mut ctx);
        for _ in 0..(LEN_SIDES * 4) {
            assert_ne!(wave.wave_color(), wave.background_color());
            assert_ne!(wave.wave_color(), wave.top_color());
            assert_ne!(wave.background_color(), wave.top_color());
            snapshot = wave.step(&snapshot, &mut ctx).snapshot;
        }
    }
}
