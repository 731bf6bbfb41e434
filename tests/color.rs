mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use trilight_composer::color::{
        DEFAULT_PALETTE, Rgb, apply_brightness, interpolate, jitter, rgb_from_u32,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_interpolate_endpoints() {
        for a in DEFAULT_PALETTE {
            for b in [RED, BLUE, BLACK, WHITE] {
                assert_eq!(interpolate(a, b, 0.0), a);
                assert_eq!(interpolate(a, b, 1.0), b);
            }
        }
    }

    #[test]
    fn test_interpolate_rounds_half_away_from_zero() {
        assert_eq!(interpolate(RED, BLUE, 0.5), Rgb { r: 128, g: 0, b: 128 });
        assert_eq!(
            interpolate(BLACK, WHITE, 0.25),
            Rgb {
                r: 64,
                g: 64,
                b: 64
            }
        );
    }

    #[test]
    fn test_interpolate_clamps_factor() {
        assert_eq!(interpolate(RED, BLUE, -3.0), RED);
        assert_eq!(interpolate(RED, BLUE, 7.5), BLUE);
        assert_eq!(interpolate(RED, BLUE, f32::NAN), RED);
    }

    #[test]
    fn test_apply_brightness() {
        assert_eq!(apply_brightness(WHITE, 1.0), WHITE);
        assert_eq!(apply_brightness(WHITE, 0.0), BLACK);
        assert_eq!(
            apply_brightness(Rgb { r: 200, g: 101, b: 3 }, 0.5),
            Rgb { r: 100, g: 51, b: 2 }
        );
        assert_eq!(apply_brightness(WHITE, 4.0), WHITE);
        assert_eq!(apply_brightness(WHITE, -1.0), BLACK);
    }

    #[test]
    fn test_jitter_without_chance_keeps_color() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(jitter(RED, 0.0, 40, &mut rng), RED);
            assert_eq!(jitter(RED, 1.0, 0, &mut rng), RED);
        }
    }

    #[test]
    fn test_jitter_stays_within_delta_and_channel_range() {
        let mut rng = SmallRng::seed_from_u64(2);
        let base = Rgb { r: 250, g: 5, b: 128 };
        let mut changed = false;
        for _ in 0..500 {
            let noisy = jitter(base, 1.0, 20, &mut rng);
            changed |= noisy != base;
            assert!(noisy.r >= 230);
            assert!(noisy.g <= 25);
            assert!((108..=148).contains(&noisy.b));
        }
        assert!(changed);
    }

    #[test]
    fn test_jitter_saturates_at_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut saw_top = false;
        let mut saw_bottom = false;
        for _ in 0..500 {
            let noisy = jitter(Rgb { r: 255, g: 0, b: 0 }, 1.0, 30, &mut rng);
            saw_top |= noisy.r == 255;
            saw_bottom |= noisy.g == 0;
        }
        assert!(saw_top);
        assert!(saw_bottom);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF8000), Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(rgb_from_u32(0x4B0082), Rgb { r: 75, g: 0, b: 130 });
    }
}
