mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use trilight_composer::color::{
        DEFAULT_PALETTE, MAX_PALETTE_COLORS, Palette, PaletteError, Rgb,
    };

    fn assert_unique(colors: &[Rgb]) {
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b, "duplicate color in {:?}", colors);
            }
        }
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 11);
        assert_eq!(palette.colors(), &DEFAULT_PALETTE);
        assert_unique(palette.colors());
    }

    #[test]
    fn test_palette_new_rejects_bad_sizes() {
        assert_eq!(Palette::new(&[]), Err(PaletteError::Empty));
        let too_many = [Rgb::new(1, 2, 3); MAX_PALETTE_COLORS + 1];
        assert_eq!(
            Palette::new(&too_many),
            Err(PaletteError::TooManyColors(MAX_PALETTE_COLORS + 1))
        );
        assert!(Palette::new(&DEFAULT_PALETTE[..2]).is_ok());
    }

    #[test]
    fn test_random_color_is_from_palette() {
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(10);
        for _ in 0..200 {
            assert!(palette.colors().contains(&palette.random_color(&mut rng)));
        }
    }

    #[test]
    fn test_distinct_colors_have_no_duplicates() {
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..50 {
            assert_unique(&palette.distinct_colors::<2, _>(&mut rng));
            assert_unique(&palette.distinct_colors::<3, _>(&mut rng));
            let all = palette.distinct_colors::<11, _>(&mut rng);
            assert_unique(&all);
            for color in DEFAULT_PALETTE {
                assert!(all.contains(&color));
            }
        }
    }

    #[test]
    fn test_distinct_colors_pad_past_palette_size() {
        let palette = Palette::new(&DEFAULT_PALETTE[..3]).unwrap();
        let mut rng = SmallRng::seed_from_u64(12);
        let colors = palette.distinct_colors::<5, _>(&mut rng);
        assert_unique(&colors[..3]);
        for color in colors {
            assert!(palette.colors().contains(&color));
        }
    }

    #[test]
    fn test_different_random_color_never_repeats() {
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(13);
        for color in DEFAULT_PALETTE {
            for _ in 0..50 {
                let other = palette.different_random_color(&[color], &mut rng);
                assert_ne!(other, color);
                assert!(palette.colors().contains(&other));
            }
        }
    }

    #[test]
    fn test_different_random_color_with_two_entries() {
        let palette = Palette::new(&DEFAULT_PALETTE[..2]).unwrap();
        let mut rng = SmallRng::seed_from_u64(14);
        for _ in 0..20 {
            assert_eq!(
                palette.different_random_color(&[DEFAULT_PALETTE[0]], &mut rng),
                DEFAULT_PALETTE[1]
            );
        }
    }

    #[test]
    fn test_different_random_color_falls_back_when_all_excluded() {
        let palette = Palette::new(&DEFAULT_PALETTE[..1]).unwrap();
        let mut rng = SmallRng::seed_from_u64(15);
        assert_eq!(
            palette.different_random_color(&[DEFAULT_PALETTE[0]], &mut rng),
            DEFAULT_PALETTE[0]
        );
    }
}
