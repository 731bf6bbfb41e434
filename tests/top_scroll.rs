mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use trilight_composer::animation::{HIGHLIGHT_ORDER, TopScrollAndQuartersAnimation};
    use trilight_composer::{
        Animation, AnimationContext, Geometry, LEN_TOP, Palette, Quarter, StrandSnapshot,
    };

    fn assert_quarters(snapshot: &StrandSnapshot, animation: &TopScrollAndQuartersAnimation) {
        for quarter in Quarter::CLOCKWISE {
            let expected = if quarter == animation.highlighted() {
                animation.highlight_color()
            } else {
                animation.base_color()
            };
            assert!(
                snapshot
                    .segment(quarter.segment())
                    .iter()
                    .all(|led| *led == expected),
                "{:?} has the wrong color",
                quarter
            );
        }
    }

    #[test]
    fn test_top_is_built_from_distinct_blocks() {
        let geometry = Geometry::default();
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(40);
        let mut ctx = AnimationContext::new(&geometry, &palette, &mut rng);

        let mut animation = TopScrollAndQuartersAnimation::new(5, 30);
        let snapshot = animation.initialize(&mut ctx);

        // 30 LEDs rounded up to whole blocks plus one block of pre-roll
        assert_eq!(animation.scroll_len(), 35);
        for block in snapshot.top.chunks(5) {
            assert!(block.iter().all(|led| *led == block[0]));
        }
        for i in (5..LEN_TOP).step_by(5) {
            assert_ne!(snapshot.top[i], snapshot.top[i - 1]);
        }
    }

    #[test]
    fn test_top_scrolls_one_led_per_frame() {
        let geometry = Geometry::default();
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(41);
        let mut ctx = AnimationContext::new(&geometry, &palette, &mut rng);

        let mut animation = TopScrollAndQuartersAnimation::new(5, 30);
        let mut snapshot = animation.initialize(&mut ctx);

        for frame in 1..=5 {
            let next = animation.step(&snapshot, &mut ctx).snapshot;
            assert_eq!(animation.offset(), frame);
            assert_eq!(&next.top[..LEN_TOP - 1], &snapshot.top[1..]);
            snapshot = next;
        }

        // The window ran out of buffer: a fresh one starts over
        animation.step(&snapshot, &mut ctx);
        assert_eq!(animation.offset(), 0);
    }

    #[test]
    fn test_highlight_advances_round_robin() {
        let geometry = Geometry::default();
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ctx = AnimationContext::new(&geometry, &palette, &mut rng);

        let mut animation = TopScrollAndQuartersAnimation::new(5, 30);
        let mut snapshot = animation.initialize(&mut ctx);
        assert_eq!(animation.highlighted(), Quarter::TopLeft);
        assert_ne!(animation.base_color(), animation.highlight_color());
        assert_quarters(&snapshot, &animation);

        for frame in 1..=120 {
            let step = animation.step(&snapshot, &mut ctx);
            snapshot = step.snapshot;
            assert_eq!(step.done, frame == 120, "frame {}", frame);
            assert_eq!(animation.highlighted(), HIGHLIGHT_ORDER[(frame / 30) % 4]);
            assert_quarters(&snapshot, &animation);
        }
    }

    #[test]
    fn test_highlight_order_top_row_first() {
        let geometry = Geometry::default();
        let palette = Palette::default();
        let mut rng = SmallRng::seed_from_u64(43);
        let mut ctx = AnimationContext::new(&geometry, &palette, &mut rng);

        let mut animation = TopScrollAndQuartersAnimation::new(5, 1);
        let mut snapshot = animation.initialize(&mut ctx);
        let mut visited = vec![animation.highlighted()];
        for _ in 0..3 {
            snapshot = animation.step(&snapshot, &mut ctx).snapshot;
            visited.push(animation.highlighted());
        }
        assert_eq!(
            visited,
            [
                Quarter::TopLeft,
                Quarter::TopRight,
                Quarter::BottomLeft,
                Quarter::BottomRight,
            ]
        );
        assert_quarters(&snapshot, &animation);
    }
}
