mod tests {
    use trilight_composer::AnimationId;

    #[test]
    fn test_raw_ids_are_dense() {
        for (index, id) in AnimationId::ALL.iter().enumerate() {
            assert_eq!(AnimationId::from_raw(index as u8), Some(*id));
        }
        assert_eq!(AnimationId::from_raw(AnimationId::ALL.len() as u8), None);
        assert_eq!(AnimationId::from_raw(255), None);
    }

    #[test]
    fn test_names_round_trip() {
        for id in AnimationId::ALL {
            assert_eq!(AnimationId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(
            AnimationId::parse_from_str("quarter_spiral"),
            Some(AnimationId::QuarterSpiral)
        );
        assert_eq!(AnimationId::parse_from_str("rainbow"), None);
    }

    #[test]
    fn test_slots_report_their_id() {
        for id in AnimationId::ALL {
            assert_eq!(id.to_slot().id(), id);
        }
    }
}
