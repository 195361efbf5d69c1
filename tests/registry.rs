mod tests {
    use led_strip_animator::registry::{AnimationId, list, lookup};

    #[test]
    fn test_lookup_known_ids() {
        assert_eq!(lookup(1), Some(AnimationId::CopLightsAlternating));
        assert_eq!(lookup(4), Some(AnimationId::RainyDay));
        assert_eq!(lookup(7), Some(AnimationId::YuleLog));
        assert_eq!(lookup(8), Some(AnimationId::HalloweenOrange));
    }

    #[test]
    fn test_lookup_unknown_ids() {
        assert_eq!(lookup(0), None);
        assert_eq!(lookup(9), None);
        assert_eq!(lookup(255), None);
    }

    #[test]
    fn test_catalog_is_ordered_and_consistent() {
        let catalog = list();
        assert_eq!(catalog.len(), 8);

        let mut previous = 0;
        for descriptor in catalog {
            assert!(descriptor.id > previous);
            previous = descriptor.id;

            let animation = lookup(descriptor.id).unwrap();
            assert_eq!(animation.raw(), descriptor.id);
            assert_eq!(animation.as_str(), descriptor.name);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            AnimationId::CopLightsAlternating.as_str(),
            "Cop Lights Alternating"
        );
        assert_eq!(AnimationId::MelloYello.as_str(), "Mello Yello");
        assert_eq!(AnimationId::HalloweenOrange.as_str(), "Halloween Orange");
    }
}
