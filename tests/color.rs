mod tests {
    use led_strip_animator::color::{Rgb, linear_blend, scale8};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_linear_blend_endpoints() {
        assert_eq!(linear_blend(RED, BLUE, 0.0), RED);
        assert_eq!(linear_blend(RED, BLUE, 1.0), BLUE);
        assert_eq!(linear_blend(WHITE, BLACK, 0.0), WHITE);
        assert_eq!(linear_blend(WHITE, BLACK, 1.0), BLACK);
    }

    #[test]
    fn test_linear_blend_clamps_progress() {
        assert_eq!(linear_blend(RED, BLUE, -1.0), RED);
        assert_eq!(linear_blend(RED, BLUE, 2.0), BLUE);
    }

    #[test]
    fn test_linear_blend_midpoint_rounds() {
        assert_eq!(
            linear_blend(BLACK, WHITE, 0.5),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_linear_blend_channels_are_monotonic() {
        let mut previous = linear_blend(RED, BLUE, 0.0);
        for step in 1..=100u32 {
            #[allow(clippy::cast_precision_loss)]
            let t = step as f32 / 100.0;
            let current = linear_blend(RED, BLUE, t);
            // Red fades out, blue fades in.
            assert!(current.r <= previous.r);
            assert!(current.b >= previous.b);
            assert_eq!(current.g, 0);
            previous = current;
        }
    }

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }
}
