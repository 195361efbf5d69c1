mod tests {
    use embassy_time::{Duration, Instant};
    use led_strip_animator::{BlendAnimator, Frame, Rgb, StripBounds, linear_blend};

    const LEDS: usize = 8;
    const BOUNDS: StripBounds = StripBounds {
        start: 0,
        count: LEDS,
    };

    const FROM: Rgb = Rgb { r: 200, g: 0, b: 0 };
    const TO: Rgb = Rgb { r: 0, g: 0, b: 100 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn fill_frame(frame: &mut Frame<'_>, color: Rgb) {
        frame.fill(color);
    }

    #[test]
    fn test_channel_lifecycle() {
        let mut animator = BlendAnimator::<1>::new();
        let mut leds = [BLACK; LEDS];
        let mut frame = Frame::new(&mut leds, BOUNDS);

        assert!(!animator.is_animating());
        animator.start(
            0,
            Duration::from_millis(100),
            fill_frame,
            FROM,
            TO,
            Instant::from_millis(0),
        );
        assert!(animator.is_animating());

        animator.update(Instant::from_millis(50), &mut frame);
        assert!(animator.is_animating());
        assert_eq!(frame.get(0), Some(linear_blend(FROM, TO, 0.5)));

        animator.update(Instant::from_millis(99), &mut frame);
        assert!(animator.is_animating());

        // The 1.0 frame is still applied, then the channel deactivates.
        animator.update(Instant::from_millis(100), &mut frame);
        assert!(!animator.is_animating());
        assert_eq!(frame.get(0), Some(TO));
    }

    #[test]
    fn test_finished_channel_never_reactivates() {
        let mut animator = BlendAnimator::<1>::new();
        let mut leds = [BLACK; LEDS];
        let mut frame = Frame::new(&mut leds, BOUNDS);

        animator.start(
            0,
            Duration::from_millis(10),
            fill_frame,
            FROM,
            TO,
            Instant::from_millis(0),
        );
        animator.update(Instant::from_millis(10), &mut frame);
        assert!(!animator.is_animating());

        // Later updates neither re-activate nor touch the frame.
        frame.fill(BLACK);
        for ms in 11..50 {
            animator.update(Instant::from_millis(ms), &mut frame);
        }
        assert!(!animator.is_animating());
        assert_eq!(frame.get(0), Some(BLACK));
    }

    #[test]
    fn test_restart_overwrites_channel_in_place() {
        let mut animator = BlendAnimator::<1>::new();
        let mut leds = [BLACK; LEDS];
        let mut frame = Frame::new(&mut leds, BOUNDS);

        animator.start(
            0,
            Duration::from_millis(100),
            fill_frame,
            FROM,
            TO,
            Instant::from_millis(0),
        );
        // Restart halfway through with a new target; no queueing.
        let retarget = Rgb { r: 0, g: 50, b: 0 };
        animator.start(
            0,
            Duration::from_millis(100),
            fill_frame,
            TO,
            retarget,
            Instant::from_millis(50),
        );

        animator.update(Instant::from_millis(150), &mut frame);
        assert!(!animator.is_animating());
        assert_eq!(frame.get(0), Some(retarget));
    }

    #[test]
    fn test_zero_duration_completes_on_first_update() {
        let mut animator = BlendAnimator::<1>::new();
        let mut leds = [BLACK; LEDS];
        let mut frame = Frame::new(&mut leds, BOUNDS);

        animator.start(
            0,
            Duration::from_millis(0),
            fill_frame,
            FROM,
            TO,
            Instant::from_millis(5),
        );
        assert!(animator.is_animating());
        animator.update(Instant::from_millis(5), &mut frame);
        assert!(!animator.is_animating());
        assert_eq!(frame.get(0), Some(TO));
    }

    #[test]
    fn test_out_of_range_channel_is_ignored() {
        let mut animator = BlendAnimator::<1>::new();
        animator.start(
            1,
            Duration::from_millis(100),
            fill_frame,
            FROM,
            TO,
            Instant::from_millis(0),
        );
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_reset_deactivates_all_channels() {
        let mut animator = BlendAnimator::<2>::new();
        animator.start(
            0,
            Duration::from_millis(100),
            fill_frame,
            FROM,
            TO,
            Instant::from_millis(0),
        );
        animator.start(
            1,
            Duration::from_millis(100),
            fill_frame,
            TO,
            FROM,
            Instant::from_millis(0),
        );
        assert!(animator.is_animating());
        animator.reset();
        assert!(!animator.is_animating());
    }
}
