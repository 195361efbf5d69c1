mod tests {
    use embassy_time::Instant;
    use led_strip_animator::{
        AnimationRunner, Command, CommandQueue, OutputDriver, Rgb, Scheduler, SchedulerConfig,
        SchedulerState, StripBounds,
    };

    const LEDS: usize = 10;
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    struct RecordingDriver {
        writes: usize,
        last: [Rgb; LEDS],
    }

    impl RecordingDriver {
        fn new() -> Self {
            Self {
                writes: 0,
                last: [BLACK; LEDS],
            }
        }
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.writes += 1;
            self.last.copy_from_slice(colors);
        }
    }

    fn scheduler() -> Scheduler<LEDS> {
        Scheduler::new(&SchedulerConfig {
            bounds: StripBounds {
                start: 0,
                count: LEDS,
            },
            seed: 99,
        })
    }

    #[test]
    fn test_commands_drive_the_engine() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let mut runner = AnimationRunner::new(scheduler(), RecordingDriver::new(), queue.receiver());
        let sender = queue.sender();
        let mut now = Instant::from_millis(0);

        sender.try_send(Command::Start(5)).unwrap();
        let result = runner.tick(now);
        assert_eq!(runner.scheduler().current(), Some(5));
        assert_eq!(runner.scheduler().state(), SchedulerState::Running);
        now = result.next_deadline;

        sender.try_send(Command::Stop).unwrap();
        let result = runner.tick(now);
        now = result.next_deadline;
        let _ = runner.tick(now);
        assert_eq!(runner.scheduler().current(), None);
    }

    #[test]
    fn test_rejected_start_leaves_selection_unchanged() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let mut runner = AnimationRunner::new(scheduler(), RecordingDriver::new(), queue.receiver());
        let sender = queue.sender();
        let now = Instant::from_millis(0);

        sender.try_send(Command::Start(1)).unwrap();
        sender.try_send(Command::Start(99)).unwrap();
        runner.tick(now);
        assert_eq!(runner.scheduler().current(), Some(1));
    }

    #[test]
    fn test_committed_frames_reach_the_driver() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let mut runner = AnimationRunner::new(scheduler(), RecordingDriver::new(), queue.receiver());
        let sender = queue.sender();
        let mut now = Instant::from_millis(0);

        // Idle ticks commit nothing.
        runner.tick(now);
        assert_eq!(runner.output().writes, 0);

        sender.try_send(Command::Start(1)).unwrap();
        for _ in 0..5 {
            now = runner.tick(now).next_deadline;
        }

        // One write per committed sweep step, red pixels so far.
        assert_eq!(runner.output().writes, 5);
        assert_eq!(runner.output().last[0], Rgb { r: 128, g: 0, b: 0 });
        assert_eq!(runner.output().last[4], Rgb { r: 128, g: 0, b: 0 });
        assert_eq!(runner.output().last[5], BLACK);
        assert_eq!(runner.scheduler().state(), SchedulerState::Running);
    }

    #[test]
    fn test_queue_overflow_reports_the_command() {
        let queue: CommandQueue<2> = CommandQueue::new();
        let sender = queue.sender();
        sender.try_send(Command::Stop).unwrap();
        sender.try_send(Command::Start(1)).unwrap();
        let err = sender.try_send(Command::Start(2)).unwrap_err();
        assert_eq!(err.0, Command::Start(2));
    }
}
