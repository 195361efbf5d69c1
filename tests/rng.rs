mod tests {
    use led_strip_animator::{NoiseSource, XorShift32, seed_from_noise};

    /// Fake floating-pin ADC: only the low bits vary.
    struct FakeNoise {
        samples: &'static [u16],
        cursor: usize,
    }

    impl NoiseSource for FakeNoise {
        fn sample(&mut self) -> u16 {
            let sample = self.samples[self.cursor % self.samples.len()];
            self.cursor += 1;
            sample
        }
    }

    #[test]
    fn test_seed_spreads_noise_across_the_word() {
        let mut noise = FakeNoise {
            samples: &[0b1011, 0b0110, 0b1101, 0b0001],
            cursor: 0,
        };
        let seed = seed_from_noise(&mut noise);
        // Low bits alone cannot produce anything above bit 15.
        assert!(seed > u32::from(u16::MAX));

        // Same samples, same seed.
        let mut noise = FakeNoise {
            samples: &[0b1011, 0b0110, 0b1101, 0b0001],
            cursor: 0,
        };
        assert_eq!(seed_from_noise(&mut noise), seed);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = XorShift32::new(1234);
        let mut b = XorShift32::new(1234);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_gen_range_is_half_open() {
        let mut rng = XorShift32::new(42);
        let mut saw_low = false;
        for _ in 0..1000 {
            let value = rng.gen_range(3, 7);
            assert!((3..7).contains(&value));
            saw_low |= value == 3;
        }
        assert!(saw_low);
    }

    #[test]
    fn test_empty_range_returns_low() {
        let mut rng = XorShift32::new(42);
        assert_eq!(rng.gen_range(5, 5), 5);
        assert_eq!(rng.gen_range(7, 3), 7);
    }
}
