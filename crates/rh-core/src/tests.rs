//! Unit tests for rh-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, HubId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(HubId(100) > HubId(99));
    }

    #[test]
    fn oversized_index_does_not_convert() {
        assert!(AgentId::try_from(u32::MAX as usize + 1).is_err());
        assert_eq!(HubId::try_from(3usize).unwrap(), HubId(3));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(HubId(0).to_string(), "HubId(0)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn from_tuple() {
        assert_eq!(Cell::from((3, 4)), Cell::new(3, 4));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(1, 2).to_string(), "(1, 2)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.to_string(), "T10");
    }

    #[test]
    fn default_config_matches_reference_run() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.total_ticks, 37);
        assert_eq!(cfg.end_tick(), Tick(37));
        assert_eq!(cfg.output_interval_ticks, 0);
        cfg.validate().unwrap();
    }

    #[test]
    fn zero_ticks_rejected() {
        let cfg = SimConfig { total_ticks: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(crate::CoreError::Config(_))));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.gen_range(0..u64::MAX);
            let b: u64 = r2.gen_range(0..u64::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0u32..20);
            assert!(v < 20);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // Out-of-range probabilities are clamped rather than panicking.
        assert!(rng.gen_bool(1.5));
        assert!(!rng.gen_bool(-0.5));
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(7);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}
