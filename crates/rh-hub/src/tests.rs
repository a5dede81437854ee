//! Unit tests for rh-hub.

#[cfg(test)]
mod hub_tests {
    use rh_core::{Cell, HubId};

    use crate::{Hub, HubError};

    fn hub(capacity: f64) -> Hub {
        Hub::new(HubId(0), Cell::new(0, 0), capacity)
    }

    #[test]
    fn new_hub_is_empty() {
        let h = hub(1000.0);
        assert_eq!(h.stock_level(), 0.0);
        assert_eq!(h.available_capacity(), 1000.0);
        assert!(h.has_capacity());
    }

    #[test]
    fn overload_rejected_without_mutation() {
        let mut h = hub(10.0);
        let err = h.load(15.0).unwrap_err();
        assert_eq!(
            err,
            HubError::CapacityExceeded { hub: HubId(0), requested: 15.0, available: 10.0 }
        );
        assert_eq!(h.stock_level(), 0.0);
    }

    #[test]
    fn caller_clamped_load_fills_exactly() {
        let mut h = hub(10.0);
        let requested = 15.0_f64;
        let amount = requested.min(h.available_capacity());
        h.load(amount).unwrap();
        assert_eq!(h.stock_level(), 10.0);
        assert!(!h.has_capacity());
    }

    #[test]
    fn roundoff_on_headroom_is_absorbed() {
        let mut h = hub(1.0);
        h.load(0.1).unwrap();
        h.load(0.2).unwrap();
        // 1.0 - 0.30000000000000004 then added back: may overshoot by an ulp.
        let amount = h.available_capacity();
        h.load(amount).unwrap();
        assert!(h.stock_level() <= h.max_capacity());
        assert!(!h.has_capacity());
    }

    #[test]
    fn remove_more_than_stock_rejected() {
        let mut h = hub(10.0);
        h.load(4.0).unwrap();
        let err = h.remove(5.0).unwrap_err();
        assert!(matches!(err, HubError::InsufficientStock { .. }));
        assert_eq!(h.stock_level(), 4.0);
    }

    #[test]
    fn remove_reduces_stock() {
        let mut h = hub(10.0);
        h.load(4.0).unwrap();
        h.remove(1.5).unwrap();
        assert_eq!(h.stock_level(), 2.5);
        h.remove(2.5).unwrap();
        assert_eq!(h.stock_level(), 0.0);
    }

    #[test]
    fn negative_and_nan_amounts_rejected() {
        let mut h = hub(10.0);
        assert!(matches!(h.load(-1.0), Err(HubError::InvalidAmount { .. })));
        assert!(matches!(h.remove(f64::NAN), Err(HubError::InvalidAmount { .. })));
        assert_eq!(h.stock_level(), 0.0);
    }

    #[test]
    fn zero_capacity_hub_has_no_capacity() {
        let h = hub(0.0);
        assert!(!h.has_capacity());
    }
}

#[cfg(test)]
mod store_tests {
    use rh_core::{Cell, HubId};

    use crate::{HubError, HubStore};

    #[test]
    fn push_assigns_dense_ids() {
        let mut store = HubStore::new();
        assert_eq!(store.push(Cell::new(0, 0), 10.0), HubId(0));
        assert_eq!(store.push(Cell::new(1, 1), 10.0), HubId(1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.ids().collect::<Vec<_>>(), vec![HubId(0), HubId(1)]);
    }

    #[test]
    fn unknown_hub_is_error() {
        let store = HubStore::new();
        assert_eq!(store.get(HubId(3)).unwrap_err(), HubError::NotFound(HubId(3)));
    }

    #[test]
    fn total_stock_sums_hubs() {
        let mut store = HubStore::new();
        let a = store.push(Cell::new(0, 0), 10.0);
        let b = store.push(Cell::new(0, 1), 10.0);
        store.get_mut(a).unwrap().load(3.0).unwrap();
        store.get_mut(b).unwrap().load(4.5).unwrap();
        assert_eq!(store.total_stock(), 7.5);
        assert_eq!(store.audit(), 0);
    }
}

#[cfg(test)]
mod fallback_tests {
    use crate::{ConventionalDisposal, RawMaterialSupply};

    #[test]
    fn accumulators_append() {
        let mut d = ConventionalDisposal::default();
        d.dump(2.0);
        d.dump(3.0);
        assert_eq!(d.amount_transferred(), 5.0);

        let mut r = RawMaterialSupply::default();
        r.buy(7.0);
        assert_eq!(r.amount_transferred(), 7.0);
    }
}
