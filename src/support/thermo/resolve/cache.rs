use std::collections::{HashMap, VecDeque};

use uom::si::{f64::Pressure, pressure::pascal};

use crate::support::thermo::EquilibriumState;

/// Number of low mantissa bits dropped when quantizing a cache key component.
///
/// Dropping 12 bits keeps ~40 significant mantissa bits (a relative grid of
/// about 1e-12), so values that differ only by floating-point round-off land
/// on the same entry while physically distinct inputs stay apart.
const QUANTIZE_BITS: u32 = 12;

fn quantize(value: f64) -> u64 {
    value.to_bits() & !((1u64 << QUANTIZE_BITS) - 1)
}

/// Cache key for a resolved equilibrium state.
///
/// Flasher identity is not part of the key: a cache belongs to exactly one
/// resolver, and a resolver is paired with one flasher by its caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(super) struct CacheKey {
    pressure: u64,
    vapor_fraction: u64,
    composition: Vec<u64>,
}

impl CacheKey {
    pub(super) fn new(pressure: Pressure, vapor_fraction: f64, zs: &[f64]) -> Self {
        Self {
            pressure: quantize(pressure.get::<pascal>()),
            vapor_fraction: quantize(vapor_fraction),
            composition: zs.iter().copied().map(quantize).collect(),
        }
    }
}

/// Bounded memoization of resolved equilibrium states.
///
/// Entries are evicted in insertion order once the capacity is reached.
#[derive(Debug)]
pub(super) struct FlashCache {
    capacity: usize,
    entries: HashMap<CacheKey, EquilibriumState>,
    order: VecDeque<CacheKey>,
}

impl FlashCache {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub(super) fn get(&self, key: &CacheKey) -> Option<EquilibriumState> {
        self.entries.get(key).copied()
    }

    pub(super) fn insert(&mut self, key: CacheKey, state: EquilibriumState) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(key.clone(), state).is_some() {
            return;
        }
        self.order.push_back(key);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{MolarEnergy, MolarHeatCapacity, ThermodynamicTemperature},
        molar_energy::joule_per_mole,
        molar_heat_capacity::joule_per_kelvin_mole,
        pressure::pascal,
        thermodynamic_temperature::kelvin,
    };

    fn state(t: f64) -> EquilibriumState {
        EquilibriumState::new(
            ThermodynamicTemperature::new::<kelvin>(t),
            0.0,
            MolarEnergy::new::<joule_per_mole>(1000.0),
            MolarHeatCapacity::new::<joule_per_kelvin_mole>(75.0),
        )
    }

    fn key(p: f64, vf: f64) -> CacheKey {
        CacheKey::new(Pressure::new::<pascal>(p), vf, &[1.0])
    }

    #[test]
    fn round_off_noise_shares_an_entry() {
        let exact = key(101_325.0, 0.5);
        let noisy = key(101_325.0 * (1.0 + 1e-15), 0.5);
        assert_eq!(exact, noisy);
    }

    #[test]
    fn distinct_inputs_stay_apart() {
        assert_ne!(key(101_325.0, 0.5), key(101_325.0, 0.6));
        assert_ne!(key(101_325.0, 0.5), key(201_325.0, 0.5));
        assert_ne!(
            CacheKey::new(Pressure::new::<pascal>(1e5), 0.5, &[0.3, 0.7]),
            CacheKey::new(Pressure::new::<pascal>(1e5), 0.5, &[0.7, 0.3]),
        );
    }

    #[test]
    fn evicts_oldest_entry_at_capacity() {
        let mut cache = FlashCache::new(2);
        cache.insert(key(1.0, 0.0), state(300.0));
        cache.insert(key(2.0, 0.0), state(310.0));
        cache.insert(key(3.0, 0.0), state(320.0));

        assert!(cache.get(&key(1.0, 0.0)).is_none());
        assert!(cache.get(&key(2.0, 0.0)).is_some());
        assert!(cache.get(&key(3.0, 0.0)).is_some());
    }

    #[test]
    fn reinsert_does_not_grow_order() {
        let mut cache = FlashCache::new(2);
        cache.insert(key(1.0, 0.0), state(300.0));
        cache.insert(key(1.0, 0.0), state(301.0));
        cache.insert(key(2.0, 0.0), state(310.0));

        // Both entries still present: the reinsert did not count twice.
        assert!(cache.get(&key(1.0, 0.0)).is_some());
        assert!(cache.get(&key(2.0, 0.0)).is_some());
    }
}
