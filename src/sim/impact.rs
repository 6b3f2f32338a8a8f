//! Transient impact ripples
//!
//! Fixed-size arena compacted in place every tick. Purely cosmetic: a full
//! arena silently drops new impacts.

use glam::Vec2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::{IMPACT_LIFETIME, MAX_IMPACTS};

/// A ripple spawned by a collision
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImpactEvent {
    pub pos: Vec2,
    /// Ticks since creation
    pub age: u32,
}

/// Bounded collection of live impacts, oldest first
#[derive(Debug, Clone)]
pub struct ImpactTracker {
    slots: [ImpactEvent; MAX_IMPACTS],
    len: usize,
}

impl Default for ImpactTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ImpactTracker {
    pub fn new() -> Self {
        Self {
            slots: [ImpactEvent::default(); MAX_IMPACTS],
            len: 0,
        }
    }

    /// Record a new impact; returns false when the arena is full
    pub fn add(&mut self, x: f32, y: f32) -> bool {
        if self.len >= MAX_IMPACTS {
            return false;
        }
        self.slots[self.len] = ImpactEvent {
            pos: Vec2::new(x, y),
            age: 0,
        };
        self.len += 1;
        true
    }

    /// Age every impact by one tick and drop the expired ones
    pub fn tick(&mut self) {
        let mut write = 0;
        for read in 0..self.len {
            let mut impact = self.slots[read];
            impact.age += 1;
            if impact.age < IMPACT_LIFETIME {
                self.slots[write] = impact;
                write += 1;
            }
        }
        self.len = write;
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[ImpactEvent] {
        &self.slots[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImpactEvent> {
        self.as_slice().iter()
    }
}

// Only the live prefix is persisted
impl Serialize for ImpactTracker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ImpactTracker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let live = Vec::<ImpactEvent>::deserialize(deserializer)?;
        let mut tracker = Self::new();
        for impact in live.into_iter().take(MAX_IMPACTS) {
            tracker.slots[tracker.len] = impact;
            tracker.len += 1;
        }
        Ok(tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_starts_at_age_zero() {
        let mut impacts = ImpactTracker::new();
        assert!(impacts.add(12.0, 34.0));
        assert_eq!(impacts.len(), 1);
        assert_eq!(impacts.as_slice()[0].pos, Vec2::new(12.0, 34.0));
        assert_eq!(impacts.as_slice()[0].age, 0);
    }

    #[test]
    fn test_expires_after_lifetime() {
        let mut impacts = ImpactTracker::new();
        impacts.add(0.0, 0.0);
        for _ in 0..IMPACT_LIFETIME - 1 {
            impacts.tick();
        }
        assert_eq!(impacts.len(), 1);
        assert_eq!(impacts.as_slice()[0].age, IMPACT_LIFETIME - 1);
        impacts.tick();
        assert!(impacts.is_empty());
    }

    #[test]
    fn test_full_arena_drops_silently() {
        let mut impacts = ImpactTracker::new();
        for i in 0..MAX_IMPACTS {
            assert!(impacts.add(i as f32, 0.0));
        }
        assert!(!impacts.add(999.0, 0.0));
        assert_eq!(impacts.len(), MAX_IMPACTS);
        assert!(impacts.iter().all(|i| i.pos.x != 999.0));
    }

    #[test]
    fn test_compaction_keeps_order() {
        let mut impacts = ImpactTracker::new();
        impacts.add(1.0, 0.0);
        for _ in 0..5 {
            impacts.tick();
        }
        impacts.add(2.0, 0.0);
        impacts.add(3.0, 0.0);
        for _ in 0..5 {
            impacts.tick();
        }
        // First impact hit age 10 and is gone
        let xs: Vec<f32> = impacts.iter().map(|i| i.pos.x).collect();
        assert_eq!(xs, vec![2.0, 3.0]);
    }

    #[test]
    fn test_serde_keeps_live_prefix() {
        let mut impacts = ImpactTracker::new();
        impacts.add(5.0, 6.0);
        impacts.tick();
        let json = serde_json::to_string(&impacts).unwrap();
        let back: ImpactTracker = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_slice(), impacts.as_slice());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The live set never exceeds capacity nor holds expired impacts
            #[test]
            fn prop_bounded_and_fresh(adds in proptest::collection::vec(0usize..20, 1..60)) {
                let mut impacts = ImpactTracker::new();
                for n in adds {
                    for _ in 0..n {
                        impacts.add(0.0, 0.0);
                    }
                    impacts.tick();
                    prop_assert!(impacts.len() <= MAX_IMPACTS);
                    prop_assert!(impacts.iter().all(|i| i.age < IMPACT_LIFETIME));
                }
            }
        }
    }
}
