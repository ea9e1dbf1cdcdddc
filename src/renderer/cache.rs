//! Bounded gradient cache
//!
//! Gradients are keyed by their rounded endpoints and the two palette
//! indices. Endpoints are absolute coordinates, so the whole cache must be
//! dropped whenever the surface is resized.

use std::collections::{HashMap, VecDeque};

use glam::Vec2;

/// Quantized gradient key: rounded endpoints + palette indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradientKey {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub from_color: usize,
    pub to_color: usize,
}

impl GradientKey {
    pub fn new(from: Vec2, to: Vec2, from_color: usize, to_color: usize) -> Self {
        let q = |v: Vec2| (v.x.round() as i32, v.y.round() as i32);
        Self {
            from: q(from),
            to: q(to),
            from_color,
            to_color,
        }
    }
}

/// FIFO-evicting map from [`GradientKey`] to a surface gradient handle
#[derive(Debug)]
pub struct GradientCache<G> {
    capacity: usize,
    entries: HashMap<GradientKey, G>,
    /// Insertion order, oldest first
    order: VecDeque<GradientKey>,
    hits: u64,
    misses: u64,
}

impl<G> GradientCache<G> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &GradientKey) -> bool {
        self.entries.contains_key(key)
    }

    /// (hits, misses) since creation
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Look up `key`, counting the hit or miss
    pub fn get(&mut self, key: &GradientKey) -> Option<&G> {
        match self.entries.get(key) {
            Some(gradient) => {
                self.hits += 1;
                Some(gradient)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert, evicting the oldest entry if full
    pub fn insert(&mut self, key: GradientKey, gradient: G) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(key, gradient).is_some() {
            // Replaced in place; keep original age
            return;
        }
        self.order.push_back(key);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("Gradient cache cleared ({} entries)", self.entries.len());
        }
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(i: i32) -> GradientKey {
        GradientKey::new(Vec2::new(i as f32, 0.0), Vec2::new(0.0, i as f32), 0, 1)
    }

    #[test]
    fn test_key_quantization() {
        let a = GradientKey::new(Vec2::new(10.2, 20.4), Vec2::new(30.6, 40.0), 1, 2);
        let b = GradientKey::new(Vec2::new(9.8, 19.6), Vec2::new(31.4, 39.5), 1, 2);
        assert_eq!(a, b);

        let swapped = GradientKey::new(Vec2::new(10.2, 20.4), Vec2::new(30.6, 40.0), 2, 1);
        assert_ne!(a, swapped);
    }

    #[test]
    fn test_eviction_at_capacity() {
        let mut cache = GradientCache::new(100);
        for i in 0..100 {
            cache.insert(key(i), i);
        }
        assert_eq!(cache.len(), 100);

        cache.insert(key(100), 100);
        assert_eq!(cache.len(), 100);
        // Exactly the oldest went away
        assert!(!cache.contains(&key(0)));
        assert!(cache.contains(&key(1)));
        assert!(cache.contains(&key(100)));
    }

    #[test]
    fn test_reinsert_does_not_grow() {
        let mut cache = GradientCache::new(2);
        cache.insert(key(1), "a");
        cache.insert(key(1), "b");
        assert_eq!(cache.len(), 1);
        cache.insert(key(2), "c");
        cache.insert(key(3), "d");
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&key(1)));
    }

    #[test]
    fn test_get_counts_hits_and_misses() {
        let mut cache = GradientCache::new(4);
        assert_eq!(cache.get(&key(7)), None);
        cache.insert(key(7), 70);
        assert_eq!(cache.get(&key(7)), Some(&70));
        assert_eq!(cache.get(&key(7)), Some(&70));
        assert_eq!(cache.stats(), (2, 1));
    }

    #[test]
    fn test_zero_capacity_never_stores() {
        let mut cache = GradientCache::new(0);
        cache.insert(key(1), 5);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&key(1)), None);
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut cache = GradientCache::new(usize::MAX);
        cache.insert(key(1), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), usize::MAX);
    }

    #[test]
    fn test_clear() {
        let mut cache = GradientCache::new(10);
        for i in 0..5 {
            cache.insert(key(i), i);
        }
        cache.clear();
        assert!(cache.is_empty());
        cache.insert(key(9), 9);
        assert_eq!(cache.len(), 1);
    }
}
