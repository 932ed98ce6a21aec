use crate::network::StationKey;
use std::collections::{HashMap, HashSet};

/// Scratch state for a single search. Keys are borrowed from the network being searched
/// and the whole struct is dropped when the search returns.
#[derive(Debug)]
pub(super) struct SearchState<'a, S> {
    distances: HashMap<&'a S, u64>,
    visited: HashSet<&'a S>,
    dead_ends: HashSet<&'a S>,
    predecessors: HashMap<&'a S, &'a S>,
}

impl<'a, S: StationKey> SearchState<'a, S> {
    pub fn new() -> Self {
        Self {
            distances: HashMap::new(),
            visited: HashSet::new(),
            dead_ends: HashSet::new(),
            predecessors: HashMap::new(),
        }
    }

    /// Marks `station` visited. Returns false if it already was.
    pub fn visit(&mut self, station: &'a S) -> bool {
        self.visited.insert(station)
    }

    pub fn leave(&mut self, station: &'a S) {
        self.visited.remove(station);
    }

    pub fn is_visited(&self, station: &S) -> bool {
        self.visited.contains(station)
    }

    pub fn mark_dead_end(&mut self, station: &'a S) {
        self.dead_ends.insert(station);
    }

    pub fn is_dead_end(&self, station: &S) -> bool {
        self.dead_ends.contains(station)
    }

    pub fn has_visited_any(&self) -> bool {
        !self.visited.is_empty()
    }

    pub fn record_predecessor(&mut self, station: &'a S, via: &'a S) {
        self.predecessors.insert(station, via);
    }

    pub fn set_distance(&mut self, station: &'a S, distance: u64) {
        self.distances.insert(station, distance);
    }

    /// Stations without a recorded distance are unreached and count as infinitely far.
    pub fn should_update_distance(&self, station: &S, distance: u64) -> bool {
        self.distances
            .get(station)
            .map(|&current| distance < current)
            .unwrap_or(true)
    }

    /// True when a popped heap entry is older than the best distance found since.
    pub fn is_stale(&self, station: &S, distance: u64) -> bool {
        self.distances
            .get(station)
            .map(|&current| distance > current)
            .unwrap_or(false)
    }

    pub fn update_distance(&mut self, station: &'a S, via: &'a S, distance: u64) {
        self.set_distance(station, distance);
        self.record_predecessor(station, via);
    }

    /// Walks predecessor links back from `dest` and returns the path in travel order.
    pub fn path_to(&self, src: &'a S, dest: &'a S) -> Vec<S> {
        let mut path = vec![dest.clone()];
        let mut at = dest;
        while let Some(&prev) = self.predecessors.get(at) {
            path.push(prev.clone());
            at = prev;
        }
        path.reverse();

        discard_unreached(path, src)
    }
}

/// A lone station that isn't the source means the walk never left the destination.
pub(super) fn discard_unreached<S: PartialEq>(mut path: Vec<S>, src: &S) -> Vec<S> {
    if path.len() == 1 && path[0] != *src {
        path.clear();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_follows_predecessors() {
        let stations = ["A", "B", "C", "D"];
        let [a, b, c, d] = &stations;
        let mut state = SearchState::new();
        state.record_predecessor(b, a);
        state.record_predecessor(c, b);
        state.record_predecessor(d, c);

        assert_eq!(state.path_to(a, d), vec!["A", "B", "C", "D"]);
        assert_eq!(state.path_to(a, b), vec!["A", "B"]);
    }

    #[test]
    fn test_path_to_unreached_destination() {
        let stations = ["A", "B"];
        let [a, b] = &stations;
        let state = SearchState::new();

        assert!(state.path_to(a, b).is_empty());
        assert_eq!(state.path_to(a, a), vec!["A"]);
    }

    #[test]
    fn test_distance_bookkeeping() {
        let stations = ["A", "B"];
        let [a, b] = &stations;
        let mut state = SearchState::new();

        assert!(state.should_update_distance(b, 10));
        assert!(!state.is_stale(b, 10));

        state.update_distance(b, a, 7);
        assert!(state.should_update_distance(b, 6));
        assert!(!state.should_update_distance(b, 7));
        assert!(state.is_stale(b, 10));
        assert!(!state.is_stale(b, 7));
    }

    #[test]
    fn test_visit_and_leave() {
        let stations = ["A"];
        let [a] = &stations;
        let mut state = SearchState::new();

        assert!(state.visit(a));
        assert!(!state.visit(a));
        assert!(state.is_visited(a));

        state.leave(a);
        assert!(!state.is_visited(a));
        assert!(!state.has_visited_any());
    }
}
