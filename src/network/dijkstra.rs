use crate::network::{Network, StationKey, search_state::SearchState};
use std::{cmp::Reverse, collections::BinaryHeap};

impl<S: StationKey> Network<S> {
    /// Minimum total time path from `src` to `dest`.
    ///
    /// Returns an empty path when either station is unknown or `dest` can't be reached.
    /// Heap entries compare by `(distance, station)`, so equal distances settle the
    /// smaller station first.
    pub fn dijkstra(&self, src: &S, dest: &S) -> Vec<S> {
        let Some((src, dest)) = self.endpoints(src, dest) else {
            return Vec::new();
        };

        let mut state = SearchState::new();
        let mut heap = BinaryHeap::new();

        state.set_distance(src, 0);
        heap.push(Reverse((0u64, src)));

        while let Some(Reverse((distance, station))) = heap.pop() {
            if station == dest {
                break;
            }

            if state.is_stale(station, distance) {
                continue;
            }

            for (next, minutes) in self.neighbors(station) {
                let candidate = distance + u64::from(minutes);
                if state.should_update_distance(next, candidate) {
                    state.update_distance(next, station, candidate);
                    heap.push(Reverse((candidate, next)));
                }
            }
        }

        state.path_to(src, dest)
    }
}
