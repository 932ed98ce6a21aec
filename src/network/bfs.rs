use crate::network::{Network, StationKey, search_state::SearchState};
use std::collections::VecDeque;

impl<S: StationKey> Network<S> {
    /// Fewest-hops path from `src` to `dest`, ignoring edge weights.
    pub fn bfs(&self, src: &S, dest: &S) -> Vec<S> {
        let Some((src, dest)) = self.endpoints(src, dest) else {
            return Vec::new();
        };

        let mut state = SearchState::new();
        let mut queue = VecDeque::new();

        state.visit(src);
        queue.push_back(src);

        while let Some(station) = queue.pop_front() {
            if station == dest {
                break;
            }

            for (next, _) in self.neighbors(station) {
                if state.visit(next) {
                    state.record_predecessor(next, station);
                    queue.push_back(next);
                }
            }
        }

        state.path_to(src, dest)
    }
}
