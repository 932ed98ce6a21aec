use crate::network::{
    Network, StationKey,
    search_state::{SearchState, discard_unreached},
};

impl<S: StationKey> Network<S> {
    /// First path to `dest` found by a depth-first walk over ascending neighbors.
    ///
    /// Not the shortest in general. Stations are unmarked on the way back out, so only
    /// the current trail blocks the walk.
    pub fn dfs(&self, src: &S, dest: &S) -> Vec<S> {
        let Some((src, dest)) = self.endpoints(src, dest) else {
            return Vec::new();
        };

        let mut state = SearchState::new();
        // One frame per station on the trail, holding the neighbors it hasn't tried yet.
        let mut frames = Vec::new();
        let mut found = None;

        state.visit(src);
        frames.push((src, self.neighbors(src)));

        while let Some((station, neighbors)) = frames.last_mut() {
            if *station == dest {
                found = Some(frames.iter().map(|(s, _)| (*s).clone()).collect());
                break;
            }

            let next = neighbors
                .find(|(next, _)| !state.is_visited(next) && !state.is_dead_end(next));

            match next {
                Some((next, _)) => {
                    state.visit(next);
                    frames.push((next, self.neighbors(next)));
                }
                None => {
                    let station = *station;
                    frames.pop();
                    state.leave(station);

                    // In an undirected network a failed subtree can't reach `dest` from any
                    // trail explored later, so skipping it leaves the first path unchanged.
                    state.mark_dead_end(station);
                }
            }
        }

        for (station, _) in frames.drain(..).rev() {
            state.leave(station);
        }
        debug_assert!(!state.has_visited_any());

        discard_unreached(found.unwrap_or_default(), src)
    }
}
