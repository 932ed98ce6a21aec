use crate::{adapters::NetworkAdapter, algorithm::Algorithm};
use itertools::Itertools;
use std::{collections::BTreeMap, fmt::Debug, hash::Hash};
use thiserror::Error;
use tracing::{debug, trace};

mod bfs;
mod dfs;
mod dijkstra;
mod search_state;

/// Travel time along a single edge.
pub type Minutes = u32;

/// Anything usable as a station key. Ordering fixes the neighbor enumeration order,
/// which makes every search deterministic.
pub trait StationKey: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> StationKey for T {}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("edge {from} - {to} has invalid weight {weight}, weights must be at least 1 minute")]
    InvalidWeight {
        from: String,
        to: String,
        weight: Minutes,
    },
    #[error("cannot connect station {0} to itself")]
    SelfLoop(String),
}

/// Weighted undirected graph of stations.
///
/// The adjacency map is kept symmetric: every `add_edge` writes both directions with
/// the same weight, and a repeated pair overwrites the previous weight.
#[derive(Debug, Clone)]
pub struct Network<S> {
    adjacency: BTreeMap<S, BTreeMap<S, Minutes>>,
}

impl<S> Default for Network<S> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<S: StationKey> Network<S> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_adapter<A>(adapter: &A) -> Result<Self, A::Error>
    where
        A: NetworkAdapter<Station = S>,
        A::Error: From<NetworkError>,
    {
        let mut network = Self::new();
        for edge in adapter.edges()? {
            network.add_edge(edge.from, edge.to, edge.minutes)?;
        }

        debug!(
            stations = network.station_count(),
            edges = network.edge_count(),
            "built network from adapter"
        );
        Ok(network)
    }

    pub fn add_edge(&mut self, u: S, v: S, weight: Minutes) -> Result<(), NetworkError> {
        if u == v {
            return Err(NetworkError::SelfLoop(format!("{u:?}")));
        }
        if weight == 0 {
            return Err(NetworkError::InvalidWeight {
                from: format!("{u:?}"),
                to: format!("{v:?}"),
                weight,
            });
        }

        self.adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone(), weight);
        self.adjacency.entry(v).or_default().insert(u, weight);
        Ok(())
    }

    pub fn contains(&self, station: &S) -> bool {
        self.adjacency.contains_key(station)
    }

    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn weight(&self, u: &S, v: &S) -> Option<Minutes> {
        self.adjacency.get(u)?.get(v).copied()
    }

    /// Neighbors of `station` in ascending order. Unknown stations have none.
    pub fn neighbors(&self, station: &S) -> impl Iterator<Item = (&S, Minutes)> {
        self.adjacency
            .get(station)
            .into_iter()
            .flat_map(|n| n.iter().map(|(s, &w)| (s, w)))
    }

    /// Sums the weights along `path`. A consecutive pair without an edge adds nothing.
    pub fn calculate_time(&self, path: &[S]) -> u64 {
        path.iter()
            .tuple_windows()
            .map(|(a, b)| self.weight(a, b).map_or(0, u64::from))
            .sum()
    }

    pub fn find_path(&self, algorithm: Algorithm, src: &S, dest: &S) -> Vec<S> {
        let path = match algorithm {
            Algorithm::Dijkstra => self.dijkstra(src, dest),
            Algorithm::Bfs => self.bfs(src, dest),
            Algorithm::Dfs => self.dfs(src, dest),
        };

        trace!(%algorithm, ?src, ?dest, hops = path.len().saturating_sub(1), "search finished");
        path
    }

    /// Looks up the stored key for both endpoints, so searches can borrow keys from the
    /// network instead of cloning them.
    fn endpoints(&self, src: &S, dest: &S) -> Option<(&S, &S)> {
        let src_key = self.adjacency.get_key_value(src).map(|(k, _)| k);
        let dest_key = self.adjacency.get_key_value(dest).map(|(k, _)| k);

        match (src_key, dest_key) {
            (Some(src), Some(dest)) => Some((src, dest)),
            _ => {
                debug!(?src, ?dest, "unknown station, no path");
                None
            }
        }
    }
}
