use serde::Deserialize;

use crate::network::Minutes;

pub mod alphabet;
pub mod edge_list;

/// One undirected connection between two stations.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Edge<S> {
    pub from: S,
    pub to: S,
    pub minutes: Minutes,
}

impl<S> Edge<S> {
    pub fn new(from: S, to: S, minutes: Minutes) -> Self {
        Self { from, to, minutes }
    }
}

pub trait NetworkAdapter {
    type Station;
    type Error;

    /// Returns every edge in insertion order; a repeated pair overwrites the earlier weight.
    fn edges(&self) -> Result<Vec<Edge<Self::Station>>, Self::Error>;
}
