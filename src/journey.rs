use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    algorithm::Algorithm,
    network::{Network, StationKey},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey<S> {
    pub algorithm: Algorithm,
    pub from: S,
    pub to: S,
    /// Empty when no path exists.
    pub path: Vec<S>,
    pub total_minutes: u64,
}

impl<S: StationKey> Journey<S> {
    pub fn plan(network: &Network<S>, algorithm: Algorithm, from: S, to: S) -> Self {
        let path = network.find_path(algorithm, &from, &to);
        let total_minutes = network.calculate_time(&path);

        Self {
            algorithm,
            from,
            to,
            path,
            total_minutes,
        }
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

impl<S: fmt::Display> fmt::Display for Journey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "No path found between {} and {}", self.from, self.to);
        }

        writeln!(f, "Path: {}", self.path.iter().join(" "))?;
        write!(f, "Total time: {} minutes", self.total_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::Station;

    fn network() -> Network<Station> {
        let mut network = Network::new();
        for (u, v, w) in [("A", "B", 5), ("B", "C", 3), ("A", "C", 10), ("D", "E", 1)] {
            network
                .add_edge(Station::new(u), Station::new(v), w)
                .unwrap();
        }
        network
    }

    #[test]
    fn test_journey_display() {
        let journey = Journey::plan(
            &network(),
            Algorithm::Dijkstra,
            Station::new("A"),
            Station::new("C"),
        );

        assert!(journey.found());
        assert_eq!(journey.to_string(), "Path: A B C\nTotal time: 8 minutes");
    }

    #[test]
    fn test_no_path_display() {
        let journey = Journey::plan(
            &network(),
            Algorithm::Bfs,
            Station::new("A"),
            Station::new("E"),
        );

        assert!(!journey.found());
        assert_eq!(journey.total_minutes, 0);
        assert_eq!(journey.to_string(), "No path found between A and E");
    }

    #[test]
    fn test_journey_json() {
        let journey = Journey::plan(
            &network(),
            Algorithm::Bfs,
            Station::new("A"),
            Station::new("C"),
        );

        let json = serde_json::to_value(&journey).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "algorithm": "bfs",
                "from": "A",
                "to": "C",
                "path": ["A", "C"],
                "totalMinutes": 10,
            })
        );
    }
}
