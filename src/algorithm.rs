use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Minimum total time
    Dijkstra,
    /// Fewest stops
    Bfs,
    /// First route found by depth-first search
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dijkstra, Algorithm::Bfs, Algorithm::Dfs];

    /// Maps the interactive menu number (1-3) to an algorithm.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Algorithm::Dijkstra),
            2 => Some(Algorithm::Bfs),
            3 => Some(Algorithm::Dfs),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        };
        f.write_str(name)
    }
}
