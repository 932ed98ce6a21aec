use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    adapters::{Edge, NetworkAdapter},
    station::Station,
};

/// Reads a JSON array of `{"from": "A", "to": "B", "minutes": 5}` objects.
pub struct EdgeListAdapter {
    path: PathBuf,
}

impl EdgeListAdapter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

pub fn parse_edges<R: Read>(reader: R) -> Result<Vec<Edge<Station>>> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

impl NetworkAdapter for EdgeListAdapter {
    type Station = Station;
    type Error = anyhow::Error;

    fn edges(&self) -> Result<Vec<Edge<Station>>> {
        let file = File::open(&self.path).with_context(|| format!("opening {:?}", self.path))?;
        parse_edges(file).with_context(|| format!("reading edge list {:?}", self.path))
    }
}
