use anyhow::Result;
use rand::Rng;

use crate::{
    adapters::{Edge, NetworkAdapter},
    config::GeneratorConfig,
    station::Station,
};

/// Demo network: every upper-case letter is connected to every other upper-case letter,
/// the same for lower-case letters, and a single edge A - z bridges the two halves.
pub struct AlphabetAdapter {
    config: GeneratorConfig,
}

impl AlphabetAdapter {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl NetworkAdapter for AlphabetAdapter {
    type Station = Station;
    type Error = anyhow::Error;

    fn edges(&self) -> Result<Vec<Edge<Station>>> {
        let mut rng = self.config.rng();
        let range = self.config.min_weight..=self.config.max_weight;
        let mut edges = vec![];

        // Both orderings of each pair draw a weight; the second one wins on insertion.
        for letters in ['A'..='Z', 'a'..='z'] {
            for c1 in letters.clone() {
                for c2 in letters.clone().filter(|&c2| c2 != c1) {
                    edges.push(Edge::new(
                        Station::from_letter(c1),
                        Station::from_letter(c2),
                        rng.random_range(range.clone()),
                    ));
                }
            }
        }

        edges.push(Edge::new(
            Station::from_letter('A'),
            Station::from_letter('z'),
            rng.random_range(range),
        ));

        Ok(edges)
    }
}
