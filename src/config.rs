use anyhow::{Result, ensure};
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::network::Minutes;

/// Controls how the generated demo network draws its edge weights.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible networks. `None` draws from the OS.
    pub seed: Option<u64>,
    pub min_weight: Minutes,
    pub max_weight: Minutes,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_weight: 1,
            max_weight: 20,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_weight >= 1,
            "min weight must be at least 1 minute, got {}",
            self.min_weight
        );
        ensure!(
            self.min_weight <= self.max_weight,
            "min weight {} is greater than max weight {}",
            self.min_weight,
            self.max_weight
        );
        Ok(())
    }

    /// Applies values given on the command line; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        min_weight: Option<Minutes>,
        max_weight: Option<Minutes>,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(min_weight) = min_weight {
            self.min_weight = min_weight;
        }
        if let Some(max_weight) = max_weight {
            self.max_weight = max_weight;
        }
        self
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_default_matches_demo_range() {
        let config = GeneratorConfig::default();

        assert_eq!((config.min_weight, config.max_weight), (1, 20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let zero = GeneratorConfig {
            min_weight: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let inverted = GeneratorConfig {
            min_weight: 10,
            max_weight: 5,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"seed": 3, "maxWeight": 9}"#).unwrap();

        assert_eq!(
            config,
            GeneratorConfig {
                seed: Some(3),
                min_weight: 1,
                max_weight: 9,
            }
        );
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let from_file: GeneratorConfig =
            serde_json::from_str(r#"{"seed": 3, "minWeight": 2, "maxWeight": 9}"#).unwrap();

        let config = from_file.with_overrides(Some(8), None, Some(30));

        assert_eq!(
            config,
            GeneratorConfig {
                seed: Some(8),
                min_weight: 2,
                max_weight: 30,
            }
        );
    }

    #[test]
    fn test_missing_overrides_keep_file_values() {
        let from_file: GeneratorConfig =
            serde_json::from_str(r#"{"seed": 3, "minWeight": 2, "maxWeight": 9}"#).unwrap();

        assert_eq!(from_file.clone().with_overrides(None, None, None), from_file);

        let config = from_file.with_overrides(None, Some(5), None);
        assert_eq!(config.seed, Some(3));
        assert_eq!((config.min_weight, config.max_weight), (5, 9));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GeneratorConfig {
            seed: Some(42),
            ..Default::default()
        };

        let mut first = config.rng();
        let mut second = config.rng();
        let b: Vec<u32> = (0..5).map(|_| first.random_range(0..1000)).collect();
        let c: Vec<u32> = (0..5).map(|_| second.random_range(0..1000)).collect();

        assert_eq!(b, c);
    }
}
