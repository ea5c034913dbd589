use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedCatalogError {
    Empty,
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for SeedCatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "seed catalog must contain at least one seed"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "seed index {} out of range for catalog of {}", index, len)
            }
        }
    }
}

impl Error for SeedCatalogError {}

/// Ordered, cyclic list of fractal constants. A zero seed means "self-seeded".
#[derive(Debug, Clone, PartialEq)]
pub struct SeedCatalog {
    seeds: Vec<Complex>,
    active_index: usize,
}

impl SeedCatalog {
    pub fn new(seeds: Vec<Complex>) -> Result<Self, SeedCatalogError> {
        if seeds.is_empty() {
            return Err(SeedCatalogError::Empty);
        }

        Ok(Self {
            seeds,
            active_index: 0,
        })
    }

    #[must_use]
    pub fn current(&self) -> Complex {
        self.seeds[self.active_index]
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    #[must_use]
    pub fn seeds(&self) -> &[Complex] {
        &self.seeds
    }

    pub fn next(&mut self) -> Complex {
        self.active_index = (self.active_index + 1) % self.seeds.len();
        self.current()
    }

    pub fn prev(&mut self) -> Complex {
        self.active_index = (self.active_index + self.seeds.len() - 1) % self.seeds.len();
        self.current()
    }

    pub fn select(&mut self, index: usize) -> Result<Complex, SeedCatalogError> {
        if index >= self.seeds.len() {
            return Err(SeedCatalogError::IndexOutOfRange {
                index,
                len: self.seeds.len(),
            });
        }

        self.active_index = index;
        Ok(self.current())
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self {
            seeds: super::presets::default_seeds(),
            active_index: 0,
        }
    }
}
