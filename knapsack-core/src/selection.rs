use crate::instance::ProblemInstance;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// A candidate solution: one inclusion flag per item, indexed by original
/// item id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub taken: Vec<bool>,
}

impl Selection {
    pub fn empty(num_items: usize) -> Self {
        Self {
            taken: vec![false; num_items],
        }
    }

    pub fn selected_count(&self) -> usize {
        self.taken.iter().filter(|&&t| t).count()
    }

    pub fn selected_items(&self) -> Vec<usize> {
        self.taken
            .iter()
            .enumerate()
            .filter_map(|(i, &taken)| if taken { Some(i) } else { None })
            .collect()
    }

    pub fn total_weight(&self, instance: &ProblemInstance) -> u64 {
        self.taken
            .iter()
            .zip(&instance.items)
            .filter(|(&taken, _)| taken)
            .map(|(_, item)| item.weight as u64)
            .sum()
    }

    pub fn total_value(&self, instance: &ProblemInstance) -> f64 {
        self.taken
            .iter()
            .zip(&instance.items)
            .filter(|(&taken, _)| taken)
            .map(|(_, item)| item.value)
            .sum()
    }

    /// Checks the selection against the instance and returns its total
    /// value. A selection that exceeds capacity indicates a solver bug, not
    /// a recoverable runtime condition.
    pub fn verify(&self, instance: &ProblemInstance) -> Result<f64> {
        if self.taken.len() != instance.num_items() {
            return Err(anyhow!(
                "Selection covers {} items but instance has {}",
                self.taken.len(),
                instance.num_items()
            ));
        }
        let total_weight = self.total_weight(instance);
        if total_weight > instance.capacity as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                instance.capacity
            ));
        }
        Ok(self.total_value(instance))
    }
}

/// What every solver returns: a feasible selection and its achieved value.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SolveOutcome {
    pub selection: Selection,
    pub total_value: f64,
}
