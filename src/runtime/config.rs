use crate::bounded_heap::Policy;
use crate::runtime::HeapError;

///////////////////////////////
/// Heap construction options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeapConfig {
    pub policy: Policy,
    pub limit: usize,
    /// Seed for the random policy; entropy when unset
    pub seed: Option<u64>,
}

impl HeapConfig {
    pub fn new(policy: Policy, limit: usize) -> Self {
        Self {
            policy,
            limit,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), HeapError> {
        if self.limit == 0 {
            return Err(HeapError::invalid_configuration(
                self.limit,
                Some("limit must be a positive integer"),
            ));
        }
        Ok(())
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new(Policy::Max, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(HeapConfig::default().validate().is_ok());
        assert!(matches!(
            HeapConfig::new(Policy::Min, 0).validate(),
            Err(HeapError::InvalidConfiguration { limit: 0, .. })
        ));
    }
}
