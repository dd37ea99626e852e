use crate::error::ForgeError;
use rand::{Rng, distr::Alphanumeric};
use std::collections::HashMap;

/// Produces secret strings, either by substituting characters of a
/// caller-supplied template through the configured map, or by sampling
/// uniformly from `[A-Za-z0-9]`.
#[derive(Debug, Clone, Default)]
pub struct SecretGenerator {
    char_map: HashMap<char, String>,
}

impl SecretGenerator {
    pub fn new(char_map: HashMap<char, String>) -> Self {
        Self { char_map }
    }

    /// Generate a secret. Template mode wins when both inputs are present;
    /// otherwise `length` is required and must be positive.
    pub fn generate(
        &self,
        template: Option<&str>,
        length: Option<i64>,
    ) -> Result<String, ForgeError> {
        match template {
            Some(template) => Ok(self.substitute(template)),
            None => {
                let length = length.ok_or_else(|| {
                    ForgeError::Validation("either `template` or `length` is required".to_string())
                })?;
                if length <= 0 {
                    return Err(ForgeError::Validation(
                        "`length` must be a positive integer".to_string(),
                    ));
                }
                Ok(random_alphanumeric(length as usize))
            }
        }
    }

    fn substitute(&self, template: &str) -> String {
        template
            .chars()
            .map(|c| match self.char_map.get(&c) {
                Some(replacement) => replacement.clone(),
                None => c.to_string(),
            })
            .collect()
    }
}

/// Thread-local CSPRNG, reseeded from OS entropy.
fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
