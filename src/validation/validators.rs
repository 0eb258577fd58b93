use crate::mask::Pattern;
use crate::mask::format::{self, LiteralMode};
use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// A pure predicate over a raw (or formatted) value.
pub type Validator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

pub const BRAZILIAN_CPF: &str = "BRAZILIAN_CPF";

/// Validators addressable by key, listed in registration order.
pub struct ValidatorRegistry {
    validators: IndexMap<String, Validator>,
}

impl ValidatorRegistry {
    /// An empty registry, without the built-in checksum validators.
    pub fn new() -> Self {
        Self {
            validators: IndexMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(BRAZILIAN_CPF, custom(brazilian_cpf));
        registry
    }

    /// Registers `validator` under `key`, returning the one it replaced.
    pub fn register(&mut self, key: impl Into<String>, validator: Validator) -> Option<Validator> {
        self.validators.insert(key.into(), validator)
    }

    pub fn resolve(&self, key: &str) -> Option<Validator> {
        self.validators.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.validators.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.validators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.validators.keys()).finish()
    }
}

pub fn custom<F>(f: F) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn matching(pattern: &str) -> Result<Validator, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(Arc::new(move |value: &str| re.is_match(value)))
}

/// Passes when `value` fills every input slot of `pattern`.
pub fn complete(pattern: Arc<Pattern>) -> Validator {
    Arc::new(move |value: &str| {
        let output = format::apply(&pattern, value, LiteralMode::Lazy);
        pattern.has_input_slots() && format::is_complete(&pattern, &output)
    })
}

/// Brazilian CPF (national ID) modulus-11 check. Non-digits are ignored,
/// so both `14550200286` and `145.502.002-86` pass.
pub fn brazilian_cpf(value: &str) -> bool {
    let digits = value
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .collect::<Vec<_>>();

    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|digit| *digit == digits[0]) {
        return false;
    }

    cpf_check_digit_matches(&digits, 10) && cpf_check_digit_matches(&digits, 11)
}

// Check digit at 1-based `position` covers the digits before it with
// weights `position..=2`.
fn cpf_check_digit_matches(digits: &[u32], position: usize) -> bool {
    let sum: u32 = digits[..position - 1]
        .iter()
        .zip((2..=position as u32).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    let remainder = (sum * 10) % 11;
    let expected = if remainder >= 10 { 0 } else { remainder };
    digits[position - 1] == expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::compile;

    #[test]
    fn cpf_accepts_valid_numbers() {
        assert!(brazilian_cpf("14550200286"));
        assert!(brazilian_cpf("52998224725"));
        assert!(brazilian_cpf("529.982.247-25"));
    }

    #[test]
    fn cpf_rejects_wrong_check_digits() {
        assert!(!brazilian_cpf("12312312300"));
        assert!(!brazilian_cpf("14550200287"));
        assert!(!brazilian_cpf("14550200296"));
    }

    #[test]
    fn cpf_rejects_repeated_digits() {
        assert!(!brazilian_cpf("11111111111"));
        assert!(!brazilian_cpf("00000000000"));
    }

    #[test]
    fn cpf_rejects_wrong_lengths() {
        assert!(!brazilian_cpf(""));
        assert!(!brazilian_cpf("1455020028"));
        assert!(!brazilian_cpf("145502002860"));
        assert!(!brazilian_cpf("abc"));
    }

    #[test]
    fn registry_resolves_builtin_and_custom_keys() {
        let mut registry = ValidatorRegistry::default();
        assert!(registry.contains(BRAZILIAN_CPF));
        let cpf = registry.resolve(BRAZILIAN_CPF).expect("builtin");
        assert!(cpf("14550200286"));

        registry.register("EVEN_LENGTH", custom(|value| value.len() % 2 == 0));
        let even = registry.resolve("EVEN_LENGTH").expect("custom");
        assert!(even("ab"));
        assert!(!even("abc"));

        assert!(registry.resolve("MISSING").is_none());
        assert_eq!(
            registry.keys().collect::<Vec<_>>(),
            vec![BRAZILIAN_CPF, "EVEN_LENGTH"]
        );
    }

    #[test]
    fn register_replaces_existing_entry() {
        let mut registry = ValidatorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register("K", custom(|_| true)).is_none());
        assert!(registry.register("K", custom(|_| false)).is_some());
        assert_eq!(registry.len(), 1);
        let validator = registry.resolve("K").expect("registered");
        assert!(!validator("x"));
    }

    #[test]
    fn regex_validator() {
        let zip = matching(r"^\d{5}$").expect("valid regex");
        assert!(zip("12345"));
        assert!(!zip("1234"));
        assert!(matching("(").is_err());
    }

    #[test]
    fn complete_validator_needs_every_slot() {
        let validator = complete(Arc::new(compile("##/##")));
        assert!(validator("1225"));
        assert!(validator("12/25"));
        assert!(!validator("122"));
        assert!(!validator(""));
    }
}
