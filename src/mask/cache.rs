use super::model::Pattern;
use super::parser::compile;
use std::collections::HashMap;
use std::sync::Arc;

/// Compiled patterns keyed by their source string. Grow-only: entries are
/// never evicted or replaced, so every `Arc` handed out stays valid and
/// identical for the life of the cache.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: HashMap<String, Arc<Pattern>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source: &str) -> Option<Arc<Pattern>> {
        self.patterns.get(source).cloned()
    }

    pub fn get_or_compile(&mut self, source: &str) -> Arc<Pattern> {
        if let Some(pattern) = self.patterns.get(source) {
            return Arc::clone(pattern);
        }
        tracing::debug!(pattern = source, "compiling mask pattern");
        let pattern = Arc::new(compile(source));
        self.patterns
            .insert(source.to_string(), Arc::clone(&pattern));
        pattern
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PatternCache;
    use std::sync::Arc;

    #[test]
    fn reuses_compiled_pattern() {
        let mut cache = PatternCache::new();
        let first = cache.get_or_compile("(###) ###-####");
        let second = cache.get_or_compile("(###) ###-####");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn grows_per_distinct_source() {
        let mut cache = PatternCache::new();
        assert!(cache.is_empty());
        cache.get_or_compile("##/##");
        cache.get_or_compile("AA-##");
        assert_eq!(cache.len(), 2);
        assert!(cache.get("AA-##").is_some());
        assert!(cache.get("###").is_none());
    }
}
