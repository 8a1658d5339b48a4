//! Name-keyed catalog of taggers
//!
//! Built once at startup, then shared read-only (`&TaggerRegistry` or
//! `Arc<TaggerRegistry>`) with every worker. Registering a name twice and
//! looking up an unknown name are configuration errors.

use crate::error::TaggerError;
use crate::gopher::GopherTagger;
use crate::length::CharLengthTagger;
use crate::tagger::Tagger;
use std::collections::HashMap;
use std::sync::Arc;

/// Every tagger shipped with this crate, in registration order
pub fn builtin_taggers(excerpt_chars: usize) -> Vec<Arc<dyn Tagger>> {
    vec![
        Arc::new(GopherTagger::new().with_excerpt_chars(excerpt_chars)),
        Arc::new(CharLengthTagger),
    ]
}

#[derive(Default)]
pub struct TaggerRegistry {
    taggers: HashMap<String, Arc<dyn Tagger>>,
}

impl TaggerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            taggers: HashMap::new(),
        }
    }

    /// Registry holding the built-in taggers with default settings
    pub fn with_defaults() -> Result<Self, TaggerError> {
        Self::from_taggers(builtin_taggers(crate::gopher::DEFAULT_EXCERPT_CHARS))
    }

    /// Register each tagger under its own `name()`
    pub fn from_taggers<I>(taggers: I) -> Result<Self, TaggerError>
    where
        I: IntoIterator<Item = Arc<dyn Tagger>>,
    {
        let mut registry = Self::new();
        for tagger in taggers {
            let name = tagger.name().to_string();
            registry.register(name, tagger)?;
        }
        Ok(registry)
    }

    /// Add a tagger under `name`. Never replaces an existing entry.
    ///
    /// # Errors
    ///
    /// Returns `TaggerError::DuplicateTagger` if `name` is already registered
    pub fn register(
        &mut self,
        name: impl Into<String>,
        tagger: Arc<dyn Tagger>,
    ) -> Result<(), TaggerError> {
        let name = name.into();
        if self.taggers.contains_key(&name) {
            return Err(TaggerError::DuplicateTagger(name));
        }
        self.taggers.insert(name, tagger);
        Ok(())
    }

    /// Get the tagger registered under `name`
    ///
    /// # Errors
    ///
    /// Returns `TaggerError::UnknownTagger` if nothing is registered under `name`
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Tagger>, TaggerError> {
        self.taggers
            .get(name)
            .cloned()
            .ok_or_else(|| TaggerError::UnknownTagger(name.to_string()))
    }

    /// Look up several names at once, in the order given
    ///
    /// # Errors
    ///
    /// Returns `TaggerError::UnknownTagger` for the first unknown name
    pub fn resolve<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<(String, Arc<dyn Tagger>)>, TaggerError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.lookup(name).map(|tagger| (name.to_string(), tagger))
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.taggers.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.taggers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.taggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taggers.is_empty()
    }
}

impl std::fmt::Debug for TaggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggerRegistry")
            .field("taggers", &self.names())
            .finish()
    }
}
