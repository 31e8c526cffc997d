//! The inflection engine: configuration and custom overrides behind a
//! reader-writer lock.
//!
//! All rule chains are methods on [`Engine`]. Each one takes the lock only
//! for the lookup it needs and copies the result out, so no lock is held
//! while a word is transformed and no method locks twice at once.

mod error;
mod options;
mod state;

use log::debug;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use error::PatternError;
pub use options::{ClassicalFlags, ClassicalMode, EngineOptions, Gender, PossessiveStyle};
pub(crate) use state::{ArticlePattern, EngineState};

/// English inflection engine with its own configuration.
///
/// Engines are independent: cloning one copies all of its state, and
/// changes to the clone never affect the source. An engine is `Sync`; share
/// it between threads by reference or `Arc`.
///
/// # Example
///
/// ```
/// use inflect::{ClassicalMode, Engine};
///
/// let engine = Engine::new();
/// assert_eq!(engine.plural("formula"), "formulas");
///
/// engine.set_classical(ClassicalMode::Ancient, true);
/// assert_eq!(engine.plural("formula"), "formulae");
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    state: RwLock<EngineState>,
}

impl Clone for Engine {
    fn clone(&self) -> Self {
        let snapshot = self.read().clone();
        Self {
            state: RwLock::new(snapshot),
        }
    }
}

impl Engine {
    /// Creates an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine configured from `options`.
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            state: RwLock::new(EngineState::from_options(&options)),
        }
    }

    /// Snapshot of the current scalar configuration.
    pub fn options(&self) -> EngineOptions {
        self.read().options()
    }

    /// Replaces the scalar configuration, keeping custom overrides.
    pub fn apply_options(&self, options: &EngineOptions) {
        debug!("Applying engine options: {options:?}");
        self.write().apply_options(options);
    }

    /// Restores default configuration and drops every custom override.
    pub fn reset(&self) {
        debug!("Resetting engine");
        *self.write() = EngineState::default();
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, EngineState> {
        self.state.read()
    }

    fn write(&self) -> RwLockWriteGuard<'_, EngineState> {
        self.state.write()
    }

    // =========================================================================
    // Classical modes
    // =========================================================================

    /// Turns one classical behavior on or off.
    pub fn set_classical(&self, mode: ClassicalMode, enabled: bool) {
        debug!("Setting classical {} to {enabled}", mode.name());
        self.write().classical.set(mode, enabled);
    }

    /// Whether the behavior of `mode` is in effect, either through its own
    /// flag or through [`ClassicalMode::General`].
    pub fn is_classical(&self, mode: ClassicalMode) -> bool {
        self.read().classical.is_active(mode)
    }

    /// Sets or clears every classical flag.
    pub fn set_classical_all(&self, enabled: bool) {
        debug!("Setting all classical modes to {enabled}");
        self.write().classical = if enabled {
            ClassicalFlags::ALL
        } else {
            ClassicalFlags::default()
        };
    }

    /// Whether every classical flag is set.
    pub fn is_classical_all(&self) -> bool {
        self.read().classical.all()
    }

    pub fn classical_flags(&self) -> ClassicalFlags {
        self.read().classical
    }

    // =========================================================================
    // Gender, possessives, default count
    // =========================================================================

    pub fn gender(&self) -> Gender {
        self.read().gender
    }

    /// Sets the gender used when singularizing third-person pronouns.
    pub fn set_gender(&self, gender: Gender) {
        debug!("Setting gender to {}", gender.name());
        self.write().gender = gender;
    }

    pub fn possessive_style(&self) -> PossessiveStyle {
        self.read().possessive_style
    }

    pub fn set_possessive_style(&self, style: PossessiveStyle) {
        debug!("Setting possessive style to {}", style.name());
        self.write().possessive_style = style;
    }

    /// The count applied by agreement functions called without one.
    pub fn default_count(&self) -> Option<i64> {
        self.read().default_count
    }

    /// Sets the default count and returns it as text, or clears it and
    /// returns an empty string.
    pub fn num(&self, count: Option<i64>) -> String {
        debug!("Setting default count to {count:?}");
        self.write().default_count = count;
        count.map(|n| n.to_string()).unwrap_or_default()
    }

    // =========================================================================
    // Custom overrides
    // =========================================================================

    /// Registers an irregular plural, replacing any mapping either word
    /// was part of.
    pub fn def_noun(&self, singular: &str, plural: &str) {
        let (singular, plural) = (singular.to_lowercase(), plural.to_lowercase());
        debug!("Defining noun {singular} -> {plural}");
        self.write().nouns.insert(&singular, &plural);
    }

    /// Removes the irregular plural of `singular`, built-in or custom.
    pub fn undef_noun(&self, singular: &str) -> bool {
        let removed = self.write().nouns.remove(&singular.to_lowercase());
        debug!("Undefining noun {singular}: removed={removed}");
        removed
    }

    /// Restores the built-in irregular plurals, dropping custom nouns.
    pub fn reset_nouns(&self) {
        debug!("Resetting noun overrides");
        self.write().nouns = EngineState::default().nouns;
    }

    /// Registers a singular to plural verb form (`"is"` -> `"are"`).
    pub fn def_verb(&self, singular: &str, plural: &str) {
        let (singular, plural) = (singular.to_lowercase(), plural.to_lowercase());
        debug!("Defining verb {singular} -> {plural}");
        self.write().verbs.insert(&singular, &plural);
    }

    pub fn undef_verb(&self, singular: &str) -> bool {
        let removed = self.write().verbs.remove(&singular.to_lowercase());
        debug!("Undefining verb {singular}: removed={removed}");
        removed
    }

    pub fn reset_verbs(&self) {
        debug!("Resetting verb overrides");
        self.write().verbs = EngineState::default().verbs;
    }

    /// Registers a singular to plural adjective form (`"this"` -> `"these"`).
    pub fn def_adj(&self, singular: &str, plural: &str) {
        let (singular, plural) = (singular.to_lowercase(), plural.to_lowercase());
        debug!("Defining adjective {singular} -> {plural}");
        self.write().adjectives.insert(&singular, &plural);
    }

    pub fn undef_adj(&self, singular: &str) -> bool {
        let removed = self.write().adjectives.remove(&singular.to_lowercase());
        debug!("Undefining adjective {singular}: removed={removed}");
        removed
    }

    pub fn reset_adjs(&self) {
        debug!("Resetting adjective overrides");
        self.write().adjectives = EngineState::default().adjectives;
    }

    // =========================================================================
    // Article overrides
    // =========================================================================

    /// Forces "a" before `word`, dropping it from the "an" set.
    pub fn def_a(&self, word: &str) {
        let word = word.to_lowercase();
        debug!("Defining article a for {word}");
        let mut state = self.write();
        state.an_words.remove(&word);
        state.a_words.insert(word);
    }

    /// Forces "an" before `word`, dropping it from the "a" set.
    pub fn def_an(&self, word: &str) {
        let word = word.to_lowercase();
        debug!("Defining article an for {word}");
        let mut state = self.write();
        state.a_words.remove(&word);
        state.an_words.insert(word);
    }

    pub fn undef_a(&self, word: &str) -> bool {
        self.write().a_words.remove(&word.to_lowercase())
    }

    pub fn undef_an(&self, word: &str) -> bool {
        self.write().an_words.remove(&word.to_lowercase())
    }

    /// Forces "a" before words matching `pattern` as a whole.
    ///
    /// Patterns are tested against the lowercase first word, in registration
    /// order, after the exact-word overrides.
    pub fn def_a_pattern(&self, pattern: &str) -> Result<(), PatternError> {
        let compiled = ArticlePattern::compile(pattern)?;
        debug!("Defining article a for pattern {pattern}");
        let mut state = self.write();
        state.an_patterns.retain(|p| p.source != pattern);
        if !state.a_patterns.iter().any(|p| p.source == pattern) {
            state.a_patterns.push(compiled);
        }
        Ok(())
    }

    /// Forces "an" before words matching `pattern` as a whole.
    pub fn def_an_pattern(&self, pattern: &str) -> Result<(), PatternError> {
        let compiled = ArticlePattern::compile(pattern)?;
        debug!("Defining article an for pattern {pattern}");
        let mut state = self.write();
        state.a_patterns.retain(|p| p.source != pattern);
        if !state.an_patterns.iter().any(|p| p.source == pattern) {
            state.an_patterns.push(compiled);
        }
        Ok(())
    }

    /// Removes an "a" pattern by its registered text.
    pub fn undef_a_pattern(&self, pattern: &str) -> bool {
        let mut state = self.write();
        let before = state.a_patterns.len();
        state.a_patterns.retain(|p| p.source != pattern);
        state.a_patterns.len() != before
    }

    /// Removes an "an" pattern by its registered text.
    pub fn undef_an_pattern(&self, pattern: &str) -> bool {
        let mut state = self.write();
        let before = state.an_patterns.len();
        state.an_patterns.retain(|p| p.source != pattern);
        state.an_patterns.len() != before
    }

    /// Drops every custom article word and pattern.
    pub fn def_a_reset(&self) {
        debug!("Resetting article overrides");
        let mut state = self.write();
        state.a_words.clear();
        state.an_words.clear();
        state.a_patterns.clear();
        state.an_patterns.clear();
    }
}
