//! Softmax temperature widget.
//!
//! ## Purpose
//!
//! This module holds the state of the next-word softmax demo: a set of
//! example sentences, each with editable candidate words and logits, and a
//! temperature slider. Every snapshot shows the probability of each word.
//!
//! ## Design notes
//!
//! * **Per-example edits**: Words added to or removed from an example stay with
//!   that example when the user switches away and back.
//! * **Validation order**: Adding a word checks the label, then the logit, then
//!   the capacity, then uniqueness.
//!
//! ## Invariants
//!
//! * Every example keeps between 1 and `max_entries` words.
//! * The temperature is positive and finite.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use num_traits::Float;

use crate::engine::output::{SoftmaxEntry, SoftmaxSnapshot};
use crate::engine::validator::Validator;
use crate::math::softmax::{argmax, softmax};
use crate::primitives::errors::VizError;
use crate::primitives::logits::LabeledLogitSet;
use crate::render::Widget;

// ============================================================================
// Built-in Examples
// ============================================================================

/// A sentence prefix with candidate next words and their logits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftmaxExample {
    /// Sentence being completed.
    pub sentence: &'static str,
    /// Candidate words with logits.
    pub entries: &'static [(&'static str, f64)],
}

/// Examples loaded into a new widget.
pub const BUILTIN_EXAMPLES: [SoftmaxExample; 3] = [
    SoftmaxExample {
        sentence: "I read it yesterday, it is a very interesting...",
        entries: &[
            ("door", 0.2),
            ("book", 2.1),
            ("story", 1.2),
            ("pineapple", 0.05),
            ("paper", 0.6),
        ],
    },
    SoftmaxExample {
        sentence: "The weather today is absolutely...",
        entries: &[
            ("beautiful", 1.9),
            ("terrible", -0.5),
            ("perfect", 1.6),
            ("awful", -0.8),
            ("amazing", 1.4),
        ],
    },
    SoftmaxExample {
        sentence: "My favorite programming language is...",
        entries: &[
            ("Python", 2.3),
            ("JavaScript", 1.7),
            ("Java", 0.8),
            ("C++", 0.2),
            ("Rust", 1.1),
        ],
    },
];

// ============================================================================
// Configuration
// ============================================================================

/// Limits and initial values of the softmax widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftmaxWidgetConfig {
    /// Maximum words per example.
    pub max_entries: usize,
    /// Initial temperature.
    pub temperature: f64,
}

impl Default for SoftmaxWidgetConfig {
    fn default() -> Self {
        Self {
            max_entries: 10,
            temperature: 1.0,
        }
    }
}

// ============================================================================
// Widget
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Example<T> {
    sentence: String,
    entries: LabeledLogitSet<T>,
}

/// State of the softmax temperature demo.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftmaxWidget<T> {
    config: SoftmaxWidgetConfig,
    examples: Vec<Example<T>>,
    current: usize,
    temperature: T,
}

impl<T: Float> Default for SoftmaxWidget<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SoftmaxWidget<T> {
    /// Widget with the built-in examples and default limits.
    pub fn new() -> Self {
        let examples = BUILTIN_EXAMPLES
            .iter()
            .map(|ex| {
                let pairs: Vec<(&str, T)> = ex
                    .entries
                    .iter()
                    .map(|&(w, l)| (w, T::from(l).unwrap_or_else(T::zero)))
                    .collect();
                Example {
                    sentence: ex.sentence.to_string(),
                    entries: LabeledLogitSet::from_pairs(&pairs).unwrap_or_default(),
                }
            })
            .collect();

        Self {
            config: SoftmaxWidgetConfig::default(),
            examples,
            current: 0,
            temperature: T::one(),
        }
    }

    /// Widget with the built-in examples and custom limits.
    pub fn with_config(config: SoftmaxWidgetConfig) -> Result<Self, VizError> {
        let temperature = T::from(config.temperature).unwrap_or_else(T::nan);
        Validator::validate_temperature(temperature)?;
        Ok(Self {
            config,
            temperature,
            ..Self::new()
        })
    }

    /// Number of examples.
    #[inline]
    pub fn example_count(&self) -> usize {
        self.examples.len()
    }

    /// Index of the selected example.
    #[inline]
    pub fn current_example(&self) -> usize {
        self.current
    }

    /// Sentence of the selected example.
    pub fn sentence(&self) -> &str {
        &self.examples[self.current].sentence
    }

    /// Words and logits of the selected example.
    pub fn entries(&self) -> &LabeledLogitSet<T> {
        &self.examples[self.current].entries
    }

    /// Current temperature.
    #[inline]
    pub fn temperature(&self) -> T {
        self.temperature
    }

    /// Switch to another example.
    pub fn select_example(&mut self, index: usize) -> Result<(), VizError> {
        Validator::validate_index(index, self.examples.len())?;
        self.current = index;
        tracing::debug!(example = index, "softmax example selected");
        Ok(())
    }

    /// Move the temperature slider.
    pub fn set_temperature(&mut self, temperature: T) -> Result<(), VizError> {
        Validator::validate_temperature(temperature)?;
        self.temperature = temperature;
        tracing::debug!(
            temperature = temperature.to_f64().unwrap_or(f64::NAN),
            "softmax temperature set"
        );
        Ok(())
    }

    /// Add a word to the selected example.
    pub fn add_entry(&mut self, label: &str, logit: T) -> Result<(), VizError> {
        Validator::validate_label(label)?;
        Validator::validate_scalar(logit, "logit")?;
        Validator::validate_capacity(self.entries().len(), self.config.max_entries)?;
        self.examples[self.current].entries.insert(label, logit)?;
        tracing::debug!(label = label.trim(), "softmax entry added");
        Ok(())
    }

    /// Add a word whose logit is given as text, as typed into an input box.
    pub fn add_entry_text(&mut self, label: &str, logit: &str) -> Result<(), VizError> {
        Validator::validate_label(label)?;
        let value = logit
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(T::from)
            .ok_or_else(|| VizError::InvalidNumericValue(format!("logit={}", logit.trim())))?;
        self.add_entry(label, value)
    }

    /// Remove the word at `index` from the selected example.
    pub fn remove_entry(&mut self, index: usize) -> Result<(String, T), VizError> {
        Validator::validate_removal(index, self.entries().len())?;
        let removed = self.examples[self.current].entries.remove(index)?;
        tracing::debug!(label = removed.0.as_str(), "softmax entry removed");
        Ok(removed)
    }

    /// True while another word can be added to the selected example.
    pub fn can_add(&self) -> bool {
        self.entries().len() < self.config.max_entries
    }

    /// Probabilities of the selected example at the current temperature.
    pub fn probabilities(&self) -> Vec<T> {
        softmax(self.entries().logits(), self.temperature)
    }
}

impl<T: Float> Widget for SoftmaxWidget<T> {
    type Snapshot = SoftmaxSnapshot<T>;

    fn snapshot(&self) -> SoftmaxSnapshot<T> {
        let probabilities = self.probabilities();
        let entries = self
            .entries()
            .iter()
            .zip(probabilities.iter().copied())
            .map(|((label, logit), probability)| SoftmaxEntry {
                label: label.into(),
                logit,
                probability,
            })
            .collect();

        SoftmaxSnapshot {
            sentence: self.sentence().into(),
            temperature: self.temperature,
            entries,
            top: argmax(&probabilities),
        }
    }
}
