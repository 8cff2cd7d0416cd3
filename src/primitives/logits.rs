//! Ordered collection of labelled logits.
//!
//! ## Purpose
//!
//! `LabeledLogitSet` holds the (label, logit) pairs shown by the softmax widget.
//! Insertion order is display order.
//!
//! ## Invariants
//!
//! * Labels are non-empty after trimming.
//! * Labels are unique under case-insensitive comparison.
//! * Every logit is finite.
//!
//! ## Non-goals
//!
//! * Capacity limits and "keep at least one" rules belong to the widget
//!   configuration and are checked by the `Validator`, not here.

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

use crate::primitives::errors::VizError;

/// An ordered sequence of `(label, logit)` pairs with unique labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabeledLogitSet<T> {
    labels: Vec<String>,
    logits: Vec<T>,
}

impl<T: Float> Default for LabeledLogitSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LabeledLogitSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            logits: Vec::new(),
        }
    }

    /// Build a set from pairs, rejecting empty or duplicate labels.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[(S, T)]) -> Result<Self, VizError> {
        let mut set = Self::new();
        for (label, logit) in pairs {
            set.insert(label.as_ref(), *logit)?;
        }
        Ok(set)
    }

    /// Append a pair after trimming the label.
    pub fn insert(&mut self, label: &str, logit: T) -> Result<(), VizError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(VizError::EmptyLabel);
        }
        if !logit.is_finite() {
            return Err(VizError::InvalidNumericValue(format!(
                "logit={}",
                logit.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if self.contains_label(label) {
            return Err(VizError::DuplicateLabel(label.to_string()));
        }
        self.labels.push(label.to_string());
        self.logits.push(logit);
        Ok(())
    }

    /// Remove and return the pair at `index`.
    pub fn remove(&mut self, index: usize) -> Result<(String, T), VizError> {
        if index >= self.len() {
            return Err(VizError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok((self.labels.remove(index), self.logits.remove(index)))
    }

    /// True when a label equal to `label` (ignoring case) exists.
    pub fn contains_label(&self, label: &str) -> bool {
        let needle = label.trim().to_lowercase();
        self.labels.iter().any(|l| l.to_lowercase() == needle)
    }

    /// Number of pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the set has no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in display order.
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Logits in display order.
    #[inline]
    pub fn logits(&self) -> &[T] {
        &self.logits
    }

    /// Iterate over `(label, logit)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.logits.iter().copied())
    }
}
