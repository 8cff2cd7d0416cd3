#![cfg(feature = "dev")]
//! Tests for the softmax temperature widget.
//!
//! ## Test Organization
//!
//! 1. **Examples** - Built-in sentences and switching
//! 2. **Temperature** - Slider validation and its effect
//! 3. **Editing** - Adding and removing candidate words
//! 4. **Snapshot** - Rendered table

use approx::assert_abs_diff_eq;

use attnviz::internals::primitives::errors::VizError;
use attnviz::internals::render::Widget;
use attnviz::internals::widgets::softmax::{BUILTIN_EXAMPLES, SoftmaxWidget, SoftmaxWidgetConfig};

// ============================================================================
// Example Tests
// ============================================================================

/// Test the initial state of a new widget.
#[test]
fn test_softmax_widget_initial_state() {
    let w: SoftmaxWidget<f64> = SoftmaxWidget::new();
    assert_eq!(w.example_count(), 3);
    assert_eq!(w.current_example(), 0);
    assert_eq!(w.sentence(), BUILTIN_EXAMPLES[0].sentence);
    assert_eq!(w.temperature(), 1.0);
    assert_eq!(
        w.entries().labels(),
        &["door", "book", "story", "pineapple", "paper"]
    );
}

/// Test probabilities of the first example at T = 1.
#[test]
fn test_softmax_widget_default_probabilities() {
    let w: SoftmaxWidget<f64> = SoftmaxWidget::new();
    let expected = [0.07839, 0.524108, 0.213086, 0.067471, 0.116944];
    for (p, e) in w.probabilities().iter().zip(expected) {
        assert_abs_diff_eq!(*p, e, epsilon = 1e-5);
    }
}

/// Test switching between examples.
#[test]
fn test_softmax_widget_select_example() {
    let mut w: SoftmaxWidget<f64> = SoftmaxWidget::new();
    w.select_example(2).unwrap();
    assert_eq!(w.current_example(), 2);
    assert_eq!(w.sentence(), "My favorite programming language is...");
    assert_eq!(w.entries().labels()[0], "Python");

    assert_eq!(
        w.select_example(3),
        Err(VizError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(w.current_example(), 2);
}

/// Test that edits stay with the example they were made on.
#[test]
fn test_softmax_widget_edits_are_per_example() {
    let mut w: SoftmaxWidget<f64> = SoftmaxWidget::new();
    w.add_entry("novel", 1.5).unwrap();
    assert_eq!(w.entries().len(), 6);

    w.select_example(1).unwrap();
    assert_eq!(w.entries().len(), 5);

    w.select_example(0).unwrap();
    assert_eq!(w.entries().len(), 6);
    assert!(w.entries().contains_label("novel"));
}

// ============================================================================
// Temperature Tests
// ============================================================================

/// Test that lower temperatures sharpen the distribution.
#[test]
fn test_softmax_widget_temperature() {
    let mut w: SoftmaxWidget<f64> = SoftmaxWidget::new();
    w.set_temperature(0.5).unwrap();
    let probs = w.probabilities();
    assert_abs_diff_eq!(probs[0], 0.017839, epsilon = 1e-5);
    assert_abs_diff_eq!(probs[1], 0.797429, epsilon = 1e-5);

    w.set_temperature(2.0).unwrap();
    assert_abs_diff_eq!(w.probabilities()[1], 0.350197, epsilon = 1e-5);
}

/// Test that a subnormal temperature gives a one-hot distribution.
#[test]
fn test_softmax_widget_tiny_temperature() {
    let mut w: SoftmaxWidget<f64> = SoftmaxWidget::new();
    w.set_temperature(1e-320).unwrap();
    assert_eq!(w.probabilities(), vec![0.0, 1.0, 0.0, 0.0, 0.0]);
}

/// Test that invalid temperatures are rejected and leave the slider alone.
#[test]
fn test_softmax_widget_invalid_temperature() {
    let mut w: SoftmaxWidget<f64> = SoftmaxWidget::new();
    assert_eq!(w.set_temperature(0.0), Err(VizError::InvalidTemperature(0.0)));
    assert!(w.set_temperature(f64::NAN).is_err());
    assert_eq!(w.temperature(), 1.0);

    let config = SoftmaxWidgetConfig {
        temperature: -1.0,
        ..SoftmaxWidgetConfig::default()
    };
    assert!(SoftmaxWidget::<f64>::with_config(config).is_err());
}

// ============================================================================
// Editing Tests
// ============================================================================

/// Test the validation order of new words.
#[test]
fn test_softmax_widget_add_entry_errors() {
    let mut w: SoftmaxWidget<f64> = SoftmaxWidget::new();

    // Label is checked before the logit.
    assert_eq!(w.add_entry("  ", f64::NAN), Err(VizError::EmptyLabel));
    assert_eq!(
        w.add_entry("novel", f64::INFINITY),
        Err(VizError::InvalidNumericValue("logit=inf".to_string()))
    );
    assert_eq!(
        w.add_entry(" BOOK ", 1.0),
        Err(VizError::DuplicateLabel("BOOK".to_string()))
    );
    assert_eq!(w.entries().len(), 5);
}

/// Test adding words from text input.
#[test]
fn test_softmax_widget_add_entry_text() {
    let mut w: SoftmaxWidget<f64> = SoftmaxWidget::new();
    w.add_entry_text(" novel ", " 1.25 ").unwrap();
    assert_eq!(w.entries().labels()[5], "novel");
    assert_eq!(w.entries().logits()[5], 1.25);

    assert_eq!(
        w.add_entry_text("essay", "abc"),
        Err(VizError::InvalidNumericValue("logit=abc".to_string()))
    );
    assert_eq!(w.add_entry_text("", "abc"), Err(VizError::EmptyLabel));
}

/// Test the per-example word limit.
#[test]
fn test_softmax_widget_capacity() {
    let config = SoftmaxWidgetConfig {
        max_entries: 6,
        ..SoftmaxWidgetConfig::default()
    };
    let mut w: SoftmaxWidget<f64> = SoftmaxWidget::with_config(config).unwrap();
    assert!(w.can_add());
    w.add_entry("novel", 1.0).unwrap();
    assert!(!w.can_add());
    assert_eq!(
        w.add_entry("essay", 1.0),
        Err(VizError::TooManyItems { max: 6 })
    );
}

/// Test removing words down to the last one.
#[test]
fn test_softmax_widget_remove_entry() {
    let mut w: SoftmaxWidget<f64> = SoftmaxWidget::new();
    assert_eq!(w.remove_entry(1).unwrap(), ("book".to_string(), 2.1));
    assert_eq!(
        w.remove_entry(9),
        Err(VizError::IndexOutOfRange { index: 9, len: 4 })
    );

    for _ in 0..3 {
        w.remove_entry(0).unwrap();
    }
    assert_eq!(w.entries().len(), 1);
    assert_eq!(w.remove_entry(0), Err(VizError::LastItem));

    let sum: f64 = w.probabilities().iter().sum();
    assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
    assert_eq!(w.probabilities(), vec![1.0]);
}

// ============================================================================
// Snapshot Tests
// ============================================================================

/// Test the snapshot rows and the highlighted word.
#[test]
fn test_softmax_widget_snapshot() {
    let w: SoftmaxWidget<f64> = SoftmaxWidget::new();
    let snap = w.snapshot();

    assert_eq!(snap.sentence, BUILTIN_EXAMPLES[0].sentence);
    assert_eq!(snap.temperature, 1.0);
    assert_eq!(snap.entries.len(), 5);
    assert_eq!(snap.entries[1].label, "book");
    assert_eq!(snap.entries[1].logit, 2.1);
    assert_eq!(snap.top, Some(1));
    assert_eq!(snap.probabilities(), w.probabilities());

    let text = snap.to_string();
    assert!(text.starts_with("\"I read it yesterday, it is a very interesting...\" (T = 1.00)"));
    assert!(text.contains("* book"));
}
