#![cfg(feature = "dev")]

use approx::{assert_abs_diff_eq, assert_relative_eq};

use attnviz::internals::algorithms::attention::{
    AttentionScaling, Key, VECTOR_DIM, attend, attention_scores,
};
use attnviz::internals::primitives::vector::Vector2;

fn demo_keys() -> Vec<Key<f64>> {
    vec![
        Key::new("水", Vector2::new(0.7, 0.5)),
        Key::new("風", Vector2::new(0.5, 0.71)),
        Key::new("有", Vector2::new(-0.6, 0.7)),
    ]
}

#[test]
fn test_attention_scores_unscaled() {
    let scores = attention_scores(Vector2::new(0.62, 0.62), &demo_keys(), AttentionScaling::None);
    assert_abs_diff_eq!(scores[0], 0.744, epsilon = 1e-12);
    assert_abs_diff_eq!(scores[1], 0.7502, epsilon = 1e-12);
    assert_abs_diff_eq!(scores[2], 0.062, epsilon = 1e-12);
}

#[test]
fn test_attention_weights_default_query() {
    let out = attend(
        Vector2::new(0.62, 0.62),
        &demo_keys(),
        AttentionScaling::None,
        1.0,
    );
    let expected = [0.398117, 0.400593, 0.201290];
    for (w, e) in out.weights.iter().zip(expected) {
        assert_abs_diff_eq!(*w, e, epsilon = 1e-6);
    }
    assert_abs_diff_eq!(out.weights.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    assert_eq!(out.strongest(), Some(1));
}

#[test]
fn test_attention_sqrt_dim_scaling() {
    assert_eq!(VECTOR_DIM, 2);
    assert_relative_eq!(AttentionScaling::SqrtDim.factor::<f64>(), 0.5f64.sqrt());
    assert_eq!(AttentionScaling::None.factor::<f64>(), 1.0);

    let out = attend(
        Vector2::new(0.62, 0.62),
        &demo_keys(),
        AttentionScaling::SqrtDim,
        1.0,
    );
    assert_abs_diff_eq!(out.scores[0], 0.744 / 2f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(out.weights[2], 0.235486, epsilon = 1e-6);
}

#[test]
fn test_attention_temperature_sharpens() {
    let out = attend(
        Vector2::new(0.62, 0.62),
        &demo_keys(),
        AttentionScaling::None,
        0.5,
    );
    assert_abs_diff_eq!(out.weights[2], 0.112709, epsilon = 1e-6);
}

#[test]
fn test_attention_orthogonal_query_is_uniform() {
    let keys = vec![
        Key::new("a", Vector2::new(1.0, 0.0)),
        Key::new("b", Vector2::new(-1.0, 0.0)),
    ];
    let out = attend(Vector2::new(0.0, 1.0), &keys, AttentionScaling::None, 1.0);
    assert_eq!(out.scores, vec![0.0, -0.0]);
    assert_relative_eq!(out.weights[0], 0.5);
    assert_relative_eq!(out.weights[1], 0.5);
}

#[test]
fn test_attention_no_keys() {
    let out = attend(Vector2::new(1.0, 1.0), &[], AttentionScaling::None, 1.0);
    assert!(out.scores.is_empty());
    assert!(out.weights.is_empty());
    assert_eq!(out.strongest(), None);
}

#[test]
fn test_key_label() {
    let key = Key::new(String::from("wind"), Vector2::new(0.0f64, 1.0));
    assert_eq!(key.label, "wind");
}
