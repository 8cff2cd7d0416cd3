//! Tests for the public builder API.
//!
//! ## Test Organization
//!
//! 1. **Softmax** - Builder defaults, validation and apply
//! 2. **Attention** - Builder defaults and input checks
//! 3. **PCA** - Builder defaults, minimum points and solvers

use approx::assert_abs_diff_eq;

use attnviz::prelude::*;

// ============================================================================
// Softmax Tests
// ============================================================================

/// Test the default softmax model.
#[test]
fn test_softmax_builder_defaults() {
    let model = Softmax::<f64>::new().build().unwrap();
    assert_eq!(model.temperature(), 1.0);

    let probs = model.apply(&[0.2, 2.1, 1.2, 0.05, 0.6]).unwrap();
    let expected = [0.07839, 0.524108, 0.213086, 0.067471, 0.116944];
    for (p, e) in probs.iter().zip(expected) {
        assert_abs_diff_eq!(*p, e, epsilon = 1e-5);
    }
}

/// Test softmax builder validation.
#[test]
fn test_softmax_builder_validation() {
    assert_eq!(
        Softmax::<f64>::new().temperature(0.0).build(),
        Err(VizError::InvalidTemperature(0.0))
    );
    assert_eq!(
        Softmax::<f64>::new().temperature(1.0).temperature(2.0).build(),
        Err(VizError::DuplicateParameter {
            parameter: "temperature"
        })
    );
}

/// Test apply on empty and invalid input.
#[test]
fn test_softmax_apply_edge_cases() {
    let model = Softmax::new().temperature(0.1f64).build().unwrap();
    assert!(model.apply(&[]).unwrap().is_empty());
    assert_eq!(
        model.apply(&[1.0, f64::NAN]),
        Err(VizError::InvalidNumericValue("scores[1]=NaN".to_string()))
    );

    let probs = model.apply(&[0.2, 2.1, 1.2, 0.05, 0.6]).unwrap();
    assert_abs_diff_eq!(probs[1], 0.999876, epsilon = 1e-6);
}

/// Test apply on scores whose scaled values leave the float range.
#[test]
fn test_softmax_apply_huge_scores() {
    let model = Softmax::new().temperature(0.5f64).build().unwrap();
    assert_eq!(model.apply(&[1e308, 0.0]), Ok(vec![1.0, 0.0]));
}

// ============================================================================
// Attention Tests
// ============================================================================

fn demo_keys() -> Vec<Key<f64>> {
    vec![
        Key::new("水", Vector2::new(0.7, 0.5)),
        Key::new("風", Vector2::new(0.5, 0.71)),
        Key::new("有", Vector2::new(-0.6, 0.7)),
    ]
}

/// Test the default attention model.
#[test]
fn test_attention_builder_defaults() {
    let model = Attention::<f64>::new().build().unwrap();
    assert_eq!(model.scaling(), AttentionScaling::None);
    assert_eq!(model.temperature(), 1.0);

    let out = model.attend(Vector2::new(0.62, 0.62), &demo_keys()).unwrap();
    assert_abs_diff_eq!(out.weights[0], 0.398117, epsilon = 1e-6);
    assert_eq!(out.strongest(), Some(1));
}

/// Test the scaled attention model.
#[test]
fn test_attention_builder_scaled() {
    let model = Attention::new()
        .scaling(AttentionScaling::SqrtDim)
        .temperature(1.0f64)
        .build()
        .unwrap();
    let out = model.attend(Vector2::new(0.62, 0.62), &demo_keys()).unwrap();
    assert_abs_diff_eq!(out.weights[2], 0.235486, epsilon = 1e-6);
}

/// Test attention builder and input validation.
#[test]
fn test_attention_validation() {
    assert_eq!(
        Attention::<f64>::new()
            .scaling(AttentionScaling::None)
            .scaling(AttentionScaling::SqrtDim)
            .build(),
        Err(VizError::DuplicateParameter { parameter: "scaling" })
    );
    assert_eq!(
        Attention::<f64>::new().temperature(-1.0).build(),
        Err(VizError::InvalidTemperature(-1.0))
    );

    let model = Attention::<f64>::new().build().unwrap();
    assert_eq!(
        model.attend(Vector2::new(1.0, 0.0), &[]),
        Err(VizError::EmptyInput)
    );
    assert!(model.attend(Vector2::new(f64::NAN, 0.0), &demo_keys()).is_err());

    let bad_keys = vec![Key::new("x", Vector2::new(f64::INFINITY, 0.0))];
    assert_eq!(
        model.attend(Vector2::new(1.0, 0.0), &bad_keys),
        Err(VizError::InvalidNumericValue("key=(inf, 0)".to_string()))
    );
}

// ============================================================================
// PCA Tests
// ============================================================================

/// Test the default PCA model.
#[test]
fn test_pca_builder_defaults() {
    let model = Pca::new().build().unwrap();
    assert_eq!(model.solver(), EigenSolver::ClosedForm);
    assert_eq!(model.min_points(), 2);

    let result = model
        .fit(&[Vector2::new(1.0f64, 1.0), Vector2::new(3.0, 3.0)])
        .unwrap();
    assert_eq!(result.mean, Vector2::new(2.0, 2.0));
    assert_abs_diff_eq!(result.eigen.eigenvalues[0], 4.0, epsilon = 1e-12);
}

/// Test that the minimum point count is raised to two.
#[test]
fn test_pca_builder_min_points() {
    assert_eq!(Pca::new().min_points(0).build().unwrap().min_points(), 2);

    let model = Pca::new().min_points(4).build().unwrap();
    assert_eq!(
        model.fit(&[Vector2::new(0.0f64, 0.0); 3]).err(),
        Some(VizError::TooFewPoints { got: 3, min: 4 })
    );
}

/// Test PCA builder and input validation.
#[test]
fn test_pca_validation() {
    assert_eq!(
        Pca::new()
            .solver(EigenSolver::Nalgebra)
            .solver(EigenSolver::ClosedForm)
            .build(),
        Err(VizError::DuplicateParameter { parameter: "solver" })
    );

    let model = Pca::new().build().unwrap();
    let points = [Vector2::new(0.0f64, 0.0), Vector2::new(f64::NAN, 1.0)];
    assert!(model.fit(&points).is_err());
}

/// Test that the nalgebra solver matches the closed form.
#[test]
fn test_pca_solvers_agree_through_api() {
    let points = [
        Vector2::new(-1.0f64, -0.5),
        Vector2::new(0.5, 0.9),
        Vector2::new(1.5, 0.7),
        Vector2::new(-0.2, -1.1),
    ];
    let a = Pca::new().build().unwrap().fit(&points).unwrap();
    let b = Pca::new()
        .solver(EigenSolver::Nalgebra)
        .build()
        .unwrap()
        .fit(&points)
        .unwrap();
    for i in 0..2 {
        assert_abs_diff_eq!(a.eigen.eigenvalues[i], b.eigen.eigenvalues[i], epsilon = 1e-9);
    }
}
