#![cfg(feature = "dev")]

use attnviz::internals::algorithms::attention::{AttentionScaling, Key, attend};
use attnviz::internals::engine::formula::{
    attention_calculation, attention_definition, characteristic_equation, cosine_calculation,
    dot_product_expansion, eigen_pairs, spread_interpretation, trace_determinant,
};
use attnviz::internals::math::covariance::CovarianceMatrix;
use attnviz::internals::math::eigen::EigenDecomposition;
use attnviz::internals::math::similarity::cosine_similarity;
use attnviz::internals::primitives::vector::Vector2;

fn demo_keys() -> Vec<Key<f64>> {
    vec![
        Key::new("水", Vector2::new(0.7, 0.5)),
        Key::new("風", Vector2::new(0.5, 0.71)),
        Key::new("有", Vector2::new(-0.6, 0.7)),
    ]
}

#[test]
fn test_attention_definition_mentions_scaling() {
    assert!(attention_definition(AttentionScaling::SqrtDim).contains(r"\sqrt{d_k}"));
    assert!(attention_definition(AttentionScaling::None).ends_with(r"\text{softmax}(Q \cdot K^T)"));
}

#[test]
fn test_attention_calculation_default_query() {
    let keys = demo_keys();
    let out = attend(Vector2::new(0.62, 0.62), &keys, AttentionScaling::None, 1.0);
    let text = attention_calculation(&keys, &out.scores, &out.weights);

    assert_eq!(
        text,
        r"Q \cdot K_{\text{水}} = 0.744, \quad Q \cdot K_{\text{風}} = 0.750, \quad Q \cdot K_{\text{有}} = 0.062 \\ \text{Attention: } \alpha_{\text{水}} = 0.398, \quad \alpha_{\text{風}} = 0.401, \quad \alpha_{\text{有}} = 0.201"
    );
}

#[test]
fn test_dot_product_expansion() {
    let keys = demo_keys();
    assert_eq!(
        dot_product_expansion(Vector2::new(0.62, 0.62), &keys[0]),
        r"Q \cdot K_{\text{水}} = (0.62)(0.70) + (0.62)(0.50) = 0.744"
    );
}

#[test]
fn test_cosine_calculation_orthogonal() {
    let a = Vector2::new(1.0, 0.0);
    let b = Vector2::new(0.0, 1.0);
    let sim = cosine_similarity(a, b).unwrap();
    assert_eq!(
        cosine_calculation(a, b, &sim),
        r"\cos(\theta) = \frac{(1.00)(0.00) + (0.00)(1.00)}{\sqrt{1.00^2 + 0.00^2} \sqrt{0.00^2 + 1.00^2}} = \frac{0.00}{1.00 \times 1.00} = 0.00"
    );
}

#[test]
fn test_characteristic_equation() {
    let cov = CovarianceMatrix::new(1.0f64, 1.0, 1.0);
    assert_eq!(
        characteristic_equation(&cov),
        r"(1.00 - \lambda)(1.00 - \lambda) - (1.00)^2 = 0"
    );

    let cov = CovarianceMatrix::new(2.5f64, 0.75, -0.3);
    assert_eq!(
        characteristic_equation(&cov),
        r"(2.50 - \lambda)(0.75 - \lambda) - (-0.30)^2 = 0"
    );
}

#[test]
fn test_trace_determinant() {
    let cov = CovarianceMatrix::new(1.0f64, 1.0, 1.0);
    assert_eq!(
        trace_determinant(&cov),
        r"\text{trace}(\Sigma) = 2.000, \quad \det(\Sigma) = 0.000"
    );
}

#[test]
fn test_eigen_pairs_axis_aligned() {
    let eig = EigenDecomposition::from_covariance(&CovarianceMatrix::new(3.0f64, 1.0, 0.0));
    assert_eq!(
        eigen_pairs(&eig),
        r"\lambda_1 = 3.0000, \quad \lambda_2 = 1.0000 \\ v_1 = (1.000, 0.000), \quad v_2 = (0.000, 1.000)"
    );
}

#[test]
fn test_spread_interpretation_classes() {
    let moderate = EigenDecomposition::from_covariance(&CovarianceMatrix::new(4.0f64, 1.0, 0.0));
    assert_eq!(
        spread_interpretation(&moderate),
        "Total variance = 5.00. Eigenvalue ratio 2.0:1 → moderate correlation (somewhat elongated ellipse)."
    );

    let elongated = EigenDecomposition::from_covariance(&CovarianceMatrix::new(16.0f64, 1.0, 0.0));
    assert_eq!(
        spread_interpretation(&elongated),
        "Total variance = 17.00. Eigenvalue ratio 4.0:1 → highly correlated data (elongated ellipse). PCA compression will lose little info."
    );

    let round = EigenDecomposition::from_covariance(&CovarianceMatrix::<f64>::identity());
    assert_eq!(
        spread_interpretation(&round),
        "Total variance = 2.00. Eigenvalue ratio 1.0:1 → data spreads in multiple directions (rounder ellipse). Both PCs carry information."
    );
}
