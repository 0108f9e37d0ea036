//! Cosine similarity between embeddings.

/// Computes `dot(a, b) / (|a| * |b|)`, accumulating in `f64`.
///
/// Returns `0.0` when either vector is empty, the lengths differ, either norm
/// is zero, or the computation overflows. The result is not clamped, so
/// rounding may land a negligible epsilon outside `[-1, 1]`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity is inherently floating-point"
)]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) = a.iter().zip(b).fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(dot, norm_a, norm_b), (&x, &y)| {
            let left = f64::from(x);
            let right = f64::from(y);
            (dot + left * right, norm_a + left * left, norm_b + right * right)
        },
    );

    if norm_a_sq <= 0.0 || norm_b_sq <= 0.0 {
        return 0.0;
    }

    let score = dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt());
    if score.is_finite() { score } else { 0.0 }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare scores against tolerance bounds"
)]
mod tests {
    use super::cosine_similarity;
    use rstest::rstest;

    const EPSILON: f64 = 1e-9;

    #[rstest]
    #[case(&[], &[1.0, 2.0])]
    #[case(&[1.0, 2.0], &[])]
    #[case(&[], &[])]
    #[case(&[0.0, 0.0], &[1.0, 1.0])]
    #[case(&[1.0, 1.0], &[0.0, 0.0])]
    #[case(&[1.0, 2.0, 3.0], &[1.0, 2.0])]
    fn degenerate_inputs_score_zero(#[case] a: &[f32], #[case] b: &[f32]) {
        assert_eq!(cosine_similarity(a, b), 0.0);
    }

    #[rstest]
    fn identical_vectors_score_one() {
        let score = cosine_similarity(&[0.3, -1.2, 4.0], &[0.3, -1.2, 4.0]);
        assert!((score - 1.0).abs() < EPSILON, "got {score}");
    }

    #[rstest]
    fn opposite_vectors_score_minus_one() {
        let score = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]);
        assert!((score + 1.0).abs() < EPSILON, "got {score}");
    }

    #[rstest]
    fn orthogonal_vectors_score_zero() {
        let score = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(score.abs() < EPSILON, "got {score}");
    }

    #[rstest]
    fn magnitude_does_not_change_score() {
        let small = cosine_similarity(&[1.0, 2.0], &[2.0, 1.0]);
        let large = cosine_similarity(&[100.0, 200.0], &[2.0, 1.0]);
        assert!((small - large).abs() < EPSILON);
        assert!((small - 0.8).abs() < EPSILON, "got {small}");
    }

    #[rstest]
    #[case(&[1.0, 0.5, -0.25], &[0.1, 0.2, 0.3])]
    #[case(&[f32::MAX, f32::MAX], &[f32::MAX, 1.0])]
    #[case(&[1e-30, 1e-30], &[-1e-30, 1e-30])]
    #[case(&[-7.0, 3.5, 0.0, 12.0], &[-7.0, 3.5, 0.0, 12.0])]
    fn scores_stay_within_cosine_bounds(#[case] a: &[f32], #[case] b: &[f32]) {
        let score = cosine_similarity(a, b);
        assert!((-1.0 - EPSILON..=1.0 + EPSILON).contains(&score), "got {score}");
    }
}
