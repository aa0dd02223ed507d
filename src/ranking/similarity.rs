//! Cosine similarity.

/// Returns the cosine similarity of two vectors.
///
/// The result is exactly `0.0` when either vector has zero norm or when the
/// vectors differ in length, so a missing signal reads as "no match" rather
/// than NaN. Other results are clamped to `[-1.0, 1.0]`.
#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity is inherently floating-point"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the result lies in [-1, 1] and is narrowed back to the vector precision"
)]
#[must_use]
pub fn cosine_similarity(left: &[f32], right: &[f32]) -> f32 {
    if left.len() != right.len() {
        return 0.0;
    }

    let (dot, left_norm_sq, right_norm_sq) = left.iter().zip(right).fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(dot, left_sq, right_sq), (l, r)| {
            let (lv, rv) = (f64::from(*l), f64::from(*r));
            (dot + lv * rv, left_sq + lv * lv, right_sq + rv * rv)
        },
    );

    if left_norm_sq == 0.0 || right_norm_sq == 0.0 {
        return 0.0;
    }

    let similarity = dot / (left_norm_sq.sqrt() * right_norm_sq.sqrt());
    similarity.clamp(-1.0, 1.0) as f32
}
