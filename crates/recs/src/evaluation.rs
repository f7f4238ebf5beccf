//! Offline evaluation of recommendation quality

use crate::types::EvaluationMetrics;
use std::collections::HashSet;

/// Precision, recall, and F1 of `recommendations` against `actual_purchases`
///
/// Both sides are compared as id sets. An empty recommendation list yields
/// all-zero metrics; recall is 0 when there are no actual purchases.
pub fn evaluate_recommendations<R, A>(
    recommendations: &[R],
    actual_purchases: &[A],
) -> EvaluationMetrics
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    let recommended: HashSet<&str> = recommendations.iter().map(|r| r.as_ref()).collect();
    if recommended.is_empty() {
        return EvaluationMetrics::default();
    }
    let actual: HashSet<&str> = actual_purchases.iter().map(|a| a.as_ref()).collect();

    let hits = recommended.intersection(&actual).count() as f64;
    let precision = hits / recommended.len() as f64;
    let recall = if actual.is_empty() {
        0.0
    } else {
        hits / actual.len() as f64
    };
    let f1_score = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    EvaluationMetrics {
        precision,
        recall,
        f1_score,
    }
}

impl EvaluationMetrics {
    /// Macro-average over many evaluations (all zero when empty)
    pub fn mean<I>(metrics: I) -> Self
    where
        I: IntoIterator<Item = EvaluationMetrics>,
    {
        let (count, sum) = metrics
            .into_iter()
            .fold((0usize, Self::default()), |(count, acc), m| {
                (
                    count + 1,
                    Self {
                        precision: acc.precision + m.precision,
                        recall: acc.recall + m.recall,
                        f1_score: acc.f1_score + m.f1_score,
                    },
                )
            });

        if count == 0 {
            return Self::default();
        }
        let n = count as f64;
        Self {
            precision: sum.precision / n,
            recall: sum.recall / n,
            f1_score: sum.f1_score / n,
        }
    }
}
