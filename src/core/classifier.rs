//! Result classifier: answers → score → position → description
//!
//! Bands (inclusive lower bound):
//! - < -40      Esquerda Radical
//! - [-40, -15) Esquerda
//! - [-15, -5)  Centro-Esquerda
//! - [-5, 5)    Centro
//! - [5, 15)    Centro-Direita
//! - [15, 40)   Direita
//! - >= 40      Direita Conservadora
//!
//! No storage access here; persistence belongs to the session.

use chrono::{DateTime, Utc};

use crate::types::{AnswerValue, PositionLabel, ResultRecord};
use crate::{
    THRESHOLD_CENTER, THRESHOLD_CENTER_LEFT, THRESHOLD_CENTER_RIGHT,
    THRESHOLD_CONSERVATIVE_RIGHT, THRESHOLD_LEFT, THRESHOLD_RIGHT,
};

/// Shown for labels missing from the description table
pub const FALLBACK_DESCRIPTION: &str = "Perfil político único e complexo.";

/// Sum of answered slots; unanswered slots count as 0
pub fn score(answers: &[Option<AnswerValue>]) -> i32 {
    answers.iter().flatten().map(|a| a.value() as i32).sum()
}

pub fn answered_count(answers: &[Option<AnswerValue>]) -> usize {
    answers.iter().filter(|a| a.is_some()).count()
}

/// Map a score onto its band. Total over `i32`.
pub fn classify(score: i32) -> PositionLabel {
    if score < THRESHOLD_LEFT {
        PositionLabel::RadicalLeft
    } else if score < THRESHOLD_CENTER_LEFT {
        PositionLabel::Left
    } else if score < THRESHOLD_CENTER {
        PositionLabel::CenterLeft
    } else if score < THRESHOLD_CENTER_RIGHT {
        PositionLabel::Center
    } else if score < THRESHOLD_RIGHT {
        PositionLabel::CenterRight
    } else if score < THRESHOLD_CONSERVATIVE_RIGHT {
        PositionLabel::Right
    } else {
        PositionLabel::ConservativeRight
    }
}

/// One-paragraph profile for a position
pub fn describe(position: PositionLabel) -> &'static str {
    match position {
        PositionLabel::RadicalLeft => "Defende transformações profundas na sociedade, com forte intervenção estatal e ênfase em igualdade social.",
        PositionLabel::Left => "Apoia políticas sociais, estado de bem-estar social e regulamentação econômica.",
        PositionLabel::CenterLeft => "Busca equilíbrio entre mercado e estado, com foco em justiça social.",
        PositionLabel::Center => "Posicionamento pragmático, avaliando cada proposta individualmente sem ideologias fixas.",
        PositionLabel::CenterRight => "Valoriza liberdade econômica com alguma proteção social.",
        PositionLabel::Right => "Defende livre mercado, menor intervenção estatal e valores tradicionais.",
        PositionLabel::ConservativeRight => "Ênfase na liberdade econômica, soberania nacional e conservadorismo moral.",
    }
}

/// Describe a persisted label string, falling back for unknown labels
pub fn describe_label(label: &str) -> &'static str {
    PositionLabel::from_label(label)
        .map(describe)
        .unwrap_or(FALLBACK_DESCRIPTION)
}

/// Build the result record for a finished answer vector
pub fn evaluate(answers: &[Option<AnswerValue>], computed_at: DateTime<Utc>) -> ResultRecord {
    let total_score = score(answers);
    ResultRecord {
        total_score,
        answered_count: answered_count(answers),
        answers: answers.to_vec(),
        computed_at,
        position: classify(total_score),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ignores_unanswered() {
        let answers = vec![
            Some(AnswerValue::StronglyAgree),
            None,
            Some(AnswerValue::Disagree),
            Some(AnswerValue::Neutral),
        ];
        assert_eq!(score(&answers), 1);
        assert_eq!(answered_count(&answers), 3);
    }

    #[test]
    fn test_score_of_empty_vector_is_zero() {
        assert_eq!(score(&[None, None, None]), 0);
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(classify(-41), PositionLabel::RadicalLeft);
        assert_eq!(classify(-40), PositionLabel::Left);
        assert_eq!(classify(-16), PositionLabel::Left);
        assert_eq!(classify(-15), PositionLabel::CenterLeft);
        assert_eq!(classify(-6), PositionLabel::CenterLeft);
        assert_eq!(classify(-5), PositionLabel::Center);
        assert_eq!(classify(0), PositionLabel::Center);
        assert_eq!(classify(4), PositionLabel::Center);
        assert_eq!(classify(5), PositionLabel::CenterRight);
        assert_eq!(classify(14), PositionLabel::CenterRight);
        assert_eq!(classify(15), PositionLabel::Right);
        assert_eq!(classify(39), PositionLabel::Right);
        assert_eq!(classify(40), PositionLabel::ConservativeRight);
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(classify(i32::MIN), PositionLabel::RadicalLeft);
        assert_eq!(classify(i32::MAX), PositionLabel::ConservativeRight);
    }

    #[test]
    fn test_lower_bounds_agree_with_classify() {
        for position in PositionLabel::ALL {
            if let Some(bound) = position.lower_bound() {
                assert_eq!(classify(bound), position);
                assert!(classify(bound - 1) < position);
            }
        }
    }

    #[test]
    fn test_describe_label_fallback() {
        assert_eq!(describe_label("Centro"), describe(PositionLabel::Center));
        assert_eq!(describe_label("Monarquista"), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_evaluate_builds_record() {
        let now = Utc::now();
        let answers = vec![Some(AnswerValue::StronglyAgree); 30];
        let record = evaluate(&answers, now);
        assert_eq!(record.total_score, 60);
        assert_eq!(record.answered_count, 30);
        assert_eq!(record.position, PositionLabel::ConservativeRight);
        assert_eq!(record.computed_at, now);
    }
}
