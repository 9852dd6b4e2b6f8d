//! Reason codes for session transitions and refusals

use serde::{Deserialize, Serialize};

/// Reason codes reported by every session operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // Q001: Answers
    // =========================================================================
    /// Answer written into the current slot
    Q001_ANSWER_RECORDED,

    // =========================================================================
    // Q002: Forward navigation
    // =========================================================================
    /// Moved to the next statement
    Q002_ADVANCED,
    /// Advanced past the last statement
    Q002_COMPLETED,

    // =========================================================================
    // Q003: Validation
    // =========================================================================
    /// Current statement has no answer and is not the last one
    Q003_NO_ANSWER_YET,
    /// Result requested before the session completed
    Q003_NOT_COMPLETED,

    // =========================================================================
    // Q004: Backward navigation
    // =========================================================================
    /// Moved to the previous statement
    Q004_RETREATED,
    /// Already at the first statement
    Q004_AT_FIRST_STATEMENT,

    // =========================================================================
    // Q005-Q007: Session lifecycle
    // =========================================================================
    /// Neutral answer recorded and moved on
    Q005_SKIPPED,
    /// Session already completed, input ignored
    Q006_SESSION_COMPLETED,
    /// Session and stored results purged
    Q007_SESSION_RESET,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::Q001_ANSWER_RECORDED => "Q001_ANSWER_RECORDED",
            Self::Q002_ADVANCED => "Q002_ADVANCED",
            Self::Q002_COMPLETED => "Q002_COMPLETED",
            Self::Q003_NO_ANSWER_YET => "Q003_NO_ANSWER_YET",
            Self::Q003_NOT_COMPLETED => "Q003_NOT_COMPLETED",
            Self::Q004_RETREATED => "Q004_RETREATED",
            Self::Q004_AT_FIRST_STATEMENT => "Q004_AT_FIRST_STATEMENT",
            Self::Q005_SKIPPED => "Q005_SKIPPED",
            Self::Q006_SESSION_COMPLETED => "Q006_SESSION_COMPLETED",
            Self::Q007_SESSION_RESET => "Q007_SESSION_RESET",
        }
    }

    /// User-facing message
    pub fn description(&self) -> &'static str {
        match self {
            Self::Q001_ANSWER_RECORDED => "Resposta registrada",
            Self::Q002_ADVANCED => "Próxima pergunta",
            Self::Q002_COMPLETED => "Teste concluído",
            Self::Q003_NO_ANSWER_YET => "Por favor, selecione uma resposta antes de continuar.",
            Self::Q003_NOT_COMPLETED => "O teste ainda não foi concluído",
            Self::Q004_RETREATED => "Pergunta anterior",
            Self::Q004_AT_FIRST_STATEMENT => "Já está na primeira pergunta",
            Self::Q005_SKIPPED => "Pergunta pulada (neutro)",
            Self::Q006_SESSION_COMPLETED => "O teste já foi concluído",
            Self::Q007_SESSION_RESET => "Teste reiniciado",
        }
    }

    /// Refusals leave the session untouched and should be shown to the user
    pub fn is_refusal(&self) -> bool {
        matches!(self, Self::Q003_NO_ANSWER_YET | Self::Q003_NOT_COMPLETED)
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
