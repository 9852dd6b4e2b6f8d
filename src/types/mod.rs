//! Core types for Politicômetro

mod state;
mod answer;
mod statement;
mod position;
mod output;
mod reason;
mod snapshot;
mod result;

pub use state::SessionState;
pub use answer::AnswerValue;
pub use statement::{Statement, STATEMENTS, STATEMENT_COUNT};
pub use position::PositionLabel;
pub use output::{StepOutput, Progress};
pub use reason::ReasonCode;
pub use snapshot::SessionSnapshot;
pub use result::{ResultRecord, ResultLookup};
