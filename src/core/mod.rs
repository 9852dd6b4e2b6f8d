//! Core modules for Politicômetro

pub mod classifier;
pub mod session;
pub mod store;
pub mod profile;
pub mod input;

pub use session::QuizSession;
pub use store::{FileStorage, MemoryStorage, Storage, StoreError, load_result, reset};
pub use profile::{DecorativeSpectrum, CandidateMatch, ShareLinks, candidate_matches, share_text, share_links};
pub use input::{Command, parse_command, parse_answer_list};
