//! Data models for Relingo

mod correction;
mod translation;

pub use correction::{CorrectionBuilder, CorrectionRecord, CorrectionStatus, VocabularyItem};
pub use translation::Translation;
