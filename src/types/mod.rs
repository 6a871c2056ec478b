pub mod evaluation;
pub mod identifiers;

pub use evaluation::{
    EvaluationRequest, EvaluationResult, FuzzyEvidence, IndicatorScore, ItemScore,
    SectionAverages, SectionScore,
};
pub use identifiers::ResumeDigest;
