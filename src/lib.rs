//! Deterministic résumé scoring engine.
//!
//! `resume-fit` scores a candidate's plain-text résumé against a role's
//! expected duties, profile traits and chapter-specific indicators. Matching
//! is lexical: exact tokens, edit-distance fuzzy tokens and a fixed list of
//! action verbs. Every section gets a 1–5 rating, plus a global score and
//! advice for weak indicators.
//!
//! Evaluation is a pure function of its inputs: identical inputs always
//! produce identical [`EvaluationResult`]s, and nothing is cached between
//! calls. Loading the scoring data and extracting text from documents are
//! left to the caller.
//!
//! ```
//! use resume_fit::catalog::{AdviceTable, IndicatorTable};
//! use resume_fit::evaluate;
//!
//! let duties = vec!["Coordinar eventos".to_string()];
//! let result = evaluate(
//!     "DCA",
//!     "UNINORTE",
//!     "Coordiné eventos de la organización",
//!     &duties,
//!     &[],
//!     &IndicatorTable::new(),
//!     &AdviceTable::new(),
//! );
//! assert_eq!(result.duties[0].evidence_exact, vec!["eventos"]);
//! ```

pub mod catalog;
pub mod config;
pub mod evaluation;
pub mod report;
pub mod scoring;
pub mod text;
pub mod types;

pub use config::{ConfigError, ScoringConfig};
pub use evaluation::{evaluate, Evaluator};
pub use types::EvaluationResult;
