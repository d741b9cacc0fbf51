//! Document date selection pipeline.
//!
//! A document usually carries more dates than the one a filing process cares
//! about: the invoice date competes with birth dates, due dates and historical
//! references. The pipeline finds every date-like substring per line
//! ([`DateMatcher`]), validates it against the calendar ([`normalize`]),
//! scores it from the surrounding line ([`ContextScorer`]) and picks the
//! highest-scoring candidate ([`DateSelector`]).

mod matcher;
mod normalize;
mod score;
mod select;

pub use matcher::{DateMatcher, MonthVocabulary, PatternKind, RawMatch};
pub use normalize::{fold_accents, normalize};
pub use score::{ContextScorer, CueLexicon, ScoreWeights};
pub use select::{choose_document_date, Candidate, DateSelector};
