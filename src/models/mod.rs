pub mod analysis;
pub mod language;
pub mod loaders;
pub mod phrase;

pub use analysis::{AnalysisRequest, AnalysisResult, RequestMetadata, ScoreSet, SpeechMetadata, SubmitOptions};
pub use language::Language;
pub use loaders::load_phrase_set;
pub use phrase::{PracticePhrase, PracticeSet};
