pub mod answer;
pub mod loaders;
pub mod mapping;
pub mod record;

pub use answer::{AnswerValue, PlannedAnswer};
pub use loaders::{load_dataset, save_dataset};
pub use mapping::QUESTION_MAP;
pub use record::{Dataset, SubmissionRecord, STATUS_DONE};
