pub mod answer_resolver;
pub mod warn_writer;

pub use answer_resolver::{AnswerResolver, ResolveOutcome, Strategy};
pub use warn_writer::WarnWriter;
