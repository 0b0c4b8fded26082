pub mod form_page;
pub mod google_form;

pub use form_page::{FormDom, QuestionBlock};
pub use google_form::GoogleFormPage;
