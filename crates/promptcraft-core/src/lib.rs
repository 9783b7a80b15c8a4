pub mod error;
pub mod history;
pub mod options;
pub mod request;
pub mod section;
pub mod session;
pub mod sectionize;
pub mod template;

pub use error::PromptcraftError;
pub use history::HistoryEntry;
pub use options::{Audience, Choice, Complexity, Purpose, Tone};
pub use request::GenerationRequest;
pub use section::{SectionLabel, SectionedResponse};
pub use sectionize::sectionize;
pub use session::Session;
pub use template::{QuickTemplate, QUICK_TEMPLATES};
