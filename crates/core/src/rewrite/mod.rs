pub mod backup;
pub mod prompt;
pub mod response;
pub mod types;

pub use backup::{backup_path, BACKUP_SUFFIX};
pub use prompt::{build_prompt, SYSTEM_INSTRUCTIONS};
pub use response::{accept_response, strip_code_fence};
pub use types::{BackendKind, Prompt, PromptStyle, RewriteOutcome, RewriteRequest, DEFAULT_PURPOSE};
