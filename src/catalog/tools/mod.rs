//! Built-in tools.

mod compile;
mod embed;
mod git;
mod process;
mod search;

pub use compile::CompileTool;
pub use embed::EmbedTool;
pub use git::{GitOperation, GitTool, UNSUPPORTED_GIT_OPERATION};
pub use search::{NO_RESULTS, SearchTool, summarise_page};
