pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod schema_util;
pub mod template;

pub use error::{FrontierError, Result};
pub use provider::{CompleteParameters, TextCompletionProvider};
