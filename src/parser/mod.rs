pub mod context;
pub mod error;
pub mod location;
pub mod matchers;
pub mod reader;
pub mod source;

pub use context::*;
pub use error::*;
pub use location::*;
pub use matchers::*;
pub use reader::*;
pub use source::*;
