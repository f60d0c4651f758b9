pub mod reader;
pub mod source;

pub use reader::{LineReader, SourceLine};
pub use source::Source;
