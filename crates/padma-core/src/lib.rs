pub mod definition;
pub mod error;
pub mod extract;
pub mod locate;
pub mod pipeline;
pub mod preprocess;
pub mod terms;
pub mod types;

pub use self::error::ConvertError;
pub use self::pipeline::{RunOptions, RunReport, convert_reader, run, write_entries};
pub use self::types::{Conversion, Entry, RowCounts};
