pub mod column;
pub mod error;
pub mod options;

pub use column::{read_pan_column, read_pan_column_from_reader};
pub use error::{IngestError, Result};
pub use options::{DEFAULT_MISSING_MARKERS, DEFAULT_PAN_COLUMN, IngestOptions};
