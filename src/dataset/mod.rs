//! Dataset loading and train/test splitting.
//!
//! These helpers feed the classifier; the classifier itself does not depend
//! on how its records were produced.

pub mod loader;
pub mod splitter;

pub use loader::{RecordLayout, load_records, parse_record, read_records, split_fields};
pub use splitter::{DEFAULT_SEED, DEFAULT_TRAIN_RATIO, Dataset, DatasetSplitter, SplitConfig};
