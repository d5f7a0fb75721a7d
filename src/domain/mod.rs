pub mod entry;
pub mod source;
pub mod outcome;
pub mod digest;
pub mod merge;

pub use entry::FeedEntry;
pub use source::SourceKind;
pub use outcome::{FetchOutcome, SourceFetch};
pub use digest::{Digest, DigestSection};
pub use merge::merge_newest_first;
