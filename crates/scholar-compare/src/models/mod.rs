//! Data models for snapshots, query criteria, and the job protocol.
//!
//! All wire-facing models use `#[serde(default)]` for optional fields and
//! camelCase renames to match the analysis service's naming.

mod criteria;
mod job;
mod records;

pub use criteria::{
    DEFAULT_PAGE_SIZE, DEFAULT_VISIBLE, FilterCriteria, Pagination, QueryResult, REVEAL_INCREMENT,
    SortCriteria, SortDirection, SortKey, TypeFilter,
};
pub use job::{JobPoll, JobState, StartedJob};
pub use records::{AuthorSnapshot, KeywordEntry, PublicationRecord};
