/// Entry primary keys are UUIDs generated by the application (v7, time-ordered).
pub type EntryId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
