mod backup;

pub use backup::{HttpBackupSink, IBackupSink, InMemoryBackupSink};
