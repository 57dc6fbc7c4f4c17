use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod push_backup {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub file_name: String,
        pub voucher_count: usize,
        pub exported_at: DateTime<Utc>,
    }
}
