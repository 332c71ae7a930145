use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Response wrapper the backend puts around every `/user/*` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomHttpResponse<T> {
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub time_stamp: NaiveDateTime,
    pub status_code: u16,
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> CustomHttpResponse<T> {
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Just enough of an error body to pull out the server's reason.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub reason: Option<String>,
}
