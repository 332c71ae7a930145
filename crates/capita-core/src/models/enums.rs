use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataState {
    #[serde(rename = "LOADING_STATE")]
    Loading,
    #[serde(rename = "LOADED_STATE")]
    Loaded,
    #[serde(rename = "ERROR_STATE")]
    Error,
}

impl DataState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "LOADING_STATE",
            Self::Loaded => "LOADED_STATE",
            Self::Error => "ERROR_STATE",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

impl std::fmt::Display for DataState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
