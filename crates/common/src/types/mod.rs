use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body returned by delete endpoints instead of the removed record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusMarker {
    pub status: String,
}

impl StatusMarker {
    pub fn success() -> Self {
        Self { status: "success".into() }
    }
}
