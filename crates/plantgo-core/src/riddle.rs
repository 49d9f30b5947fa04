use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the plant riddle quiz catalog.
///
/// The catalog is loaded once at startup and never mutated; `level_index`
/// is the lookup key for the level endpoint (first match wins, uniqueness
/// is not enforced).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Riddle {
    pub id: String,
    pub level_index: i32,
    pub riddle_text: String,
    pub plant_scientific_name: String,
    pub plant_common_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
