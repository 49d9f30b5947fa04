//! The riddle catalog: a fixed, read-only collection of quiz entries
//! loaded once at startup and shared across all requests.

use chrono::{Duration, Utc};
use plantgo_core::Riddle;

/// Read-only lookup service over the riddle catalog.
///
/// All queries preserve declaration order. The catalog is never mutated
/// after construction, so it can be shared freely between handlers.
pub struct RiddleCatalog {
    entries: Vec<Riddle>,
}

impl RiddleCatalog {
    pub fn new(entries: Vec<Riddle>) -> Self {
        Self { entries }
    }

    /// The built-in demo catalog: four riddles covering levels 0 through 3.
    pub fn builtin() -> Self {
        let now = Utc::now();
        let updated = now - Duration::days(1);
        Self::new(vec![
            Riddle {
                id: "riddle_1".into(),
                level_index: 0,
                riddle_text: "I'm a tropical beauty with split leaves that resemble Swiss cheese. \
                              My large, glossy foliage can grow quite massive indoors. What am I?"
                    .into(),
                plant_scientific_name: "Monstera deliciosa".into(),
                plant_common_name: "Swiss Cheese Plant".into(),
                hint: Some("Look for the characteristic holes and splits in my leaves!".into()),
                image_url: None,
                is_active: true,
                created_at: now - Duration::days(7),
                updated_at: updated,
            },
            Riddle {
                id: "riddle_2".into(),
                level_index: 1,
                riddle_text: "I'm known for my elegant white flowers that look like flags of \
                              surrender. I can purify your air and I love humidity. What am I?"
                    .into(),
                plant_scientific_name: "Spathiphyllum wallisii".into(),
                plant_common_name: "Peace Lily".into(),
                hint: Some("My white flowers are actually modified leaves called spathes!".into()),
                image_url: None,
                is_active: true,
                created_at: now - Duration::days(5),
                updated_at: updated,
            },
            Riddle {
                id: "riddle_3".into(),
                level_index: 2,
                riddle_text: "I'm virtually indestructible with thick, upright leaves that have \
                              yellow edges. I can survive neglect and low light. What am I?"
                    .into(),
                plant_scientific_name: "Sansevieria trifasciata".into(),
                plant_common_name: "Snake Plant".into(),
                hint: Some("I'm also called Mother-in-Law's Tongue for my sharp appearance!".into()),
                image_url: None,
                is_active: true,
                created_at: now - Duration::days(3),
                updated_at: updated,
            },
            Riddle {
                id: "riddle_4".into(),
                level_index: 3,
                riddle_text: "I have large, violin-shaped leaves and I'm quite finicky about my \
                              environment. I prefer bright, indirect light and consistent care. \
                              What am I?"
                    .into(),
                plant_scientific_name: "Ficus lyrata".into(),
                plant_common_name: "Fiddle Leaf Fig".into(),
                hint: Some("My leaves really do look like the musical instrument I'm named after!".into()),
                image_url: None,
                is_active: true,
                created_at: now - Duration::days(2),
                updated_at: updated,
            },
        ])
    }

    /// Every entry, in declaration order.
    pub fn all(&self) -> &[Riddle] {
        &self.entries
    }

    /// First entry with the given level index, if any.
    pub fn by_level(&self, level_index: i32) -> Option<&Riddle> {
        self.entries.iter().find(|r| r.level_index == level_index)
    }

    /// Active entries, in declaration order. Empty if none are active.
    pub fn active(&self) -> Vec<Riddle> {
        self.entries.iter().filter(|r| r.is_active).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RiddleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
