use crate::battle::Loadout;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session state shared with the backend.
///
/// Every field has a default so partial payloads from older backends still
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub equipped: Vec<String>,
    #[serde(default)]
    pub potions: Vec<String>,
    #[serde(default)]
    pub coins: u32,
    #[serde(default)]
    pub rewards_claimed: u32,
    #[serde(default)]
    pub last_reward_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(session_id: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            equipped: Vec::new(),
            potions: Vec::new(),
            coins: 0,
            rewards_claimed: 0,
            last_reward_at: None,
        }
    }

    /// A local session with a random id.
    pub fn generate() -> Self {
        Self::new(&uuid::Uuid::new_v4().to_string())
    }

    /// Add battle gold.
    pub fn credit(&mut self, coins: u32) {
        self.coins = self.coins.saturating_add(coins);
        self.rewards_claimed += 1;
        self.last_reward_at = Some(Utc::now());
    }

    /// Gear and potions handed to a battle.
    pub fn loadout(&self) -> Loadout {
        Loadout {
            equipped: self.equipped.clone(),
            potions: self.potions.clone(),
        }
    }

    /// Drop potions the battle used up.
    pub fn sync_potions(&mut self, remaining: &[String]) {
        self.potions = remaining.to_vec();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit() {
        let mut session = Session::new("abc");
        session.credit(15);
        session.credit(25);
        assert_eq!(session.coins, 40);
        assert_eq!(session.rewards_claimed, 2);
        assert!(session.last_reward_at.is_some());
    }

    #[test]
    fn test_partial_backend_payload() {
        let session: Session =
            serde_json::from_str(r#"{"session_id": "s1", "coins": 120, "equipped": ["fire_sword"]}"#)
                .unwrap();
        assert_eq!(session.coins, 120);
        assert!(session.potions.is_empty());
        assert_eq!(session.loadout().equipped, vec!["fire_sword".to_string()]);
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(Session::generate().session_id, Session::generate().session_id);
    }

    #[test]
    fn test_sync_potions() {
        let mut session = Session::new("p");
        session.potions = vec!["health_potion".to_string(), "mega_potion".to_string()];
        session.sync_potions(&["mega_potion".to_string()]);
        assert_eq!(session.potions, vec!["mega_potion".to_string()]);
    }
}
