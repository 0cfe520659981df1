//! Battle mini-game data structures.
//!
//! A mini-game is a short confrontation between the player's hero and a math
//! boss, shown between story beats. Correct answers hit the boss, wrong ones
//! let the boss hit back, and defeating the boss pays out gold.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Mini-game variants sent by the story backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Quicktime,
    Timed,
    Choice,
    Dragdrop,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Quicktime,
        GameKind::Timed,
        GameKind::Choice,
        GameKind::Dragdrop,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Quicktime => "Quick Time",
            Self::Timed => "Beat the Clock",
            Self::Choice => "Choose Your Path",
            Self::Dragdrop => "Put It In Order",
        }
    }

    /// Whether the player answers by picking one of `choices`.
    pub fn uses_choices(&self) -> bool {
        !matches!(self, Self::Dragdrop)
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, Self::Timed)
    }

    /// Message shown after a wrong answer when the descriptor has none.
    pub fn default_fail_message(&self) -> &'static str {
        match self {
            Self::Quicktime | Self::Timed => "Not quite! Try again!",
            Self::Choice => "Wrong path! Try another one!",
            Self::Dragdrop => "Not quite! Try rearranging!",
        }
    }
}

/// Mini-game descriptor as delivered inside a story payload.
///
/// The engine trusts the descriptor: a game with no choices or no answer is
/// the caller's problem, not a runtime error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniGame {
    #[serde(rename = "type")]
    pub kind: GameKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
    /// Seconds on the clock for `timed` games. Zero or absent means default.
    #[serde(default)]
    pub time_limit: Option<u32>,
    /// Base gold paid on victory. Zero or absent means default.
    #[serde(default)]
    pub reward_coins: Option<u32>,
    #[serde(default)]
    pub drag_items: Vec<String>,
    #[serde(default)]
    pub drag_correct_order: Vec<String>,
    #[serde(default)]
    pub fail_message: Option<String>,
    #[serde(default)]
    pub hero_action: Option<String>,
}

impl MiniGame {
    fn blank(kind: GameKind, question: &str) -> Self {
        Self {
            kind,
            title: None,
            prompt: None,
            question: question.to_string(),
            choices: Vec::new(),
            correct_answer: String::new(),
            time_limit: None,
            reward_coins: None,
            drag_items: Vec::new(),
            drag_correct_order: Vec::new(),
            fail_message: None,
            hero_action: None,
        }
    }

    /// A multiple-choice game of any non-drag kind.
    pub fn with_choices(kind: GameKind, question: &str, choices: &[&str], answer: &str) -> Self {
        Self {
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_answer: answer.to_string(),
            ..Self::blank(kind, question)
        }
    }

    /// A drag-drop game whose tokens must be arranged in `order`.
    pub fn dragdrop(question: &str, items: &[&str], order: &[&str]) -> Self {
        Self {
            drag_items: items.iter().map(|c| c.to_string()).collect(),
            drag_correct_order: order.iter().map(|c| c.to_string()).collect(),
            ..Self::blank(GameKind::Dragdrop, question)
        }
    }

    pub fn time_limit(mut self, seconds: u32) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    pub fn reward(mut self, coins: u32) -> Self {
        self.reward_coins = Some(coins);
        self
    }

    pub fn answer(mut self, answer: &str) -> Self {
        self.correct_answer = answer.to_string();
        self
    }

    /// Tokens offered for arranging; older payloads only filled `choices`.
    pub fn drag_tokens(&self) -> &[String] {
        if self.drag_items.is_empty() {
            &self.choices
        } else {
            &self.drag_items
        }
    }

    pub fn fail_message(&self) -> &str {
        self.fail_message
            .as_deref()
            .unwrap_or_else(|| self.kind.default_fail_message())
    }
}

/// Equipment and potions the host session hands to a battle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    #[serde(default)]
    pub equipped: Vec<String>,
    #[serde(default)]
    pub potions: Vec<String>,
}

impl Loadout {
    pub fn new(equipped: &[&str], potions: &[&str]) -> Self {
        Self {
            equipped: equipped.iter().map(|s| s.to_string()).collect(),
            potions: potions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Hit points of one side of the fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combatant {
    pub hp: u32,
    pub max_hp: u32,
}

impl Combatant {
    pub fn new(max_hp: u32) -> Self {
        Self { hp: max_hp, max_hp }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Restore up to `amount` HP without passing the maximum. Returns HP gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    pub fn hp_percent(&self) -> u32 {
        if self.max_hp == 0 {
            return 0;
        }
        (u64::from(self.hp) * 100 / u64::from(self.max_hp)) as u32
    }
}

/// Forward-only battle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BattlePhase {
    Intro,
    Battle,
    Victory,
}

/// Whether the answer controls currently accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Open,
    /// Choices stay locked briefly after every pick
    Cooldown { remaining: Duration },
    /// The clock ran out; nothing is accepted until a retry
    Expired,
}

/// Result of resolving one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    HeroStrike {
        damage: u32,
        is_crit: bool,
        boss_hp: u32,
        defeated: bool,
    },
    BossStrike {
        damage: u32,
        hero_hp: u32,
    },
}

impl AnswerOutcome {
    pub fn was_correct(&self) -> bool {
        matches!(self, Self::HeroStrike { .. })
    }
}

/// Things that happened during a battle, drained by the host for its log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    BattleStarted { boss_name: &'static str },
    HeroStrike { damage: u32, is_crit: bool, boss_hp: u32 },
    BossStrike { damage: u32, hero_hp: u32 },
    TimeExpired,
    Retried { time_limit: u32 },
    PotionDrunk { potion: String, healed: u32 },
    Victory { reward_coins: u32 },
    RewardPaid { coins: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_from_backend_json() {
        let json = r#"{
            "type": "timed",
            "title": "Speed Round",
            "question": "What is 6 x 7?",
            "choices": ["42", "36", "48", "40"],
            "correct_answer": "42",
            "time_limit": 8,
            "reward_coins": 20
        }"#;
        let game: MiniGame = serde_json::from_str(json).unwrap();
        assert_eq!(game.kind, GameKind::Timed);
        assert_eq!(game.choices.len(), 4);
        assert_eq!(game.time_limit, Some(8));
        assert_eq!(game.reward_coins, Some(20));
        assert!(game.drag_items.is_empty());
        assert!(game.fail_message.is_none());
    }

    #[test]
    fn test_descriptor_minimal_json() {
        let game: MiniGame = serde_json::from_str(r#"{"type": "dragdrop"}"#).unwrap();
        assert_eq!(game.kind, GameKind::Dragdrop);
        assert!(game.question.is_empty());
        assert!(game.correct_answer.is_empty());
        assert!(game.time_limit.is_none());
    }

    #[test]
    fn test_drag_tokens_fall_back_to_choices() {
        let mut game = MiniGame::with_choices(GameKind::Dragdrop, "q", &["a", "b"], "a b");
        assert_eq!(game.drag_tokens(), &["a".to_string(), "b".to_string()]);
        game.drag_items = vec!["c".to_string()];
        assert_eq!(game.drag_tokens(), &["c".to_string()]);
    }

    #[test]
    fn test_fail_message_defaults() {
        let game = MiniGame::with_choices(GameKind::Choice, "q", &["a"], "a");
        assert_eq!(game.fail_message(), "Wrong path! Try another one!");
        let mut game = MiniGame::dragdrop("q", &["a"], &["a"]);
        assert_eq!(game.fail_message(), "Not quite! Try rearranging!");
        game.fail_message = Some("Oops".to_string());
        assert_eq!(game.fail_message(), "Oops");
    }

    #[test]
    fn test_combatant_heal_caps_at_max() {
        let mut c = Combatant::new(100);
        c.hp = 80;
        assert_eq!(c.heal(50), 20);
        assert_eq!(c.hp, 100);
        assert_eq!(c.heal(10), 0);
    }

    #[test]
    fn test_phase_ordering() {
        assert!(BattlePhase::Intro < BattlePhase::Battle);
        assert!(BattlePhase::Battle < BattlePhase::Victory);
    }

    #[test]
    fn test_kind_flags() {
        for kind in GameKind::ALL {
            assert_eq!(kind.uses_choices(), kind != GameKind::Dragdrop);
            assert_eq!(kind.is_timed(), kind == GameKind::Timed);
        }
    }
}
