//! Battle mini-games: quick-time, timed, choice and drag-drop confrontations
//! between the hero and a math boss.

pub mod answer;
pub mod combat_math;
pub mod config;
pub mod countdown;
pub mod effects;
pub mod equipment;
pub mod logic;
pub mod types;

pub use config::BattleConfig;
pub use countdown::Countdown;
pub use effects::{EffectQueue, EffectType, Side, TransientEffect};
pub use equipment::{item_effect, potion_heal, EquipmentEffects, ItemEffect, ModifierKind};
pub use logic::{process_input, BattleEngine, BattleInput, RewardCallback, BOSS_NAMES};
pub use types::{
    AnswerOutcome, BattleEvent, BattlePhase, Combatant, GameKind, Loadout, MiniGame, RoundState,
};
