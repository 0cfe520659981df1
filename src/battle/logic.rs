//! Battle engine: phases, answer resolution, countdown and reward.
//!
//! The engine never reads a clock. The host advances it with [`BattleEngine::tick`]
//! and feeds player actions through the answer methods or [`process_input`].

use super::answer::{arrangement_matches, choice_matches};
use super::combat_math::{
    apply_damage, apply_hero_damage, boss_strike_damage, hero_strike, pick_index, BattleStats,
};
use super::config::BattleConfig;
use super::countdown::Countdown;
use super::effects::{EffectQueue, EffectType, Side};
use super::equipment::{potion_heal, EquipmentEffects};
use super::types::{
    AnswerOutcome, BattleEvent, BattlePhase, Combatant, GameKind, Loadout, MiniGame, RoundState,
};
use rand::Rng;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

pub const BOSS_NAMES: &[&str] = &[
    "Count Calculon",
    "The Fraction Fiend",
    "Baron Von Divide",
    "Minus Minotaur",
    "Professor Remainder",
    "Sir Subtracts-a-Lot",
    "The Number Cruncher",
    "Queen Quotient",
];

/// Called once with the gold earned when the boss falls.
pub type RewardCallback = Box<dyn FnOnce(u32)>;

/// Input actions for a battle (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleInput {
    /// Pick `choices[i]`
    Choose(usize),
    /// Move an available drag token into the arrangement
    Place(usize),
    /// Move an arranged token back to the pool
    Remove(usize),
    /// Check the current arrangement
    Submit,
    /// Restart the clock after it ran out
    Retry,
    /// Drink `potions[i]`
    DrinkPotion(usize),
}

/// One mini-game confrontation. Lives for a single battle and is thrown away
/// once the reward has been reported.
pub struct BattleEngine {
    pub game: MiniGame,
    pub config: BattleConfig,
    pub equipment: EquipmentEffects,
    pub stats: BattleStats,
    pub hero: Combatant,
    pub boss: Combatant,
    pub boss_name: &'static str,
    pub phase: BattlePhase,
    pub round: RoundState,
    pub countdown: Option<Countdown>,
    /// Drag tokens not yet placed
    pub available: Vec<String>,
    /// Drag tokens in the order the player placed them
    pub arrangement: Vec<String>,
    pub potions: Vec<String>,
    pub effects: EffectQueue,
    pub answers_given: u32,
    pub crits_landed: u32,
    phase_elapsed: Duration,
    events: Vec<BattleEvent>,
    on_complete: Option<RewardCallback>,
    reward_paid: bool,
    disposed: bool,
}

impl fmt::Debug for BattleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleEngine")
            .field("kind", &self.game.kind)
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("hero", &self.hero)
            .field("boss", &self.boss)
            .field("boss_name", &self.boss_name)
            .field("stats", &self.stats)
            .field("reward_paid", &self.reward_paid)
            .field("disposed", &self.disposed)
            .finish()
    }
}

impl BattleEngine {
    pub fn new<R: Rng>(game: MiniGame, loadout: &Loadout, config: BattleConfig, rng: &mut R) -> Self {
        let equipment = EquipmentEffects::from_equipped(loadout.equipped.as_slice());
        let stats = BattleStats::derive(&game, &equipment, &config);
        let boss_name = BOSS_NAMES[pick_index(BOSS_NAMES.len(), rng)];
        let available = game.drag_tokens().to_vec();

        debug!(
            kind = ?game.kind,
            total_damage = stats.total_damage,
            reward = stats.reward_coins,
            boss = boss_name,
            "battle created"
        );

        Self {
            hero: Combatant::new(config.max_hp),
            boss: Combatant::new(config.max_hp),
            game,
            config,
            equipment,
            stats,
            boss_name,
            phase: BattlePhase::Intro,
            round: RoundState::Open,
            countdown: None,
            available,
            arrangement: Vec::new(),
            potions: loadout.potions.clone(),
            effects: EffectQueue::new(),
            answers_given: 0,
            crits_landed: 0,
            phase_elapsed: Duration::ZERO,
            events: Vec::new(),
            on_complete: None,
            reward_paid: false,
            disposed: false,
        }
    }

    /// Register the host's reward handler.
    pub fn with_on_complete(mut self, callback: impl FnOnce(u32) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn kind(&self) -> GameKind {
        self.game.kind
    }

    pub fn reward_coins(&self) -> u32 {
        self.stats.reward_coins
    }

    pub fn reward_paid(&self) -> bool {
        self.reward_paid
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Seconds left on the clock, for `timed` games in battle.
    pub fn time_left(&self) -> Option<u32> {
        self.countdown.as_ref().map(Countdown::remaining)
    }

    /// Whether the answer controls take input right now.
    pub fn accepts_answers(&self) -> bool {
        !self.disposed && self.phase == BattlePhase::Battle && self.round == RoundState::Open
    }

    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance time: phase delays, answer cool-down, countdown, effects and
    /// the delayed reward.
    pub fn tick(&mut self, delta: Duration) {
        if self.disposed {
            return;
        }
        self.effects.update(delta);

        match self.phase {
            BattlePhase::Intro => {
                self.phase_elapsed += delta;
                if self.phase_elapsed >= self.config.intro_delay() {
                    self.enter_battle();
                }
            }
            BattlePhase::Battle => self.tick_round(delta),
            BattlePhase::Victory => {
                if !self.reward_paid {
                    self.phase_elapsed += delta;
                    if self.phase_elapsed >= self.config.victory_delay() {
                        self.pay_reward();
                    }
                }
            }
        }
    }

    fn tick_round(&mut self, delta: Duration) {
        if let RoundState::Cooldown { remaining } = self.round {
            let remaining = remaining.saturating_sub(delta);
            if remaining.is_zero() {
                self.round = RoundState::Open;
                // Each new round of a timed game gets a fresh clock
                if let Some(countdown) = self.countdown.as_mut() {
                    countdown.rearm();
                }
            } else {
                self.round = RoundState::Cooldown { remaining };
            }
            return;
        }

        if self.round == RoundState::Open {
            let expired = self
                .countdown
                .as_mut()
                .is_some_and(|countdown| countdown.advance(delta));
            if expired {
                debug!("countdown expired, answers locked");
                self.round = RoundState::Expired;
                self.events.push(BattleEvent::TimeExpired);
            }
        }
    }

    fn enter_battle(&mut self) {
        self.phase = BattlePhase::Battle;
        self.phase_elapsed = Duration::ZERO;
        if self.game.kind.is_timed() {
            self.countdown = Some(Countdown::new(self.stats.effective_time_limit));
        }
        debug!(boss = self.boss_name, "battle started");
        self.events.push(BattleEvent::BattleStarted {
            boss_name: self.boss_name,
        });
    }

    /// Answer with `choices[index]`. Ignored for drag-drop games, outside the
    /// battle phase, while choices are locked, or for an unknown index.
    pub fn choose<R: Rng>(&mut self, index: usize, rng: &mut R) -> Option<AnswerOutcome> {
        if !self.game.kind.uses_choices() || !self.accepts_answers() {
            return None;
        }
        let correct = choice_matches(self.game.choices.get(index)?, &self.game.correct_answer);

        if let Some(countdown) = self.countdown.as_mut() {
            countdown.stop();
        }
        self.round = RoundState::Cooldown {
            remaining: self.config.answer_cooldown(),
        };
        Some(self.resolve(correct, rng))
    }

    /// Move `available[index]` to the end of the arrangement.
    pub fn place_token(&mut self, index: usize) -> bool {
        if !self.can_arrange() || index >= self.available.len() {
            return false;
        }
        let token = self.available.remove(index);
        self.arrangement.push(token);
        true
    }

    /// Move `arrangement[index]` back to the pool.
    pub fn remove_token(&mut self, index: usize) -> bool {
        if !self.can_arrange() || index >= self.arrangement.len() {
            return false;
        }
        let token = self.arrangement.remove(index);
        self.available.push(token);
        true
    }

    fn can_arrange(&self) -> bool {
        self.game.kind == GameKind::Dragdrop
            && self.phase == BattlePhase::Battle
            && !self.disposed
    }

    /// Check the current arrangement. Empty arrangements are not submitted.
    /// A wrong arrangement stays in place so the player can fix it.
    pub fn submit_arrangement<R: Rng>(&mut self, rng: &mut R) -> Option<AnswerOutcome> {
        if self.game.kind != GameKind::Dragdrop
            || !self.accepts_answers()
            || self.arrangement.is_empty()
        {
            return None;
        }
        let correct = arrangement_matches(&self.arrangement, &self.game);
        if !correct {
            self.effects
                .push(EffectType::FailFlash, self.config.fail_flash());
        }
        Some(self.resolve(correct, rng))
    }

    /// Restart the clock after it ran out. HP is untouched.
    pub fn retry(&mut self) -> bool {
        if self.disposed || self.phase != BattlePhase::Battle || self.round != RoundState::Expired
        {
            return false;
        }
        let Some(countdown) = self.countdown.as_mut() else {
            return false;
        };
        countdown.rearm();
        let time_limit = countdown.limit();
        self.round = RoundState::Open;
        debug!(time_limit, "countdown re-armed");
        self.events.push(BattleEvent::Retried { time_limit });
        true
    }

    /// Drink an owned potion. Returns the HP actually restored.
    pub fn drink_potion(&mut self, potion_id: &str) -> Option<u32> {
        if self.disposed || self.phase != BattlePhase::Battle {
            return None;
        }
        let heal = potion_heal(potion_id)?;
        let slot = self.potions.iter().position(|p| p == potion_id)?;
        self.potions.remove(slot);

        let healed = self.hero.heal(heal.saturating_add(self.stats.potion_bonus));
        debug!(potion = potion_id, healed, hero_hp = self.hero.hp, "potion drunk");
        self.events.push(BattleEvent::PotionDrunk {
            potion: potion_id.to_string(),
            healed,
        });
        Some(healed)
    }

    fn resolve<R: Rng>(&mut self, correct: bool, rng: &mut R) -> AnswerOutcome {
        self.answers_given += 1;
        if correct {
            self.hero_attack(rng)
        } else {
            self.boss_attack(rng)
        }
    }

    fn hero_attack<R: Rng>(&mut self, rng: &mut R) -> AnswerOutcome {
        let strike = hero_strike(self.stats.total_damage, &self.config, rng);
        self.boss.hp = apply_damage(self.boss.hp, strike.damage);
        if strike.is_crit {
            self.crits_landed += 1;
        }

        let lifetime = self.config.effect_lifetime();
        self.effects.push(
            EffectType::DamageNumber {
                target: Side::Boss,
                value: strike.damage,
                is_crit: strike.is_crit,
            },
            lifetime,
        );
        self.effects
            .push(EffectType::ParticleBurst { target: Side::Boss }, lifetime);
        let label = if strike.is_crit {
            "CRITICAL HIT!"
        } else {
            "DIRECT HIT!"
        };
        self.effects
            .push(EffectType::AttackLabel(label.to_string()), lifetime);

        debug!(
            damage = strike.damage,
            crit = strike.is_crit,
            boss_hp = self.boss.hp,
            "hero strike"
        );
        self.events.push(BattleEvent::HeroStrike {
            damage: strike.damage,
            is_crit: strike.is_crit,
            boss_hp: self.boss.hp,
        });

        let defeated = self.boss.is_defeated();
        if defeated {
            self.enter_victory();
        }
        AnswerOutcome::HeroStrike {
            damage: strike.damage,
            is_crit: strike.is_crit,
            boss_hp: self.boss.hp,
            defeated,
        }
    }

    fn boss_attack<R: Rng>(&mut self, rng: &mut R) -> AnswerOutcome {
        let damage = boss_strike_damage(self.stats.defense_reduction, &self.config, rng);
        self.hero.hp = apply_hero_damage(self.hero.hp, damage, self.config.hero_hp_floor);

        let lifetime = self.config.effect_lifetime();
        self.effects.push(
            EffectType::DamageNumber {
                target: Side::Hero,
                value: damage,
                is_crit: false,
            },
            lifetime,
        );
        self.effects
            .push(EffectType::ParticleBurst { target: Side::Hero }, lifetime);

        debug!(damage, hero_hp = self.hero.hp, "boss strike");
        self.events.push(BattleEvent::BossStrike {
            damage,
            hero_hp: self.hero.hp,
        });
        AnswerOutcome::BossStrike {
            damage,
            hero_hp: self.hero.hp,
        }
    }

    fn enter_victory(&mut self) {
        self.phase = BattlePhase::Victory;
        self.phase_elapsed = Duration::ZERO;
        self.round = RoundState::Open;
        self.countdown = None;
        info!(
            boss = self.boss_name,
            answers = self.answers_given,
            reward = self.stats.reward_coins,
            "boss defeated"
        );
        self.events.push(BattleEvent::Victory {
            reward_coins: self.stats.reward_coins,
        });
    }

    fn pay_reward(&mut self) {
        self.reward_paid = true;
        let coins = self.stats.reward_coins;
        if let Some(callback) = self.on_complete.take() {
            callback(coins);
        }
        info!(coins, "reward reported");
        self.events.push(BattleEvent::RewardPaid { coins });
    }

    /// Tear the battle down. The clock stops and the reward handler is dropped
    /// without being called.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.countdown = None;
        self.on_complete = None;
        self.effects.clear();
        debug!(phase = ?self.phase, reward_paid = self.reward_paid, "battle disposed");
    }
}

/// Dispatch a UI-agnostic input. Returns the outcome when the input was an
/// answer that got resolved.
pub fn process_input<R: Rng>(
    engine: &mut BattleEngine,
    input: BattleInput,
    rng: &mut R,
) -> Option<AnswerOutcome> {
    match input {
        BattleInput::Choose(index) => engine.choose(index, rng),
        BattleInput::Place(index) => {
            engine.place_token(index);
            None
        }
        BattleInput::Remove(index) => {
            engine.remove_token(index);
            None
        }
        BattleInput::Submit => engine.submit_arrangement(rng),
        BattleInput::Retry => {
            engine.retry();
            None
        }
        BattleInput::DrinkPotion(index) => {
            if let Some(potion) = engine.potions.get(index).cloned() {
                engine.drink_potion(&potion);
            }
            None
        }
    }
}
