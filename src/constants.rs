// Combatants
pub const MAX_HP: u32 = 100;
pub const HERO_HP_FLOOR: u32 = 10;

// Hero strike
pub const BASE_DAMAGE: u32 = 100;
pub const CRIT_CHANCE: f64 = 0.20;
pub const CRIT_MULTIPLIER: f64 = 1.5;

// Boss strike: BOSS_BASE_DAMAGE + floor(roll * BOSS_DAMAGE_SPREAD), reduced by defense
pub const BOSS_BASE_DAMAGE: u32 = 15;
pub const BOSS_DAMAGE_SPREAD: u32 = 10;
pub const BOSS_MIN_DAMAGE: u32 = 3;
pub const DEFENSE_FACTOR: f64 = 0.4;

// Descriptor defaults
pub const DEFAULT_TIME_LIMIT_SECONDS: u32 = 10;
pub const DEFAULT_REWARD_COINS: u32 = 15;

// Timing (milliseconds)
pub const INTRO_DELAY_MS: u64 = 1500;
pub const ANSWER_COOLDOWN_MS: u64 = 1200;
pub const VICTORY_DELAY_MS: u64 = 2000;
pub const FAIL_FLASH_MS: u64 = 1500;
pub const EFFECT_LIFETIME_MS: u64 = 1000;

// Potions
pub const HEALTH_POTION_HEAL: u32 = 25;
pub const MEGA_POTION_HEAL: u32 = 50;

// Local session storage
pub const DATA_DIR_NAME: &str = ".math-quest";
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
