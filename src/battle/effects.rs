//! Short-lived battle effects: damage numbers, bursts, attack labels.
//!
//! Purely presentational. Nothing here feeds back into HP or rewards.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Hero,
    Boss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectType {
    DamageNumber { target: Side, value: u32, is_crit: bool },
    ParticleBurst { target: Side },
    AttackLabel(String),
    /// Red flash on a rejected drag-drop arrangement
    FailFlash,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientEffect {
    pub id: u64,
    pub effect_type: EffectType,
    pub elapsed: Duration,
    pub lifetime: Duration,
}

impl TransientEffect {
    /// Age the effect; returns whether it is still visible.
    pub fn update(&mut self, delta: Duration) -> bool {
        self.elapsed += delta;
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.elapsed < self.lifetime
    }

    /// 0.0 when spawned, 1.0 when expired.
    pub fn progress(&self) -> f64 {
        if self.lifetime.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.lifetime.as_secs_f64()).min(1.0)
    }
}

/// Active effects keyed by an ever-increasing id.
#[derive(Debug, Clone, Default)]
pub struct EffectQueue {
    next_id: u64,
    active: Vec<TransientEffect>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect_type: EffectType, lifetime: Duration) -> u64 {
        self.next_id += 1;
        self.active.push(TransientEffect {
            id: self.next_id,
            effect_type,
            elapsed: Duration::ZERO,
            lifetime,
        });
        self.next_id
    }

    pub fn update(&mut self, delta: Duration) {
        self.active.retain_mut(|effect| effect.update(delta));
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransientEffect> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn has_fail_flash(&self) -> bool {
        self.active
            .iter()
            .any(|e| e.effect_type == EffectType::FailFlash)
    }
}
