//! Shop equipment and potion effects.

use serde::Serialize;

/// Which battle stat an item improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    DamageBoost,
    Defense,
    GoldBoost,
    TimeBoost,
    Heal,
    /// Added to damage, defense, gold and time after everything is summed
    AllBoost,
}

/// One row of the fixed item effect table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemEffect {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ModifierKind,
    pub amount: u32,
}

pub const ITEM_EFFECTS: &[ItemEffect] = &[
    ItemEffect {
        id: "fire_sword",
        name: "Fire Sword",
        kind: ModifierKind::DamageBoost,
        amount: 25,
    },
    ItemEffect {
        id: "ice_shield",
        name: "Ice Shield",
        kind: ModifierKind::Defense,
        amount: 20,
    },
    ItemEffect {
        id: "magic_wand",
        name: "Magic Wand",
        kind: ModifierKind::AllBoost,
        amount: 5,
    },
    ItemEffect {
        id: "dino_saddle",
        name: "Dino Saddle",
        kind: ModifierKind::TimeBoost,
        amount: 5,
    },
    ItemEffect {
        id: "missile_launcher",
        name: "Missile Launcher",
        kind: ModifierKind::DamageBoost,
        amount: 50,
    },
    ItemEffect {
        id: "lightning_gauntlets",
        name: "Lightning Gauntlets",
        kind: ModifierKind::GoldBoost,
        amount: 10,
    },
    ItemEffect {
        id: "phoenix_charm",
        name: "Phoenix Charm",
        kind: ModifierKind::Heal,
        amount: 10,
    },
];

/// (potion id, HP restored)
pub const POTIONS: &[(&str, u32)] = &[
    ("health_potion", crate::constants::HEALTH_POTION_HEAL),
    ("mega_potion", crate::constants::MEGA_POTION_HEAL),
];

pub fn item_effect(id: &str) -> Option<&'static ItemEffect> {
    ITEM_EFFECTS.iter().find(|e| e.id == id)
}

pub fn potion_heal(id: &str) -> Option<u32> {
    POTIONS
        .iter()
        .find(|(potion, _)| *potion == id)
        .map(|(_, heal)| *heal)
}

/// Summed modifiers of everything the hero has equipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EquipmentEffects {
    pub damage_boost: u32,
    pub defense: u32,
    pub gold_boost: u32,
    pub time_boost: u32,
    pub heal: u32,
    pub all_boost: u32,
}

impl EquipmentEffects {
    /// Sum the effect table over `equipped`. Unknown ids are ignored.
    /// `all_boost` is folded into the four other boosts afterwards; `heal`
    /// is left alone.
    pub fn from_equipped<S: AsRef<str>>(equipped: &[S]) -> Self {
        let mut effects = Self::default();
        for effect in equipped.iter().filter_map(|id| item_effect(id.as_ref())) {
            let slot = match effect.kind {
                ModifierKind::DamageBoost => &mut effects.damage_boost,
                ModifierKind::Defense => &mut effects.defense,
                ModifierKind::GoldBoost => &mut effects.gold_boost,
                ModifierKind::TimeBoost => &mut effects.time_boost,
                ModifierKind::Heal => &mut effects.heal,
                ModifierKind::AllBoost => &mut effects.all_boost,
            };
            *slot += effect.amount;
        }

        effects.damage_boost += effects.all_boost;
        effects.defense += effects.all_boost;
        effects.gold_boost += effects.all_boost;
        effects.time_boost += effects.all_boost;
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_loadout() {
        let effects = EquipmentEffects::from_equipped::<&str>(&[]);
        assert_eq!(effects, EquipmentEffects::default());
    }

    #[test]
    fn test_single_items() {
        let sword = EquipmentEffects::from_equipped(&["fire_sword"]);
        assert_eq!(sword.damage_boost, 25);
        assert_eq!(sword.defense, 0);

        let shield = EquipmentEffects::from_equipped(&["ice_shield"]);
        assert_eq!(shield.defense, 20);
    }

    #[test]
    fn test_all_boost_folds_into_four_stats() {
        let effects = EquipmentEffects::from_equipped(&["magic_wand", "fire_sword"]);
        assert_eq!(effects.all_boost, 5);
        assert_eq!(effects.damage_boost, 30);
        assert_eq!(effects.defense, 5);
        assert_eq!(effects.gold_boost, 5);
        assert_eq!(effects.time_boost, 5);
        assert_eq!(effects.heal, 0);
    }

    #[test]
    fn test_duplicates_stack_and_unknown_ignored() {
        let effects =
            EquipmentEffects::from_equipped(&["fire_sword", "fire_sword", "rubber_duck", ""]);
        assert_eq!(effects.damage_boost, 50);
        assert_eq!(effects.gold_boost, 0);
    }

    #[test]
    fn test_full_kit() {
        let ids: Vec<String> = ITEM_EFFECTS.iter().map(|e| e.id.to_string()).collect();
        let effects = EquipmentEffects::from_equipped(ids.as_slice());
        assert_eq!(effects.damage_boost, 25 + 50 + 5);
        assert_eq!(effects.defense, 20 + 5);
        assert_eq!(effects.gold_boost, 10 + 5);
        assert_eq!(effects.time_boost, 5 + 5);
        assert_eq!(effects.heal, 10);
    }

    #[test]
    fn test_potion_lookup() {
        assert_eq!(potion_heal("health_potion"), Some(25));
        assert_eq!(potion_heal("mega_potion"), Some(50));
        assert_eq!(potion_heal("fire_sword"), None);
    }
}
