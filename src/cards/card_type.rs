//! Card type templates - static card data.
//!
//! A `CardType` describes one kind of card ("Slash", "Ice Sword", a skill's
//! invocation card). Templates are registered once from content packages and
//! never mutated afterwards; card instances share their template behind an
//! `Arc`.
//!
//! Instance-specific data (suit, number, subcards) lives in
//! [`Card`](super::card::Card).

use serde::{Deserialize, Serialize};

/// Broad category of a card type.
///
/// The declaration order is not significant for sorting; ordering uses the
/// per-type [`CardType::type_ord`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    /// Basic cards (attack, dodge, recovery).
    Basic,
    /// Trick cards, immediate or delayed.
    Trick,
    /// Equipment cards.
    Equip,
    /// Cards materialized by a skill invocation; never part of the catalog.
    Skill,
}

impl CardCategory {
    /// The category name used by type patterns and the wire format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardCategory::Basic => "basic_card",
            CardCategory::Trick => "trick_card",
            CardCategory::Equip => "equip_card",
            CardCategory::Skill => "skill_card",
        }
    }
}

/// Immutable descriptor of a card kind.
///
/// ## Example
///
/// ```
/// use sanguo_core::cards::{CardCategory, CardType};
///
/// let slash = CardType::new("slash", CardCategory::Basic, "attack_card", 1)
///     .with_target_fixed(false);
///
/// assert_eq!(slash.name, "slash");
/// assert!(slash.available_at_play);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardType {
    /// Unique key for this type; also the wire-format name.
    pub name: String,

    /// Broad category.
    pub category: CardCategory,

    /// Fine-grained subtype name (e.g. `attack_card`, `weapon`).
    pub subtype: String,

    /// Small stable ordinal used by the type comparator. Declared by the
    /// type, independent of registration order.
    pub type_ord: i32,

    /// Whether the card needs no target selection when played.
    pub target_fixed: bool,

    /// Default availability when no enable/disable pattern decides.
    pub available_at_play: bool,
}

impl CardType {
    /// Create a new card type template.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: CardCategory,
        subtype: impl Into<String>,
        type_ord: i32,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            subtype: subtype.into(),
            type_ord,
            target_fixed: false,
            available_at_play: true,
        }
    }

    /// Create a skill-card template.
    ///
    /// Skill cards share a fixed category/subtype and sort before every
    /// catalog type (ordinal 0).
    #[must_use]
    pub fn skill(name: impl Into<String>) -> Self {
        Self::new(name, CardCategory::Skill, "skill_card", 0)
    }

    /// Set the target-fixed flag (builder pattern).
    #[must_use]
    pub fn with_target_fixed(mut self, target_fixed: bool) -> Self {
        self.target_fixed = target_fixed;
        self
    }

    /// Set the default availability flag (builder pattern).
    #[must_use]
    pub fn with_available_at_play(mut self, available: bool) -> Self {
        self.available_at_play = available;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(CardCategory::Basic.as_str(), "basic_card");
        assert_eq!(CardCategory::Trick.as_str(), "trick_card");
        assert_eq!(CardCategory::Equip.as_str(), "equip_card");
        assert_eq!(CardCategory::Skill.as_str(), "skill_card");
    }

    #[test]
    fn test_card_type_builder() {
        let ty = CardType::new("ice_sword", CardCategory::Equip, "weapon", 3)
            .with_target_fixed(true)
            .with_available_at_play(false);

        assert_eq!(ty.name, "ice_sword");
        assert_eq!(ty.category, CardCategory::Equip);
        assert_eq!(ty.subtype, "weapon");
        assert_eq!(ty.type_ord, 3);
        assert!(ty.target_fixed);
        assert!(!ty.available_at_play);
    }

    #[test]
    fn test_skill_template() {
        let ty = CardType::skill("rende_card");

        assert_eq!(ty.category, CardCategory::Skill);
        assert_eq!(ty.subtype, "skill_card");
        assert_eq!(ty.type_ord, 0);
        assert!(ty.available_at_play);
    }

    #[test]
    fn test_card_type_serialization() {
        let ty = CardType::new("slash", CardCategory::Basic, "attack_card", 1);

        let json = serde_json::to_string(&ty).unwrap();
        let deserialized: CardType = serde_json::from_str(&json).unwrap();

        assert_eq!(ty, deserialized);
    }
}
