//! Content packages: the bundles of templates registered into the engine.
//!
//! A `Package` directly owns its card types, physical card printings,
//! generals and translation entries. The engine consumes packages at startup
//! and builds its flat lookup tables from them; packages themselves are not
//! kept around afterwards.

use serde::{Deserialize, Serialize};

use crate::cards::card::Suit;
use crate::cards::card_type::CardType;

/// A skill carried by a general.
///
/// This core only consumes the parts it needs: the skill's name and, when
/// the skill materializes cards, the skill-card template it exposes. Effect
/// logic lives outside the core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillType {
    /// Unique skill name, also the translation key.
    pub name: String,
    skill_card: Option<CardType>,
}

impl SkillType {
    /// Create a skill descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skill_card: None,
        }
    }

    /// Attach the skill-card template this skill materializes
    /// (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card_type: CardType) -> Self {
        self.skill_card = Some(card_type);
        self
    }

    /// The skill-card template exposed by this skill, if any.
    #[must_use]
    pub fn skill_card(&self) -> Option<&CardType> {
        self.skill_card.as_ref()
    }
}

/// A general (character) descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralType {
    /// Unique general name, also the translation key.
    pub name: String,
    /// Intrinsic lords are always part of the lord draft.
    pub lord: bool,
    skills: Vec<SkillType>,
}

impl GeneralType {
    /// Create a general descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, lord: bool) -> Self {
        Self {
            name: name.into(),
            lord,
            skills: Vec::new(),
        }
    }

    /// Attach a skill (builder pattern).
    #[must_use]
    pub fn with_skill(mut self, skill: SkillType) -> Self {
        self.skills.push(skill);
        self
    }

    /// The general's skills.
    #[must_use]
    pub fn skills(&self) -> &[SkillType] {
        &self.skills
    }
}

/// One physical card printing: a card type stamped with a suit and number.
///
/// Registration turns each printing into a catalog card with the next
/// sequential id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPrint {
    /// Name of a card type registered by the same (or an earlier) package.
    pub type_name: String,
    pub suit: Suit,
    pub number: u8,
}

/// A bundle of card/general/skill templates registered together.
///
/// ## Example
///
/// ```
/// use sanguo_core::cards::{CardCategory, CardType, Suit};
/// use sanguo_core::engine::{GeneralType, Package};
///
/// let standard = Package::new("standard")
///     .with_card_type(CardType::new("slash", CardCategory::Basic, "attack_card", 1))
///     .with_print("slash", Suit::Spade, 7)
///     .with_print("slash", Suit::Club, 10)
///     .with_general(GeneralType::new("caocao", true))
///     .with_translation("slash", "Slash");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package name, used by presentation layers for asset lookup.
    pub name: String,
    pub(crate) card_types: Vec<CardType>,
    pub(crate) prints: Vec<CardPrint>,
    pub(crate) generals: Vec<GeneralType>,
    pub(crate) translations: Vec<(String, String)>,
}

impl Package {
    /// Create an empty package.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            card_types: Vec::new(),
            prints: Vec::new(),
            generals: Vec::new(),
            translations: Vec::new(),
        }
    }

    /// Add a card type template (builder pattern).
    #[must_use]
    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        self.card_types.push(card_type);
        self
    }

    /// Add a physical card printing (builder pattern).
    #[must_use]
    pub fn with_print(mut self, type_name: impl Into<String>, suit: Suit, number: u8) -> Self {
        self.prints.push(CardPrint {
            type_name: type_name.into(),
            suit,
            number,
        });
        self
    }

    /// Add a general (builder pattern).
    #[must_use]
    pub fn with_general(mut self, general: GeneralType) -> Self {
        self.generals.push(general);
        self
    }

    /// Add a translation entry (builder pattern). During registration,
    /// later packages override earlier ones for the same key.
    #[must_use]
    pub fn with_translation(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.translations.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card_type::CardCategory;

    #[test]
    fn test_package_builder() {
        let pkg = Package::new("standard")
            .with_card_type(CardType::new("slash", CardCategory::Basic, "attack_card", 1))
            .with_print("slash", Suit::Spade, 7)
            .with_general(
                GeneralType::new("liubei", true)
                    .with_skill(SkillType::new("rende").with_card(CardType::skill("rende_card"))),
            )
            .with_translation("slash", "Slash");

        assert_eq!(pkg.name, "standard");
        assert_eq!(pkg.card_types.len(), 1);
        assert_eq!(pkg.prints.len(), 1);
        assert_eq!(pkg.generals.len(), 1);
        assert_eq!(pkg.translations.len(), 1);

        let general = &pkg.generals[0];
        assert!(general.lord);
        assert_eq!(general.skills().len(), 1);
        assert!(general.skills()[0].skill_card().is_some());
    }

    #[test]
    fn test_skill_without_card() {
        let skill = SkillType::new("jianxiong");
        assert!(skill.skill_card().is_none());
    }
}
