//! The engine context: registry, catalog, translation, random selection.
//!
//! An [`Engine`] is constructed once at startup, fed every content package,
//! and then treated as read-only. It is threaded explicitly into whatever
//! needs catalog, translation or randomization access; there is no ambient
//! global instance.
//!
//! ## Concurrency
//!
//! After registration every method takes `&self`, so a built engine can be
//! shared freely across sessions. The random-selection methods take the
//! session RNG as an explicit `&mut` parameter; one generator is shared per
//! session and callers on multiple threads must synchronize around it.

pub mod package;

use std::borrow::Cow;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::cards::card::{Card, Suit};
use crate::cards::card_type::{CardCategory, CardType};
use crate::cards::codec;
use crate::core::rng::GameRng;
use crate::error::CoreError;

pub use package::{CardPrint, GeneralType, Package, SkillType};

/// Type catalog, physical card catalog, and translation overlay.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    types: FxHashMap<String, Arc<CardType>>,
    cards: Vec<Card>,
    generals: FxHashMap<String, GeneralType>,
    general_names: Vec<String>,
    lord_names: Vec<String>,
    nonlord_names: Vec<String>,
    skills: FxHashMap<String, SkillType>,
    translations: FxHashMap<String, String>,
}

impl Engine {
    /// Create an empty engine. Register packages before use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a content package.
    ///
    /// Card types go into the factory table; every printing becomes a
    /// catalog card with the next sequential id; generals are recorded in
    /// registration order, split into lord and non-lord lists; skill-card
    /// templates exposed by skills become instantiable types; translation
    /// entries are merged with later packages overriding earlier ones.
    ///
    /// Registering the same package twice duplicates its catalog entries;
    /// calling this once per package is the caller's responsibility.
    ///
    /// Fails with [`CoreError::UnknownType`] when a printing references a
    /// type that neither this nor an earlier package declared. A rejected
    /// package leaves the engine unchanged.
    pub fn register_package(&mut self, package: Package) -> Result<(), CoreError> {
        let Package {
            name: _,
            card_types,
            prints,
            generals,
            translations,
        } = package;

        // Validate every printing before touching any table, so the error
        // path cannot leave a half-registered package behind.
        for print in &prints {
            let declared = self.types.contains_key(&print.type_name)
                || card_types.iter().any(|ty| ty.name == print.type_name);
            if !declared {
                return Err(CoreError::UnknownType(print.type_name.clone()));
            }
        }

        for card_type in card_types {
            self.types
                .insert(card_type.name.clone(), Arc::new(card_type));
        }

        for print in prints {
            let card_type = self
                .types
                .get(&print.type_name)
                .cloned()
                .expect("print types are validated before registration");
            let mut card = Card::new(card_type, print.suit, print.number);
            card.set_id(self.cards.len() as i32);
            self.cards.push(card);
        }

        for general in generals {
            if general.lord {
                self.lord_names.push(general.name.clone());
            } else {
                self.nonlord_names.push(general.name.clone());
            }
            self.general_names.push(general.name.clone());

            for skill in general.skills() {
                if let Some(card_type) = skill.skill_card() {
                    self.types
                        .insert(card_type.name.clone(), Arc::new(card_type.clone()));
                }
                self.skills.insert(skill.name.clone(), skill.clone());
            }
            self.generals.insert(general.name.clone(), general);
        }

        for (key, value) in translations {
            self.translations.insert(key, value);
        }

        Ok(())
    }

    /// Look up a card type template by name.
    pub fn card_type(&self, name: &str) -> Result<&Arc<CardType>, CoreError> {
        self.types
            .get(name)
            .ok_or_else(|| CoreError::UnknownType(name.to_owned()))
    }

    /// Instantiate a plain (non-skill) card of a registered type.
    ///
    /// Fails with [`CoreError::UnknownType`] for unregistered names and
    /// [`CoreError::TypeMismatch`] when the name resolves to a skill
    /// template.
    pub fn new_card(&self, name: &str, suit: Suit, number: u8) -> Result<Card, CoreError> {
        let card_type = self.card_type(name)?;
        if card_type.category == CardCategory::Skill {
            return Err(CoreError::TypeMismatch {
                name: name.to_owned(),
                expected: "plain",
            });
        }
        Ok(Card::new(Arc::clone(card_type), suit, number))
    }

    /// Instantiate a skill card of a registered skill type.
    ///
    /// Skill cards carry no suit and no number.
    pub fn new_skill_card(&self, name: &str) -> Result<Card, CoreError> {
        let card_type = self.card_type(name)?;
        if card_type.category != CardCategory::Skill {
            return Err(CoreError::TypeMismatch {
                name: name.to_owned(),
                expected: "skill",
            });
        }
        Ok(Card::new(Arc::clone(card_type), Suit::NoSuit, 0))
    }

    /// Resolve a physical card id received from a peer.
    pub fn card(&self, id: i32) -> Result<&Card, CoreError> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.cards.get(index))
            .ok_or(CoreError::NotFound(id))
    }

    /// Number of physical cards in the catalog.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Look up a general descriptor by name.
    #[must_use]
    pub fn general(&self, name: &str) -> Option<&GeneralType> {
        self.generals.get(name)
    }

    /// Number of registered generals.
    #[must_use]
    pub fn general_count(&self) -> usize {
        self.generals.len()
    }

    /// Look up a skill descriptor by name.
    #[must_use]
    pub fn skill(&self, name: &str) -> Option<&SkillType> {
        self.skills.get(name)
    }

    /// Translate a key through the overlay.
    ///
    /// Unmapped keys come back unchanged; this never fails.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.get(key).map_or(key, String::as_str)
    }

    /// Human-readable card name, optionally prefixed with the translated
    /// suit, e.g. `"Heart7 Slash"`.
    #[must_use]
    pub fn full_name(&self, card: &Card, include_suit: bool) -> String {
        let name = self.translate(card.name());
        if include_suit {
            let suit = self.translate(card.suit().token());
            format!("{}{} {}", suit, card.number_token(), name)
        } else {
            format!("{} {}", card.number_token(), name)
        }
    }

    /// Parse a card wire token. See [`crate::cards::codec`] for the grammar.
    ///
    /// Physical tokens resolve to the identical catalog instance
    /// (`Cow::Borrowed`); virtual and skill tokens build a fresh card.
    pub fn parse_card<'a>(&'a self, text: &str) -> Result<Cow<'a, Card>, CoreError> {
        codec::parse_card(self, text)
    }

    /// Lord candidates for the setup phase: the full intrinsic-lord set plus
    /// `count - intrinsic` non-lords drawn via the session shuffle.
    ///
    /// When `count` is below the intrinsic lord count the request is not
    /// honored: a warning is logged and the intrinsic set is returned
    /// unchanged.
    #[must_use]
    pub fn random_lords(&self, count: usize, rng: &mut GameRng) -> Vec<String> {
        let mut lords = self.lord_names.clone();

        if count < lords.len() {
            log::warn!(
                "lord count must be at least the intrinsic lord number ({}), got {count}",
                lords.len()
            );
            return lords;
        }

        let mut pool = self.nonlord_names.clone();
        rng.swap_shuffle(&mut pool);

        let extra = count - lords.len();
        lords.extend(pool.into_iter().take(extra));
        lords
    }

    /// Draw `count` distinct general names for the draft, skipping `ban`.
    ///
    /// # Panics
    ///
    /// The candidate pool (registered generals minus bans) must be able to
    /// satisfy `count`; a shortfall is a programming-contract violation.
    #[must_use]
    pub fn random_generals(
        &self,
        count: usize,
        ban: &FxHashSet<String>,
        rng: &mut GameRng,
    ) -> Vec<String> {
        let mut pool = self.general_names.clone();
        rng.swap_shuffle(&mut pool);
        pool.retain(|name| !ban.contains(name));

        assert!(
            pool.len() >= count,
            "general pool exhausted: {} candidates for a request of {count}",
            pool.len()
        );

        pool.truncate(count);
        pool
    }

    /// A fresh draw-pile ordering: a permutation of all physical ids,
    /// produced by the session shuffle.
    #[must_use]
    pub fn random_card_order(&self, rng: &mut GameRng) -> Vec<i32> {
        let mut order: Vec<i32> = (0..self.cards.len() as i32).collect();
        rng.swap_shuffle(&mut order);
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card_type::CardCategory;

    fn small_package() -> Package {
        Package::new("standard")
            .with_card_type(CardType::new("slash", CardCategory::Basic, "attack_card", 1))
            .with_card_type(CardType::new("jink", CardCategory::Basic, "defense_card", 2))
            .with_print("slash", Suit::Spade, 7)
            .with_print("slash", Suit::Club, 10)
            .with_print("jink", Suit::Diamond, 2)
            .with_general(GeneralType::new("caocao", true))
            .with_general(
                GeneralType::new("liubei", true)
                    .with_skill(SkillType::new("rende").with_card(CardType::skill("rende_card"))),
            )
            .with_general(GeneralType::new("zhaoyun", false))
            .with_general(GeneralType::new("guanyu", false))
            .with_general(GeneralType::new("machao", false))
            .with_translation("slash", "Slash")
            .with_translation("spade", "Spade")
    }

    fn engine() -> Engine {
        let mut engine = Engine::new();
        engine.register_package(small_package()).unwrap();
        engine
    }

    #[test]
    fn test_sequential_ids() {
        let engine = engine();

        assert_eq!(engine.card_count(), 3);
        for id in 0..3 {
            assert_eq!(engine.card(id).unwrap().id(), id);
        }
        assert_eq!(engine.card(0).unwrap().name(), "slash");
        assert_eq!(engine.card(2).unwrap().name(), "jink");
    }

    #[test]
    fn test_card_out_of_range() {
        let engine = engine();

        assert_eq!(engine.card(3).unwrap_err(), CoreError::NotFound(3));
        assert_eq!(engine.card(-1).unwrap_err(), CoreError::NotFound(-1));
    }

    #[test]
    fn test_print_with_unknown_type_is_rejected() {
        let mut engine = Engine::new();
        let pkg = Package::new("broken").with_print("peach", Suit::Heart, 3);

        assert_eq!(
            engine.register_package(pkg).unwrap_err(),
            CoreError::UnknownType("peach".into())
        );
    }

    #[test]
    fn test_rejected_package_leaves_engine_unchanged() {
        let mut engine = Engine::new();

        // A valid print followed by one referencing an undeclared type.
        let pkg = Package::new("broken")
            .with_card_type(CardType::new("slash", CardCategory::Basic, "attack_card", 1))
            .with_print("slash", Suit::Spade, 7)
            .with_print("peach", Suit::Heart, 3)
            .with_general(GeneralType::new("caocao", true))
            .with_translation("slash", "Slash");

        assert_eq!(
            engine.register_package(pkg).unwrap_err(),
            CoreError::UnknownType("peach".into())
        );

        // Nothing from the rejected package is visible.
        assert_eq!(engine.card_count(), 0);
        assert_eq!(
            engine.card_type("slash").unwrap_err(),
            CoreError::UnknownType("slash".into())
        );
        assert_eq!(engine.general_count(), 0);
        assert_eq!(engine.translate("slash"), "slash");

        // The same engine accepts a well-formed package afterwards.
        engine.register_package(small_package()).unwrap();
        assert_eq!(engine.card_count(), 3);
    }

    #[test]
    fn test_print_may_reference_earlier_package_type() {
        let mut engine = engine();
        let expansion = Package::new("expansion").with_print("slash", Suit::Heart, 5);

        engine.register_package(expansion).unwrap();

        assert_eq!(engine.card_count(), 4);
        let card = engine.card(3).unwrap();
        assert_eq!(card.name(), "slash");
        assert_eq!(card.suit(), Suit::Heart);
    }

    #[test]
    fn test_new_card() {
        let engine = engine();

        let card = engine.new_card("slash", Suit::Heart, 7).unwrap();
        assert!(card.is_virtual());
        assert_eq!(card.suit(), Suit::Heart);
        assert_eq!(card.number(), 7);

        assert_eq!(
            engine.new_card("peach", Suit::Heart, 3).unwrap_err(),
            CoreError::UnknownType("peach".into())
        );
        assert_eq!(
            engine.new_card("rende_card", Suit::Heart, 3).unwrap_err(),
            CoreError::TypeMismatch {
                name: "rende_card".into(),
                expected: "plain"
            }
        );
    }

    #[test]
    fn test_new_skill_card() {
        let engine = engine();

        let card = engine.new_skill_card("rende_card").unwrap();
        assert!(card.is_skill_card());
        assert_eq!(card.suit(), Suit::NoSuit);
        assert_eq!(card.number(), 0);

        assert_eq!(
            engine.new_skill_card("slash").unwrap_err(),
            CoreError::TypeMismatch {
                name: "slash".into(),
                expected: "skill"
            }
        );
    }

    #[test]
    fn test_skill_lookup() {
        let engine = engine();

        assert!(engine.skill("rende").is_some());
        assert!(engine.skill("jianxiong").is_none());
        assert_eq!(engine.general_count(), 5);
        assert!(engine.general("caocao").unwrap().lord);
    }

    #[test]
    fn test_translate() {
        let engine = engine();

        assert_eq!(engine.translate("slash"), "Slash");
        assert_eq!(engine.translate("unmapped_key"), "unmapped_key");
    }

    #[test]
    fn test_translation_later_package_overrides() {
        let mut engine = engine();
        let overlay = Package::new("overlay").with_translation("slash", "Strike");
        engine.register_package(overlay).unwrap();

        assert_eq!(engine.translate("slash"), "Strike");
        assert_eq!(engine.translate("spade"), "Spade");
    }

    #[test]
    fn test_full_name() {
        let engine = engine();
        let card = engine.card(0).unwrap();

        assert_eq!(engine.full_name(card, true), "Spade7 Slash");
        assert_eq!(engine.full_name(card, false), "7 Slash");
    }

    #[test]
    fn test_random_lords_honored() {
        let engine = engine();
        let mut rng = GameRng::new(42);

        let lords = engine.random_lords(4, &mut rng);
        assert_eq!(lords.len(), 4);
        assert_eq!(&lords[..2], &["caocao".to_owned(), "liubei".to_owned()]);

        // The extras are distinct non-lords.
        let mut extras = lords[2..].to_vec();
        extras.sort();
        extras.dedup();
        assert_eq!(extras.len(), 2);
        for name in &extras {
            assert!(!engine.general(name).unwrap().lord);
        }
    }

    #[test]
    fn test_random_lords_undercount_returns_intrinsic_set() {
        let engine = engine();
        let mut rng = GameRng::new(42);

        let lords = engine.random_lords(1, &mut rng);
        assert_eq!(lords, vec!["caocao".to_owned(), "liubei".to_owned()]);
    }

    #[test]
    fn test_random_generals() {
        let engine = engine();
        let mut rng = GameRng::new(42);

        let mut ban = FxHashSet::default();
        ban.insert("guanyu".to_owned());

        let picked = engine.random_generals(4, &ban, &mut rng);
        assert_eq!(picked.len(), 4);
        assert!(!picked.contains(&"guanyu".to_owned()));

        let mut distinct = picked.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    #[should_panic(expected = "general pool exhausted")]
    fn test_random_generals_pool_exhausted() {
        let engine = engine();
        let mut rng = GameRng::new(42);

        let _ = engine.random_generals(6, &FxHashSet::default(), &mut rng);
    }

    #[test]
    fn test_random_card_order_is_permutation() {
        let engine = engine();
        let mut rng = GameRng::new(42);

        let mut order = engine.random_card_order(&mut rng);
        assert_eq!(order.len(), engine.card_count());
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_reregistration_duplicates_catalog() {
        // Documented caller responsibility: no guard against re-registering.
        let mut engine = engine();
        engine.register_package(small_package()).unwrap();

        assert_eq!(engine.card_count(), 6);
        assert_eq!(engine.card(3).unwrap().name(), "slash");
    }
}
