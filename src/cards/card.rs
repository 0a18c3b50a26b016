//! Card instances and suit/ordering primitives.
//!
//! A [`Card`] is either *physical* (a catalog card with a stable non-negative
//! id, created once at package registration) or *virtual* (id `-1`, built on
//! demand for a composite play or a skill invocation and discarded after
//! use). Virtual cards reference their constituent physical cards through a
//! list of subcard ids; they never hold references into the catalog itself.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card_type::{CardCategory, CardType};

/// Sentinel id carried by every virtual card.
pub const VIRTUAL_ID: i32 = -1;

/// Card suit. Declaration order is the sort order used by
/// [`Card::cmp_by_suit_number`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
    /// No suit, e.g. skill cards or suitless composites.
    NoSuit,
}

impl Suit {
    /// The wire-format token for this suit.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Suit::Spade => "spade",
            Suit::Heart => "heart",
            Suit::Club => "club",
            Suit::Diamond => "diamond",
            Suit::NoSuit => "no_suit",
        }
    }

    /// Map a wire-format token back to a suit.
    ///
    /// Unrecognized tokens map to [`Suit::NoSuit`].
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "spade" => Suit::Spade,
            "heart" => Suit::Heart,
            "club" => Suit::Club,
            "diamond" => Suit::Diamond,
            _ => Suit::NoSuit,
        }
    }

    /// Red suits are hearts and diamonds.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }

    /// Black suits are spades and clubs.
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Suit::Spade | Suit::Club)
    }
}

/// A card instance.
///
/// Physical cards belong to the engine catalog and live for the whole
/// process; virtual cards are ephemeral and owned by whoever built them.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use sanguo_core::cards::{Card, CardCategory, CardType, Suit};
///
/// let slash = Arc::new(CardType::new("slash", CardCategory::Basic, "attack_card", 1));
/// let mut card = Card::new(slash, Suit::Heart, 7);
///
/// assert!(card.is_virtual());
/// card.add_subcard(3);
/// card.add_subcard(5);
/// assert_eq!(card.subcards(), &[3, 5]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    card_type: Arc<CardType>,
    suit: Suit,
    number: u8,
    id: i32,
    subcards: SmallVec<[i32; 4]>,
}

impl Card {
    /// Create a new (virtual) card of the given type.
    ///
    /// Numbers outside `1..=13` are clamped to `0`, the no-number marker.
    /// Physical ids are assigned by the engine at registration.
    #[must_use]
    pub fn new(card_type: Arc<CardType>, suit: Suit, number: u8) -> Self {
        let number = if (1..=13).contains(&number) { number } else { 0 };
        Self {
            card_type,
            suit,
            number,
            id: VIRTUAL_ID,
            subcards: SmallVec::new(),
        }
    }

    /// Catalog id for physical cards, [`VIRTUAL_ID`] otherwise.
    #[must_use]
    pub fn id(&self) -> i32 {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    /// The shared type template.
    #[must_use]
    pub fn card_type(&self) -> &CardType {
        &self.card_type
    }

    /// The type name, which is also the display/translation key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.card_type.name
    }

    /// Broad category of the card's type.
    #[must_use]
    pub fn category(&self) -> CardCategory {
        self.card_type.category
    }

    /// Subtype name of the card's type.
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.card_type.subtype
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Card number in `0..=13`; `0` means no number.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Whether this card needs no target selection.
    #[must_use]
    pub fn target_fixed(&self) -> bool {
        self.card_type.target_fixed
    }

    /// A card is virtual when it is not part of the catalog.
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        self.id < 0
    }

    /// Skill cards are the virtual cards materialized by skill invocations.
    #[must_use]
    pub fn is_skill_card(&self) -> bool {
        self.card_type.category == CardCategory::Skill
    }

    #[must_use]
    pub fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    #[must_use]
    pub fn is_black(&self) -> bool {
        self.suit.is_black()
    }

    /// The physical card ids this (virtual) card is composed of.
    #[must_use]
    pub fn subcards(&self) -> &[i32] {
        &self.subcards
    }

    /// Append a physical card id to the subcard list.
    ///
    /// Negative (virtual) ids are dropped with a warning; the card is left
    /// intact.
    pub fn add_subcard(&mut self, card_id: i32) {
        if card_id < 0 {
            log::warn!("subcard must be a physical card, ignoring id {card_id}");
        } else {
            self.subcards.push(card_id);
        }
    }

    /// Append several subcard ids, with the same negative-id filtering as
    /// [`Card::add_subcard`].
    pub fn add_subcards(&mut self, card_ids: &[i32]) {
        for &card_id in card_ids {
            self.add_subcard(card_id);
        }
    }

    /// Match this card against a rule pattern text.
    ///
    /// Empty text always matches; otherwise the text is compared against the
    /// type name, the category name and the subtype name.
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        pattern.is_empty()
            || self.name() == pattern
            || self.category().as_str() == pattern
            || self.subtype() == pattern
    }

    /// Order by suit (declaration order), ties broken by ascending number.
    #[must_use]
    pub fn cmp_by_suit_number(a: &Card, b: &Card) -> Ordering {
        a.suit.cmp(&b.suit).then(a.number.cmp(&b.number))
    }

    /// Order by declared type first, then by registration order within the
    /// type; equal keys fall back to [`Card::cmp_by_suit_number`].
    #[must_use]
    pub fn cmp_by_type(a: &Card, b: &Card) -> Ordering {
        let key_a = a.card_type.type_ord * 10000 + a.id;
        let key_b = b.card_type.type_ord * 10000 + b.id;
        key_a
            .cmp(&key_b)
            .then_with(|| Card::cmp_by_suit_number(a, b))
    }
}
