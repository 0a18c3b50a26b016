//! Canonical text representation of cards.
//!
//! This is the wire format used by multiplayer sessions to describe which
//! cards are held or played. Three forms exist, dispatched by inspecting the
//! input:
//!
//! 1. `@Name=3+5` — a skill card with its subcard ids;
//! 2. `Name[suit:number]=3+5` — a virtual composite card;
//! 3. `17` — a physical catalog card by id.
//!
//! Rendering lives on [`Card`]'s `Display` impl; parsing needs the registry
//! to resolve type names and therefore goes through
//! [`Engine::parse_card`](crate::engine::Engine::parse_card). Parsing is the
//! single place where failures are expected: malformed text and unknown
//! names come back as typed [`CoreError`] values, never panics.

use std::borrow::Cow;
use std::fmt;

use super::card::{Card, Suit};
use crate::engine::Engine;
use crate::error::CoreError;

/// Render a card number as its wire token.
///
/// `1` is `A`, `11`/`12`/`13` are `J`/`Q`/`K`, `0` is the no-number marker
/// `-`, everything else is decimal.
#[must_use]
pub fn number_token(number: u8) -> String {
    match number {
        0 => "-".to_owned(),
        1 => "A".to_owned(),
        11 => "J".to_owned(),
        12 => "Q".to_owned(),
        13 => "K".to_owned(),
        n => n.to_string(),
    }
}

/// Map a wire number token back to a card number.
///
/// Tokens that are neither a face letter nor a decimal integer map to `0`.
#[must_use]
pub fn number_from_token(token: &str) -> u8 {
    match token {
        "A" => 1,
        "J" => 11,
        "Q" => 12,
        "K" => 13,
        _ => token.parse().unwrap_or(0),
    }
}

impl Card {
    /// The wire token of this card's number.
    #[must_use]
    pub fn number_token(&self) -> String {
        number_token(self.number())
    }

    /// Subcard ids joined by `+`.
    #[must_use]
    pub fn subcard_string(&self) -> String {
        let ids: Vec<String> = self.subcards().iter().map(i32::to_string).collect();
        ids.join("+")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_virtual() {
            write!(f, "{}", self.id())
        } else if self.is_skill_card() {
            write!(f, "@{}={}", self.name(), self.subcard_string())
        } else {
            write!(
                f,
                "{}[{}:{}]={}",
                self.name(),
                self.suit().token(),
                self.number_token(),
                self.subcard_string()
            )
        }
    }
}

/// Parse a card token against the engine's registry.
///
/// Physical cards come back as `Cow::Borrowed` of the catalog instance;
/// virtual and skill cards are freshly built.
pub(crate) fn parse_card<'a>(engine: &'a Engine, text: &str) -> Result<Cow<'a, Card>, CoreError> {
    if let Some(rest) = text.strip_prefix('@') {
        // Skill-card form: @Name=3+5
        let (name, subcards) = rest
            .split_once('=')
            .ok_or_else(|| CoreError::Parse(text.to_owned()))?;
        let mut card = engine.new_skill_card(name)?;
        attach_subcards(&mut card, subcards, text)?;
        Ok(Cow::Owned(card))
    } else if let Some((head, subcards)) = text.split_once('=') {
        // Virtual form: Name[suit:number]=3+5
        let (name, suit, number) = split_virtual_head(head, text)?;
        let mut card = engine.new_card(name, suit, number)?;
        attach_subcards(&mut card, subcards, text)?;
        Ok(Cow::Owned(card))
    } else {
        // Physical form: a bare decimal id.
        let id: i32 = text
            .parse()
            .map_err(|_| CoreError::Parse(text.to_owned()))?;
        Ok(Cow::Borrowed(engine.card(id)?))
    }
}

fn split_virtual_head<'t>(head: &'t str, text: &str) -> Result<(&'t str, Suit, u8), CoreError> {
    let malformed = || CoreError::Parse(text.to_owned());

    let (name, bracketed) = head.split_once('[').ok_or_else(malformed)?;
    let body = bracketed.strip_suffix(']').ok_or_else(malformed)?;
    let (suit_token, num_token) = body.split_once(':').ok_or_else(malformed)?;

    Ok((name, Suit::from_token(suit_token), number_from_token(num_token)))
}

fn attach_subcards(card: &mut Card, list: &str, text: &str) -> Result<(), CoreError> {
    if list.is_empty() {
        return Ok(());
    }
    for token in list.split('+') {
        let id: i32 = token
            .parse()
            .map_err(|_| CoreError::Parse(text.to_owned()))?;
        // Negative ids are dropped (with a warning) rather than stored.
        card.add_subcard(id);
    }
    Ok(())
}
