//! # sanguo-core
//!
//! Type catalog, card data model, and text serialization protocol for a
//! Three Kingdoms card game engine. This crate is the identity/serialization
//! substrate the game rules are built on; it does not implement the rules
//! themselves, rendering, audio, transport framing, or AI.
//!
//! ## Design Principles
//!
//! 1. **Explicit context**: there is no global engine singleton. An
//!    [`Engine`] is built once from content [`Package`]s and threaded into
//!    every consumer.
//!
//! 2. **Factory tables over reflection**: card types are instantiated
//!    through the name-keyed template table populated at registration, not
//!    through runtime type lookup.
//!
//! 3. **Typed failures at the boundary**: everything expected to fail
//!    (unknown names, out-of-range ids, malformed tokens) is a
//!    [`CoreError`], surfaced at the registry/codec boundary.
//!
//! ## Wire format
//!
//! Every card has a canonical text token used by session messages:
//! physical cards are a bare id (`"17"`), composites are
//! `"slash[heart:7]=3+5"`, skill cards are `"@rende_card=2"`. `Display`
//! renders it; [`Engine::parse_card`] reconstructs the card, returning the
//! identical catalog instance for physical tokens.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG with the session swap-shuffle
//! - `cards`: type templates, card instances, patterns, the text codec
//! - `engine`: registry/catalog, translation overlay, random selection
//! - `error`: the crate error enum

pub mod cards;
pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::cards::{
    number_from_token, number_token, Card, CardCategory, CardType, Pattern, PatternKind, Suit,
    VIRTUAL_ID,
};
pub use crate::core::{GameRng, GameRngState};
pub use crate::engine::{CardPrint, Engine, GeneralType, Package, SkillType};
pub use crate::error::CoreError;
