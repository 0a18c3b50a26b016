//! Card system: type templates, instances, patterns, and the wire format.
//!
//! ## Key Types
//!
//! - `CardType`: immutable type template registered from content packages
//! - `Card`: physical (catalog) or virtual (composite/skill) card instance
//! - `Suit` / `CardCategory`: closed enums with wire-format names
//! - `Pattern`: stateless rule predicate over cards
//!
//! The text codec lives in [`codec`]; rendering is `Card`'s `Display` impl
//! and parsing is [`Engine::parse_card`](crate::engine::Engine::parse_card).

pub mod card;
pub mod card_type;
pub mod codec;
pub mod pattern;

pub use card::{Card, Suit, VIRTUAL_ID};
pub use card_type::{CardCategory, CardType};
pub use codec::{number_from_token, number_token};
pub use pattern::{Pattern, PatternKind};
