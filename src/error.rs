//! Error types for the card engine core.
//!
//! Every expected failure at the registry/codec boundary is a `CoreError`
//! variant. The only condition that is allowed to panic is the candidate-pool
//! precondition of `Engine::random_generals`, which is a programming-contract
//! violation rather than bad input.

use thiserror::Error;

/// Errors surfaced by the registry and the card codec.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A card type name that is not in the registry, during instantiation
    /// or while parsing a card token.
    #[error("unknown card type `{0}`")]
    UnknownType(String),

    /// The name resolved to a registered type of the wrong kind, e.g. a
    /// skill template where a plain card was requested.
    #[error("card type `{name}` is not a {expected} type")]
    TypeMismatch {
        /// The requested type name.
        name: String,
        /// What kind of type was expected (`"plain"` or `"skill"`).
        expected: &'static str,
    },

    /// A physical card id outside the catalog range.
    #[error("no card with id {0} in the catalog")]
    NotFound(i32),

    /// Text that matches none of the three card token forms.
    #[error("`{0}` is not a valid card token")]
    Parse(String),
}
