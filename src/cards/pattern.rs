//! Rule patterns and the card availability decision.
//!
//! A [`Pattern`] is a stateless predicate over cards. The cardinality bounds
//! and the compulsory/response flags are carried for the rule logic outside
//! this core; only [`Pattern::matches`] is interpreted here.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::error::CoreError;

/// Which card field a pattern compares its text against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    /// Compare against the card's type/display key name.
    Name,
    /// Compare against the card's category name (`basic_card`, ...).
    Type,
    /// Compare against the card's subtype name (`weapon`, ...).
    Class,
}

impl PatternKind {
    /// Resolve a pattern kind from its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NamePattern" => Some(PatternKind::Name),
            "TypePattern" => Some(PatternKind::Type),
            "ClassPattern" => Some(PatternKind::Class),
            _ => None,
        }
    }
}

/// A named predicate deciding whether a card matches a rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Pattern variant.
    pub kind: PatternKind,
    /// Text compared against the card field selected by `kind`.
    pub text: String,
    /// Minimum selection count, stored for rule logic.
    pub min: u32,
    /// Maximum selection count, stored for rule logic.
    pub max: u32,
    /// Whether the selection is compulsory, stored for rule logic.
    pub compulsory: bool,
    /// Whether this pattern is answered in response, stored for rule logic.
    pub response: bool,
}

impl Pattern {
    /// Create a pattern with a single-card selection and no flags.
    #[must_use]
    pub fn new(kind: PatternKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            min: 1,
            max: 1,
            compulsory: false,
            response: false,
        }
    }

    /// Set the selection bounds (builder pattern).
    #[must_use]
    pub fn with_counts(mut self, min: u32, max: u32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the compulsory/response flags (builder pattern).
    #[must_use]
    pub fn with_flags(mut self, compulsory: bool, response: bool) -> Self {
        self.compulsory = compulsory;
        self.response = response;
        self
    }

    /// Build a pattern from its wire parts.
    ///
    /// `flags` uses one character per flag: `c` for compulsory, `r` for
    /// response. Fails with [`CoreError::UnknownType`] when the kind name is
    /// not one of the registered pattern variants.
    pub fn from_parts(
        kind_name: &str,
        text: &str,
        min: u32,
        max: u32,
        flags: &str,
    ) -> Result<Self, CoreError> {
        let kind = PatternKind::from_name(kind_name)
            .ok_or_else(|| CoreError::UnknownType(kind_name.to_owned()))?;
        Ok(Pattern::new(kind, text)
            .with_counts(min, max)
            .with_flags(flags.contains('c'), flags.contains('r')))
    }

    /// Whether the card matches this pattern.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match self.kind {
            PatternKind::Name => card.name() == self.text,
            PatternKind::Type => card.category().as_str() == self.text,
            PatternKind::Class => card.subtype() == self.text,
        }
    }
}

impl Card {
    /// Availability decision for a card under the active pattern lists.
    ///
    /// Any matching disable pattern makes the card unavailable (checked
    /// first, short-circuits); otherwise any matching enable pattern makes
    /// it available; otherwise the card type's default flag decides.
    #[must_use]
    pub fn available(&self, disable: &[Pattern], enable: &[Pattern]) -> bool {
        if disable.iter().any(|p| p.matches(self)) {
            return false;
        }
        if enable.iter().any(|p| p.matches(self)) {
            return true;
        }
        self.card_type().available_at_play
    }
}
