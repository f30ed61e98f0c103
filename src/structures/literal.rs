//! Literals are atoms paired with a negation flag.
//!
//! An atom is a (lower case) name, such as `p`, `rain`, or `coffee_pot`.
//! A literal is either an atom, or the negation of an atom, written with a `~` prefix.
//!
//! ```rust
//! # use refute::structures::literal::Literal;
//! let literal = Literal::new("p", false);
//!
//! assert!(!literal.is_negated());
//! assert!(literal.negate().is_negated());
//! assert_eq!(literal.negate().negate(), literal);
//!
//! assert_eq!(literal.negate().to_string(), "~p");
//! ```
//!
//! Literals are ordered by atom and then by negation, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//! So, `p` < `~p` < `q`.

/// An atom, aka. a propositional variable.
pub type Atom = String;

/// The negation marker used when reading and writing literals.
pub const NEGATION: char = '~';

/// An atom together with a flag for whether the atom is negated.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The atom of the literal.
    atom: Atom,

    /// Whether the atom is negated.
    negated: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a negation flag.
    pub fn new(atom: impl Into<Atom>, negated: bool) -> Self {
        Literal {
            atom: atom.into(),
            negated,
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            negated: !self.negated,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &str {
        &self.atom
    }

    /// Whether the literal is negated.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether the literal is the negation of `other`.
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.negated != other.negated
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.negated {
            true => write!(f, "{NEGATION}{}", self.atom),
            false => write!(f, "{}", self.atom),
        }
    }
}
