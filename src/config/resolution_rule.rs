use std::str::FromStr;

/// Variant rules for deriving a resolvent from a pair of clauses.
///
/// The rules agree whenever two clauses clash on exactly one atom.
/// When two clauses clash on several atoms, every classical resolvent is a tautology, while the cancelling resolvent drops each clashing atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum ResolutionRule {
    /// Resolve on the first complementary pair of literals, in order.
    Classical,

    /// Remove every complementary pair of literals in a single step.
    ///
    /// This is the default rule.
    ///
    /// Note, the result need not be entailed by the two clauses.
    /// For example, `p v q` and `~p v ~q` cancel to the empty clause, though both clauses are satisfied by making `p` true and `q` false.
    Cancelling,
}

impl ResolutionRule {
    /// The minimum ResolutionRule type.
    pub const MIN: ResolutionRule = ResolutionRule::Classical;

    /// The maximum ResolutionRule type.
    pub const MAX: ResolutionRule = ResolutionRule::Cancelling;
}

impl std::fmt::Display for ResolutionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classical => write!(f, "classical"),
            Self::Cancelling => write!(f, "cancelling"),
        }
    }
}

impl FromStr for ResolutionRule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classical" => Ok(Self::Classical),

            "cancelling" => Ok(Self::Cancelling),

            _unknown_string => Err(()),
        }
    }
}
