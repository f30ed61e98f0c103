/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The binary uses [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [resolution loop](crate::procedures::prove)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [simplification](crate::procedures::simplify)
    pub const SIMPLIFICATION: &str = "simplification";

    /// Logs related to [selection](crate::procedures::select)
    pub const SELECTION: &str = "selection";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [proof reconstruction](crate::reports::proof)
    pub const PROOF: &str = "proof";

    /// Logs related to a [knowledge base](crate::session)
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";
}
