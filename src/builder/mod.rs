/*!
Reading clauses and collections of clauses from text.

# Clauses

A clause is written as literals separated by `v`, with `~` as a prefix for negation.
Atoms are case-insensitive, and are read in lower case.

```rust
# use refute::builder::clause_from_string;
let clause = clause_from_string("~Rain v Umbrella v wet").unwrap();
assert_eq!(clause.to_string(), "~rain v umbrella v wet");

assert!(clause_from_string("").is_err());
assert!(clause_from_string("p v ~").is_err());
assert!(clause_from_string("p & q").is_err());
```

# Knowledge bases

A knowledge base is written one clause to a line.
Lines which are empty, or which begin with `#`, are ignored.
*/

mod text;
pub use text::{clause_from_string, normalise, read_clauses, ClauseLine};
