/*!
Configuration of a context.

All configuration for a proof attempt is contained within a [Config], and a context holds its own copy of the configuration it was made from.

```rust
# use refute::config::{Config, ResolutionRule};
let mut config = Config::default();
assert_eq!(config.resolution_rule.value, ResolutionRule::Cancelling);

assert!(config.resolution_rule.set(ResolutionRule::Classical));

assert!(config.step_limit.set(1_000));
assert_eq!(config.step_limit.value, 1_000);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod resolution_rule;
pub use resolution_rule::ResolutionRule;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which rule to use when deriving a resolvent, cancelling every complementary pair by default.
    pub resolution_rule: ConfigOption<ResolutionRule>,

    /// The maximum number of iterations of the resolution loop, with 0 for no limit.
    pub step_limit: ConfigOption<usize>,

    /// The time limit for a proof attempt, with 0 for no limit.
    pub time_limit: ConfigOption<std::time::Duration>,
}

impl Default for Config {
    /// The default context places no limit on a proof attempt, and so an attempt ends only on refutation or on exhausting the (finite) space of clauses.
    fn default() -> Self {
        Config {
            resolution_rule: ConfigOption {
                name: "resolution_rule",
                min: ResolutionRule::MIN,
                max: ResolutionRule::MAX,
                value: ResolutionRule::Cancelling,
            },

            step_limit: ConfigOption {
                name: "step_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                value: std::time::Duration::from_secs(0),
            },
        }
    }
}
