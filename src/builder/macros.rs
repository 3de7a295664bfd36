//! Macros for ergonomic configuration literals.

/// Build a [`Configuration`](crate::core::Configuration) from a literal
/// description, in the same shape as its JSON form.
///
/// # Example
///
/// ```
/// use rewind::fsm_config;
///
/// let config = fsm_config! {
///     initial: "off",
///     states: {
///         "off" => { "switchOn" => "on" },
///         "on" => { "switchOff" => "off" },
///         "broken" => {},
///     }
/// };
///
/// assert_eq!(config.initial(), "off");
/// assert_eq!(config.resolve("on", "switchOff"), Some("off"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let config = $crate::core::Configuration::new($initial);
        $(
            let config = config.with_state(
                $state,
                $crate::core::StateDef::new()$(.on($event, $target))*,
            );
        )*
        config
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{Configuration, StateDef};

    #[test]
    fn fsm_config_matches_hand_built_configuration() {
        let config = fsm_config! {
            initial: "off",
            states: {
                "off" => { "switchOn" => "on" },
                "on" => { "switchOff" => "off", "smash" => "broken" },
                "broken" => {},
            }
        };

        let expected = Configuration::new("off")
            .with_state("off", StateDef::new().on("switchOn", "on"))
            .with_state(
                "on",
                StateDef::new().on("switchOff", "off").on("smash", "broken"),
            )
            .with_state("broken", StateDef::new());

        assert_eq!(config, expected);
    }

    #[test]
    fn fsm_config_accepts_owned_strings() {
        let initial = String::from("idle");
        let config = fsm_config! {
            initial: initial.clone(),
            states: {
                initial => {},
            },
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn fsm_config_without_states() {
        let config = fsm_config! {
            initial: "idle",
            states: {}
        };

        assert!(config.states().is_empty());
    }
}
