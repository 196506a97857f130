// Shared test fixture for the ConfirmPresence command.

use crate::modules::attendees::use_cases::confirm_presence::command::ConfirmPresence;

pub struct ConfirmPresenceBuilder {
    inner: ConfirmPresence,
}

impl Default for ConfirmPresenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ConfirmPresenceBuilder {
    pub fn new() -> Self {
        Self {
            inner: ConfirmPresence {
                names: vec!["Ana".to_string(), "Beto".to_string()],
            },
        }
    }

    pub fn names(mut self, v: Vec<String>) -> Self {
        self.inner.names = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.names.push(v.into());
        self
    }

    pub fn build(self) -> ConfirmPresence {
        self.inner
    }
}

#[cfg(test)]
mod confirm_presence_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = ConfirmPresenceBuilder::default().build();
        assert_eq!(built.names, vec!["Ana", "Beto"]);
    }

    #[rstest]
    fn setters_override_and_extend_the_batch() {
        let built = ConfirmPresenceBuilder::new()
            .names(vec!["Carla".into()])
            .name("Dani")
            .build();
        assert_eq!(built.names, vec!["Carla", "Dani"]);
    }
}
