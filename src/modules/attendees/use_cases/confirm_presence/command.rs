/// A single submission: one or more candidate guest names to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPresence {
    pub names: Vec<String>,
}
