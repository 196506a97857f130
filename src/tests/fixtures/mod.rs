pub mod commands {
    pub mod confirm_presence;
}
