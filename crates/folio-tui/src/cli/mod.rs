// ABOUTME: Non-interactive subcommand implementations
// ABOUTME: agents and themes, for scripting and setup

pub mod agents;
pub mod themes;
