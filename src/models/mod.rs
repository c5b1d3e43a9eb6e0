pub mod action;
pub mod exit_code;
pub mod location;
pub mod settings;
