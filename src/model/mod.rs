//! Domain models shared by the bot handlers and the monitor services.

pub mod guild;
pub mod presence;
