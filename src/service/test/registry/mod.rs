use super::*;

mod add_guild;
