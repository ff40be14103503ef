use super::*;

mod initialize;
