// crates/linefix-cli/src/cmd/mod.rs

pub mod retab;
pub mod strconst;
