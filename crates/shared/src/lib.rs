pub mod action;
pub mod domain;
