pub mod clear;
pub mod export;
pub mod rank;
pub mod remove;
pub mod show;
pub mod submit;
