pub mod chat;
pub mod pages;
