// Domain modules

pub mod chat;
