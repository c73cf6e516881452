pub mod board;
pub mod date_fmt;
pub mod emblem;
pub mod export;
pub mod feed;
pub mod schedule;
pub mod source;
pub mod state;
pub mod teams;
