pub mod candidates;
pub mod search;
pub mod timeline;
