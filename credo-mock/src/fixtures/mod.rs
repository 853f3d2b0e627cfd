pub mod events;
pub mod fundamentals;
pub mod issuers;
pub mod news;
pub mod score;
