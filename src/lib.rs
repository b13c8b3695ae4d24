pub mod books;
pub mod catalog;
pub mod core;
pub mod ebooks;
pub mod gateway;
pub mod report;
pub mod utils;
