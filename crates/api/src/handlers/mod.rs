pub mod health;
pub mod history;
pub mod records;
pub mod reports;
pub mod search;

pub use health::health_check;
