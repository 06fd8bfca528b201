pub mod example;
pub mod health;
