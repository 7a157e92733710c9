pub mod auth;
pub mod calendar;
pub mod dashboard;
pub mod event;
pub mod health;
pub mod hotel_config;
pub mod quote;
pub mod staff;
pub mod venue;
