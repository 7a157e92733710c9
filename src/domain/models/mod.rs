pub mod auth;
pub mod event;
pub mod hotel_config;
pub mod session;
pub mod staff;
pub mod venue;
