pub mod availability;
pub mod calendar;
pub mod collection;
pub mod colors;
pub mod events;
pub mod filter;
pub mod hotel_config;
pub mod live;
pub mod staff;
pub mod venues;
