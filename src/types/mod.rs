pub mod date_window;
pub mod ranked;
pub mod reading;
pub mod station;
