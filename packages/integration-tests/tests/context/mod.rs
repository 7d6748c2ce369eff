mod pricecaster_test_context;

pub use pricecaster_test_context::*;
