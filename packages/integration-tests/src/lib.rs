//! Integration tests of the pricecaster store, see `tests/`
