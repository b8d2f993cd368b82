mod logging;

pub use logging::{DEFAULT_TEST_DIRECTIVES, init_test_logging};
