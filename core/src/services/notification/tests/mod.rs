mod fixtures;
mod service_tests;
