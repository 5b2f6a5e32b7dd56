
mod care_request_test;
mod config_test;
