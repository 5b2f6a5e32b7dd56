pub mod care_request;
