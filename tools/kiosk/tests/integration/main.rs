mod helpers;

mod form_test;
