mod details_tests;
mod home_tests;
mod listings_tests;
