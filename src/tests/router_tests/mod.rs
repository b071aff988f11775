mod api_tests;
mod landing_tests;
mod search_tests;
