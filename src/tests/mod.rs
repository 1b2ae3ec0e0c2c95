mod http_tests;
mod utils;
