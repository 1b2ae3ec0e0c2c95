mod auth_tests;
mod graph_tests;
mod threads_tests;
