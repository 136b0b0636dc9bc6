mod common;
mod http_tests;
mod pagination_tests;
mod webhook_tests;
