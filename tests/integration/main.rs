//! Integration tests for memviz.


mod arg_tests;
mod config_tests;
mod process_tests;
mod system_tests;
