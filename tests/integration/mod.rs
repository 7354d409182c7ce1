mod cli_test;
mod extract_test;
