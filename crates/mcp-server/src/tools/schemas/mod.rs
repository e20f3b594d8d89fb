pub mod check_file;
pub mod clang_format;
pub mod find_symbol;
pub mod get_includes;
pub mod list_functions;
