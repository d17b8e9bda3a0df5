pub mod ident_tests;
pub mod merge_tests;
pub mod validate_tests;
