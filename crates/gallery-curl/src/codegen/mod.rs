//! Python code generation

pub mod function_codegen;
pub mod literal;

pub use function_codegen::{FunctionCodegen, FUNCTION_NAME};
