//! Generator core that turns parsed C++ signatures into AngelScript
//! bindings: the script-visible declaration for each function, the C++
//! wrapper ("trampoline") adapting the call to the script engine's
//! marshaling conventions, and the registration expression passed to the
//! engine's function registration API.
//!
//! The XML documentation parser, the output file writer and the
//! per-function driver loop live outside this crate; they hand in a
//! read-only [`database::CppDatabase`] and consume the generated text.

pub mod as_code_generator;
pub mod as_types;
pub mod cpp_data;
pub mod cpp_type;
pub mod database;
pub mod errors;

#[cfg(test)]
mod tests;
