//! Types for handling information about parsed C++ library APIs.
//!
//! These records are read-only views built by the documentation parsing
//! stage. The translator and generators only query them.

use crate::cpp_type::CppType;
use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

/// A C++ class declaration.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CppClass {
    pub name: String,
    /// Identifier assigned by the documentation tool.
    pub id: String,
    /// True if the class lifetime is managed by a shared ownership
    /// counter, making it safe to expose through non-owning handles.
    pub is_ref_counted: bool,
    /// Classes marked internal are never bound.
    pub is_internal: bool,
    /// Free-text documentation comment, scanned for binding markers.
    pub comment: String,
    pub header_file: String,
}

impl CppClass {
    /// Checks for a binding marker such as `NO_BIND` or `FAKE_REF` in the
    /// documentation comment.
    pub fn has_mark(&self, mark: &str) -> bool {
        self.comment.contains(mark)
    }
}

/// A C++ enum declaration.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CppEnum {
    pub name: String,
    pub header_file: String,
}

/// A function parameter: declared name, type and optional default value
/// spelling.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CppParam {
    pub name: String,
    pub param_type: CppType,
    pub default_value: Option<String>,
}

impl CppParam {
    pub fn new(name: impl Into<String>, param_type: CppType) -> Self {
        CppParam {
            name: name.into(),
            param_type,
            default_value: None,
        }
    }

    pub fn with_default(
        name: impl Into<String>,
        param_type: CppType,
        default_value: impl Into<String>,
    ) -> Self {
        CppParam {
            name: name.into(),
            param_type,
            default_value: Some(default_value.into()),
        }
    }
}

/// Substitution of a template parameter with a concrete type spelling,
/// used when a member of a template class is bound for a specific
/// instantiation.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CppTemplateSubstitution {
    pub parameter: String,
    pub actual: String,
}

/// A free function at namespace scope.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CppGlobalFunction {
    pub name: String,
    pub return_type: CppType,
    pub params: Vec<CppParam>,
    /// Source location, e.g. `Math/MathDefs.h:120`.
    pub location: String,
    pub header_file: String,
    pub specialization: Vec<CppTemplateSubstitution>,
}

/// A static member function.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CppStaticMethod {
    pub class_name: String,
    pub name: String,
    pub return_type: CppType,
    pub params: Vec<CppParam>,
    pub location: String,
    pub header_file: String,
    pub specialization: Vec<CppTemplateSubstitution>,
}

/// An instance member function. `header_file` is the declaring class's
/// header.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CppMethod {
    pub class_name: String,
    pub name: String,
    pub is_const: bool,
    pub return_type: CppType,
    pub params: Vec<CppParam>,
    pub location: String,
    pub header_file: String,
    pub specialization: Vec<CppTemplateSubstitution>,
}

/// Joins the printable parameter type spellings with `", "`, applying the
/// function's template specialization to each spelling. Used in
/// registration expressions to disambiguate overloads.
pub fn join_param_types(params: &[CppParam], specialization: &[CppTemplateSubstitution]) -> String {
    params
        .iter()
        .map(|param| {
            let mut text = param.param_type.to_cpp_code();
            for substitution in specialization {
                text = replace_identifier(&text, &substitution.parameter, &substitution.actual);
            }
            text
        })
        .join(", ")
}

/// Replaces whole-identifier occurrences of `from` with `to`.
fn replace_identifier(text: &str, from: &str, to: &str) -> String {
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(position) = rest.find(from) {
        result.push_str(&rest[..position]);
        rest = &rest[position..];
        let after = &rest[from.len()..];
        if !result.ends_with(is_word) && !after.starts_with(is_word) {
            result.push_str(to);
        } else {
            result.push_str(from);
        }
        rest = after;
    }
    result.push_str(rest);
    result
}
