//! Types for handling information about C++ types.

use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Indirection applied to a type's base name in a declaration.
/// The forms are mutually exclusive; deeper combinations than the ones
/// listed here never survive the translator anyway.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum CppIndirection {
    None,
    Pointer,
    DoublePointer,
    Reference,
    RValueReference,
    ReferenceToPointer,
}

/// View of a C++ type expression as it appears in a function signature:
/// the base name with template arguments spelled out literally
/// (e.g. `Vector<SharedPtr<Node>>`), plus indirection and constness.
///
/// Produced by the documentation parsing stage; never mutated here.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct CppType {
    name: String,
    indirection: CppIndirection,
    is_const: bool,
}

impl CppType {
    pub fn new(name: impl Into<String>, indirection: CppIndirection, is_const: bool) -> Self {
        CppType {
            name: name.into(),
            indirection,
            is_const,
        }
    }

    /// A plain value type without indirection or constness.
    pub fn value(name: impl Into<String>) -> Self {
        CppType::new(name, CppIndirection::None, false)
    }

    pub fn pointer(name: impl Into<String>) -> Self {
        CppType::new(name, CppIndirection::Pointer, false)
    }

    pub fn const_reference(name: impl Into<String>) -> Self {
        CppType::new(name, CppIndirection::Reference, true)
    }

    /// Base name including template arguments, without indirection or
    /// constness.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_const(&self) -> bool {
        self.is_const
    }

    pub fn is_pointer(&self) -> bool {
        self.indirection == CppIndirection::Pointer
    }

    pub fn is_double_pointer(&self) -> bool {
        self.indirection == CppIndirection::DoublePointer
    }

    pub fn is_reference(&self) -> bool {
        self.indirection == CppIndirection::Reference
    }

    pub fn is_rvalue_reference(&self) -> bool {
        self.indirection == CppIndirection::RValueReference
    }

    pub fn is_ref_to_pointer(&self) -> bool {
        self.indirection == CppIndirection::ReferenceToPointer
    }

    /// Returns C++ code representing this type.
    pub fn to_cpp_code(&self) -> String {
        let suffix = match self.indirection {
            CppIndirection::None => "",
            CppIndirection::Pointer => "*",
            CppIndirection::DoublePointer => "**",
            CppIndirection::Reference => "&",
            CppIndirection::RValueReference => "&&",
            CppIndirection::ReferenceToPointer => "*&",
        };
        format!(
            "{}{}{}",
            if self.is_const { "const " } else { "" },
            self.name,
            suffix
        )
    }
}

impl fmt::Display for CppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cpp_code())
    }
}

/// Structural view of a template type spelling. Only the container and
/// smart pointer forms the translator knows how to marshal are
/// recognized; any other spelling, including unknown templates, parses
/// as `Scalar` with the full text, so it falls through to the scalar
/// cascade and fails classification there.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CppTypeShape {
    /// A name without recognized template structure.
    Scalar(String),
    /// `T*` as a template argument.
    Pointer(String),
    /// `SharedPtr<T>`.
    SharedPtr(String),
    /// `Vector<T>`.
    Vector(Box<CppTypeShape>),
    /// `PODVector<T>` or `PODVector<T*>`.
    PodVector(Box<CppTypeShape>),
}

impl CppTypeShape {
    pub fn parse(name: &str) -> CppTypeShape {
        Self::parse_inner(name).unwrap_or_else(|| CppTypeShape::Scalar(name.to_string()))
    }

    fn parse_inner(name: &str) -> Option<CppTypeShape> {
        let (outer, inner) = split_template(name)?;
        match outer {
            "SharedPtr" => {
                if is_identifier(inner) {
                    Some(CppTypeShape::SharedPtr(inner.to_string()))
                } else {
                    None
                }
            }
            "Vector" => {
                let element = Self::parse_element(inner)?;
                match element {
                    // `Vector<T*>` has no marshaling rule.
                    CppTypeShape::Pointer(_) => None,
                    _ => Some(CppTypeShape::Vector(Box::new(element))),
                }
            }
            "PODVector" => {
                let element = Self::parse_element(inner)?;
                match element {
                    CppTypeShape::Scalar(_) | CppTypeShape::Pointer(_) => {
                        Some(CppTypeShape::PodVector(Box::new(element)))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn parse_element(text: &str) -> Option<CppTypeShape> {
        if let Some(stripped) = text.strip_suffix('*') {
            if is_identifier(stripped) {
                return Some(CppTypeShape::Pointer(stripped.to_string()));
            }
            return None;
        }
        if is_identifier(text) {
            return Some(CppTypeShape::Scalar(text.to_string()));
        }
        Self::parse_inner(text)
    }
}

/// Splits `Outer<Inner>` into `("Outer", "Inner")`. The inner text keeps
/// any nested template arguments.
fn split_template(name: &str) -> Option<(&str, &str)> {
    if !name.ends_with('>') {
        return None;
    }
    let open = name.find('<')?;
    let outer = &name[..open];
    let inner = &name[open + 1..name.len() - 1];
    if outer.is_empty() || inner.is_empty() || !is_identifier(outer) {
        return None;
    }
    Some((outer, inner))
}

fn is_identifier(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
