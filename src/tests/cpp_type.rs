use crate::cpp_type::{CppIndirection, CppType, CppTypeShape};

#[test]
fn value_type() {
    let type1 = CppType::value("int");
    assert_eq!(type1.name(), "int");
    assert_eq!(type1.is_const(), false);
    assert_eq!(type1.is_pointer(), false);
    assert_eq!(type1.is_reference(), false);
    assert_eq!(type1.to_cpp_code(), "int");
}

#[test]
fn pointer() {
    let type1 = CppType::pointer("Node");
    assert_eq!(type1.is_pointer(), true);
    assert_eq!(type1.is_double_pointer(), false);
    assert_eq!(type1.to_cpp_code(), "Node*");
}

#[test]
fn const_reference() {
    let type1 = CppType::const_reference("Vector<String>");
    assert_eq!(type1.is_const(), true);
    assert_eq!(type1.is_reference(), true);
    assert_eq!(type1.to_cpp_code(), "const Vector<String>&");
    assert_eq!(type1.to_string(), "const Vector<String>&");
}

#[test]
fn rvalue_reference() {
    let type1 = CppType::new("String", CppIndirection::RValueReference, false);
    assert_eq!(type1.is_rvalue_reference(), true);
    assert_eq!(type1.to_cpp_code(), "String&&");
}

#[test]
fn double_pointer() {
    let type1 = CppType::new("char", CppIndirection::DoublePointer, false);
    assert_eq!(type1.is_double_pointer(), true);
    assert_eq!(type1.to_cpp_code(), "char**");
}

#[test]
fn ref_to_pointer() {
    let type1 = CppType::new("Node", CppIndirection::ReferenceToPointer, false);
    assert_eq!(type1.is_ref_to_pointer(), true);
    assert_eq!(type1.to_cpp_code(), "Node*&");
}

#[test]
fn shape_scalar() {
    assert_eq!(
        CppTypeShape::parse("String"),
        CppTypeShape::Scalar("String".to_string())
    );
}

#[test]
fn shape_string_vector() {
    assert_eq!(
        CppTypeShape::parse("Vector<String>"),
        CppTypeShape::Vector(Box::new(CppTypeShape::Scalar("String".to_string())))
    );
}

#[test]
fn shape_shared_ptr() {
    assert_eq!(
        CppTypeShape::parse("SharedPtr<Material>"),
        CppTypeShape::SharedPtr("Material".to_string())
    );
}

#[test]
fn shape_vector_of_shared_ptr() {
    assert_eq!(
        CppTypeShape::parse("Vector<SharedPtr<Node>>"),
        CppTypeShape::Vector(Box::new(CppTypeShape::SharedPtr("Node".to_string())))
    );
}

#[test]
fn shape_pod_vector() {
    assert_eq!(
        CppTypeShape::parse("PODVector<unsigned>"),
        CppTypeShape::PodVector(Box::new(CppTypeShape::Scalar("unsigned".to_string())))
    );
}

#[test]
fn shape_pod_vector_of_pointers() {
    assert_eq!(
        CppTypeShape::parse("PODVector<Drawable*>"),
        CppTypeShape::PodVector(Box::new(CppTypeShape::Pointer("Drawable".to_string())))
    );
}

#[test]
fn shape_unknown_template_is_scalar() {
    assert_eq!(
        CppTypeShape::parse("HashMap<String, Variant>"),
        CppTypeShape::Scalar("HashMap<String, Variant>".to_string())
    );
}

#[test]
fn shape_unbalanced_text_is_scalar() {
    assert_eq!(
        CppTypeShape::parse("Vector<"),
        CppTypeShape::Scalar("Vector<".to_string())
    );
}
