//! Translation of C++ types and values to their AngelScript
//! counterparts.
//!
//! The central entry point is [`convert_variable`]: an ordered cascade of
//! shape rules, first match wins. Everything the cascade does not
//! recognize is rejected rather than guessed; the driver is expected to
//! skip the affected function and continue.

use crate::cpp_type::{CppType, CppTypeShape};
use crate::database::CppDatabase;
use crate::errors::{bail, Result};
use log::trace;

/// AngelScript spelling for a C++ primitive type.
///
/// Returns `None` for anything outside the fixed table; pointer,
/// reference and template forms are never primitives and must be
/// stripped by the caller. No case folding, no aliasing beyond the
/// literal table.
pub fn as_primitive_type(cpp_type: &str) -> Option<&'static str> {
    Some(match cpp_type {
        "bool" => "bool",
        "char" | "signed char" => "int8",
        "unsigned char" => "uint8",
        "short" => "int16",
        "unsigned short" => "uint16",
        "int" => "int",
        "unsigned" | "unsigned int" => "uint",
        "long long" => "int64",
        "unsigned long long" => "uint64",
        "float" => "float",
        "double" => "double",
        // Registered by the manual bindings module.
        "long" => "long",
        "unsigned long" => "ulong",
        "size_t" => "size_t",
        "SDL_JoystickID" => "SDL_JoystickID",
        _ => return None,
    })
}

/// Scalar names accepted at the script boundary in addition to declared
/// classes and enums. `VariantMap` is a legacy alias registered manually.
const KNOWN_SCALAR_TYPES: &[&str] = &[
    "void",
    "bool",
    "size_t",
    "char",
    "signed char",
    "unsigned char",
    "short",
    "unsigned short",
    "int",
    "long",
    "unsigned",
    "unsigned int",
    "unsigned long",
    "long long",
    "unsigned long long",
    "float",
    "double",
    "SDL_JoystickID",
    "VariantMap",
];

/// Closed-world test: a name the generator has never heard of is
/// presumed unbindable.
pub fn is_known_cpp_type(db: &CppDatabase, name: &str) -> bool {
    if KNOWN_SCALAR_TYPES.contains(&name) {
        return true;
    }
    if db.find_class_by_name(name).is_some() {
        return true;
    }
    if db.find_enum(name).is_some() {
        return true;
    }
    // Flag enums follow a naming convention and are registered manually.
    name.ends_with("Flags")
}

/// Types whose ownership model can not be marshaled automatically and
/// which are bound manually instead.
// TODO: detect this from the class records instead of hardcoding.
const MANUAL_OWNERSHIP_TYPES: &[&str] = &["WorkItem"];

/// Context of usage for a translated variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableUsage {
    FunctionParameter,
    FunctionReturn,
}

/// Result of translating one parameter or return value.
///
/// A default-constructed value means the C++ type crosses the script
/// boundary unchanged. When the boundary needs a different C++ type,
/// `new_cpp_declaration` holds the replacement wrapper declaration and
/// `glue` holds complete, newline-terminated statements converting
/// between the two, ready for verbatim insertion into the wrapper body.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ConvertedVariable {
    /// Declaration as it appears in the AngelScript signature.
    pub as_declaration: String,
    /// Replacement C++ declaration for the wrapper signature, if any.
    pub new_cpp_declaration: String,
    /// Conversion statements inserted into the wrapper body.
    pub glue: String,
}

/// Rewrites a C++ literal or constant expression into AngelScript
/// syntax. Unknown expressions pass through unchanged.
pub fn cpp_value_to_as(cpp_value: &str) -> String {
    match cpp_value {
        "nullptr" => "null".to_string(),
        "Variant::emptyVariantMap" => "VariantMap()".to_string(),
        "NPOS" => "String::NPOS".to_string(),
        _ => cpp_value.to_string(),
    }
}

/// Translated default value, with quotes escaped for embedding into a
/// declaration string.
fn as_default_value(cpp_value: &str) -> String {
    cpp_value_to_as(cpp_value).replace('"', "\\\"")
}

fn as_subtype_name(cpp_subtype: &str) -> &str {
    as_primitive_type(cpp_subtype).unwrap_or(cpp_subtype)
}

/// Translates one C++ variable (a parameter or a return value) to its
/// AngelScript-visible declaration plus any wrapper glue it needs.
/// The variable name may be empty for a function return value.
pub fn convert_variable(
    db: &CppDatabase,
    var_type: &CppType,
    name: &str,
    usage: VariableUsage,
    default_value: Option<&str>,
) -> Result<ConvertedVariable> {
    use self::VariableUsage::{FunctionParameter, FunctionReturn};

    trace!("converting \"{}\" ({:?})", var_type, usage);

    let mut result = ConvertedVariable::default();

    if var_type.is_rvalue_reference() || var_type.is_double_pointer() || var_type.is_ref_to_pointer()
    {
        bail!("type \"{}\" can not be automatically bound", var_type);
    }

    let cpp_type_name = var_type.name();
    let shape = CppTypeShape::parse(cpp_type_name);

    if cpp_type_name == "void" && !var_type.is_pointer() && usage == FunctionReturn {
        result.as_declaration = "void".to_string();
        return Ok(result);
    }

    // Works for both `Vector<String>` and `Vector<String>&`.
    if is_string_vector(&shape, cpp_type_name) && !var_type.is_pointer() && usage == FunctionReturn
    {
        result.as_declaration = "Array<String>@".to_string();
        result.new_cpp_declaration = "CScriptArray*".to_string();
        result.glue = "return VectorToArray<String>(result, \"Array<String>\");\n".to_string();
        return Ok(result);
    }

    if let CppTypeShape::SharedPtr(cpp_subtype) = &shape {
        if usage == FunctionReturn {
            if MANUAL_OWNERSHIP_TYPES.contains(&cpp_subtype.as_str()) {
                bail!(
                    "type \"{}\" is excluded because its ownership can not be transferred automatically",
                    var_type
                );
            }
            let as_subtype = as_subtype_name(cpp_subtype);
            result.as_declaration = format!("{}@+", as_subtype);
            result.new_cpp_declaration = format!("{}*", cpp_subtype);
            result.glue = "return result.Detach();\n".to_string();
            return Ok(result);
        }
    }

    if let CppTypeShape::Vector(element) = &shape {
        if let CppTypeShape::SharedPtr(cpp_subtype) = &**element {
            if usage == FunctionReturn {
                let as_subtype = as_subtype_name(cpp_subtype);
                result.as_declaration = format!("Array<{}@>@", as_subtype);
                result.new_cpp_declaration = "CScriptArray*".to_string();
                result.glue = format!(
                    "return VectorToHandleArray(result, \"Array<{}@>\");\n",
                    as_subtype
                );
                return Ok(result);
            }
        }
    }

    if let CppTypeShape::PodVector(element) = &shape {
        if let CppTypeShape::Pointer(cpp_subtype) = &**element {
            if usage == FunctionReturn {
                let as_subtype = as_subtype_name(cpp_subtype);
                result.as_declaration = format!("Array<{}@>@", as_subtype);
                result.new_cpp_declaration = "CScriptArray*".to_string();
                result.glue = format!(
                    "return VectorToHandleArray(result, \"Array<{}@>\");\n",
                    as_subtype
                );
                return Ok(result);
            }
        }
        if let CppTypeShape::Scalar(cpp_subtype) = &**element {
            if var_type.is_const() == var_type.is_reference() && usage == FunctionReturn {
                let as_subtype = as_subtype_name(cpp_subtype);
                result.as_declaration = format!("Array<{}>@", as_subtype);
                result.new_cpp_declaration = "CScriptArray*".to_string();
                result.glue = format!("return VectorToArray(result, \"Array<{}>\");\n", as_subtype);
                return Ok(result);
            }
        }
    }

    if cpp_type_name == "Context" && usage == FunctionParameter {
        bail!("Context can only be used as the first parameter of a constructor");
    }

    if is_string_vector(&shape, cpp_type_name)
        && var_type.is_const()
        && var_type.is_reference()
        && usage == FunctionParameter
    {
        let new_cpp_var_name = format!("{}_conv", name);
        result.as_declaration = "Array<String>@+".to_string();
        result.new_cpp_declaration = format!("CScriptArray* {}", new_cpp_var_name);
        result.glue = format!(
            "    {} {} = ArrayToVector<String>({});\n",
            cpp_type_name, name, new_cpp_var_name
        );
        if let Some(default_value) = default_value {
            // Only the default-constructed vector has a script
            // equivalent here.
            if default_value != "Vector< String >()" {
                bail!(
                    "default value \"{}\" is not supported yet for string vector parameters",
                    default_value
                );
            }
            result.as_declaration += " = null";
        }
        return Ok(result);
    }

    if let CppTypeShape::PodVector(element) = &shape {
        if let CppTypeShape::Scalar(cpp_subtype) = &**element {
            if var_type.is_const() && var_type.is_reference() && usage == FunctionParameter {
                if let Some(default_value) = default_value {
                    bail!(
                        "default value \"{}\" is not supported yet for POD vector parameters",
                        default_value
                    );
                }
                let as_subtype = as_subtype_name(cpp_subtype);
                let new_cpp_var_name = format!("{}_conv", name);
                result.as_declaration = format!("Array<{}>@+", as_subtype);
                result.new_cpp_declaration = format!("CScriptArray* {}", new_cpp_var_name);
                result.glue = format!(
                    "    {} {} = ArrayToPODVector<{}>({});\n",
                    cpp_type_name, name, cpp_subtype, new_cpp_var_name
                );
                return Ok(result);
            }
        }
        if let CppTypeShape::Pointer(cpp_subtype) = &**element {
            if var_type.is_const() && var_type.is_reference() && usage == FunctionParameter {
                if let Some(default_value) = default_value {
                    bail!(
                        "default value \"{}\" is not supported yet for POD vector parameters",
                        default_value
                    );
                }
                let as_subtype = as_subtype_name(cpp_subtype);
                let new_cpp_var_name = format!("{}_conv", name);
                result.as_declaration = format!("Array<{}@>@", as_subtype);
                result.new_cpp_declaration = format!("CScriptArray* {}", new_cpp_var_name);
                result.glue = format!(
                    "    {} {} = ArrayToPODVector<{}*>({});\n",
                    cpp_type_name, name, cpp_subtype, new_cpp_var_name
                );
                return Ok(result);
            }
        }
    }

    if let CppTypeShape::Vector(element) = &shape {
        if let CppTypeShape::SharedPtr(cpp_subtype) = &**element {
            if var_type.is_const() && var_type.is_reference() && usage == FunctionParameter {
                if MANUAL_OWNERSHIP_TYPES.contains(&cpp_subtype.as_str()) {
                    bail!(
                        "type \"{}\" is excluded because its ownership can not be transferred automatically",
                        var_type
                    );
                }
                if let Some(default_value) = default_value {
                    bail!(
                        "default value \"{}\" is not supported yet for handle vector parameters",
                        default_value
                    );
                }
                let as_subtype = as_subtype_name(cpp_subtype);
                let new_cpp_var_name = format!("{}_conv", name);
                result.as_declaration = format!("Array<{}@>@+", as_subtype);
                result.new_cpp_declaration = format!("CScriptArray* {}", new_cpp_var_name);
                result.glue = format!(
                    "    {} {} = HandleArrayToVector<{}>({});\n",
                    cpp_type_name, name, cpp_subtype, new_cpp_var_name
                );
                return Ok(result);
            }
        }
    }

    if cpp_type_name == "Context" && usage == FunctionReturn {
        bail!("type \"{}\" can not be returned", var_type);
    }

    result.as_declaration = scalar_type_to_as(db, var_type, usage)?;

    if let Some(default_value) = default_value {
        result.as_declaration += &format!(" = {}", as_default_value(default_value));
    }

    Ok(result)
}

/// Translates a C++ type without container or smart pointer structure.
/// Shared between [`convert_variable`]'s fallback and [`cpp_type_to_as`].
fn scalar_type_to_as(db: &CppDatabase, var_type: &CppType, usage: VariableUsage) -> Result<String> {
    use self::VariableUsage::{FunctionParameter, FunctionReturn};

    let cpp_type_name = var_type.name();

    if !is_known_cpp_type(db, cpp_type_name) {
        bail!("type \"{}\" can not be automatically bound", var_type);
    }

    let class = db.find_class_by_name(cpp_type_name);
    if let Some(class) = class {
        if class.is_internal {
            bail!(
                "type \"{}\" can not be automatically bound because it is internal",
                var_type
            );
        }
        if class.has_mark("NO_BIND") {
            bail!(
                "type \"{}\" can not be automatically bound because of its @nobind mark",
                cpp_type_name
            );
        }
    }

    // A `using` alias hides the underlying type from the registry;
    // `VariantMap` is registered manually and allowed through.
    if db.is_using(cpp_type_name) && cpp_type_name != "VariantMap" {
        bail!("using \"{}\" can not be automatically bound", cpp_type_name);
    }

    let as_type_name = as_primitive_type(cpp_type_name).unwrap_or(cpp_type_name);

    if as_type_name == "void" && var_type.is_pointer() {
        bail!("type \"void*\" can not be automatically bound");
    }

    if as_type_name.contains('<') {
        bail!("type \"{}\" can not be automatically bound", var_type);
    }

    if var_type.to_cpp_code().contains("::") {
        bail!(
            "type \"{}\" can not be automatically bound because it is scope-qualified",
            var_type
        );
    }

    if var_type.is_const() && var_type.is_reference() && usage == FunctionParameter {
        return Ok(format!("const {}&in", as_type_name));
    }

    let mut result = as_type_name.to_string();

    if var_type.is_reference() {
        result.push('&');
    } else if var_type.is_pointer() {
        let can_be_handle =
            class.map_or(false, |class| class.is_ref_counted || class.has_mark("FAKE_REF"));
        if !can_be_handle {
            bail!("type \"{}\" can not be automatically bound", var_type);
        }
        result.push_str("@+");
    }

    if usage == FunctionReturn && var_type.is_const() && !var_type.is_pointer() {
        result = format!("const {}", result);
    }

    Ok(result)
}

/// Translates a C++ type to its AngelScript declaration without glue.
/// Used for variables and property accessors, where the container
/// rewrites of [`convert_variable`] do not apply.
pub fn cpp_type_to_as(db: &CppDatabase, var_type: &CppType, usage: VariableUsage) -> Result<String> {
    if var_type.is_rvalue_reference() || var_type.is_double_pointer() || var_type.is_ref_to_pointer()
    {
        bail!("type \"{}\" can not be automatically bound", var_type);
    }

    if var_type.name() == "Context" && usage == VariableUsage::FunctionReturn {
        bail!("type \"{}\" can not be returned", var_type);
    }

    scalar_type_to_as(db, var_type, usage)
}

fn is_string_vector(shape: &CppTypeShape, cpp_type_name: &str) -> bool {
    if cpp_type_name == "StringVector" {
        return true;
    }
    if let CppTypeShape::Vector(element) = shape {
        if let CppTypeShape::Scalar(name) = &**element {
            return name == "String";
        }
    }
    false
}
