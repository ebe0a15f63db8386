//! Synthesis of C++ wrapper functions and AngelScript registration
//! expressions.
//!
//! A wrapper adapts one C++ function to the marshaling conventions of
//! the script boundary: it takes the converted parameter types, runs the
//! conversion glue, performs the original call and converts the result
//! back. The registration expression is the `asFUNCTIONPR` /
//! `asMETHODPR` text passed to the engine's registration API, spelled
//! out to disambiguate overloads.

use crate::as_types::ConvertedVariable;
use crate::cpp_data::{
    join_param_types, CppGlobalFunction, CppMethod, CppParam, CppStaticMethod,
};
use crate::cpp_type::CppType;
use crate::database::CppDatabase;
use itertools::Itertools;

/// Name suffix encoding the parameter types, so overloads get distinct
/// wrapper names.
fn wrapper_name(function_name: &str, params: &[CppParam]) -> String {
    let mut result = function_name.to_string();
    if params.is_empty() {
        result += "_void";
    } else {
        for param in params {
            let type_text = param
                .param_type
                .name()
                .replace(' ', "")
                .replace("::", "")
                .replace('<', "")
                .replace('>', "")
                .replace('*', "");
            result += &format!("_{}", type_text);
        }
    }
    result
}

pub fn global_function_wrapper_name(function: &CppGlobalFunction) -> String {
    wrapper_name(&function.name, &function.params)
}

pub fn static_method_wrapper_name(method: &CppStaticMethod) -> String {
    format!(
        "{}_{}",
        method.class_name,
        wrapper_name(&method.name, &method.params)
    )
}

pub fn method_wrapper_name(method: &CppMethod, template_version: bool) -> String {
    let result = format!(
        "{}_{}",
        method.class_name,
        wrapper_name(&method.name, &method.params)
    );
    if template_version {
        result + "_template"
    } else {
        result
    }
}

/// Emits the full source text of one wrapper function.
///
/// `call_target` is the text in front of the call's parentheses
/// (`Clamp`, `Foo::Bar` or `ptr->GetName`); `leading_param` is the
/// instance pointer parameter of member wrappers.
#[allow(clippy::too_many_arguments)]
fn generate_wrapper_text(
    define: Option<&str>,
    location: &str,
    name: &str,
    return_type: &CppType,
    call_target: &str,
    leading_param: Option<String>,
    params: &[CppParam],
    converted_params: &[ConvertedVariable],
    converted_return: &ConvertedVariable,
) -> String {
    let glue_return_type = if converted_return.new_cpp_declaration.is_empty() {
        return_type.to_cpp_code()
    } else {
        converted_return.new_cpp_declaration.clone()
    };

    let param_decls = leading_param
        .into_iter()
        .chain(
            params
                .iter()
                .zip(converted_params)
                .map(|(param, converted)| {
                    if converted.new_cpp_declaration.is_empty() {
                        format!("{} {}", param.param_type.to_cpp_code(), param.name)
                    } else {
                        converted.new_cpp_declaration.clone()
                    }
                }),
        )
        .join(", ");

    let mut result = String::new();

    if let Some(define) = define {
        result += &format!("#ifdef {}\n", define);
    }

    result += &format!("// {}\n", location);
    result += &format!(
        "static {} {}({})\n{{\n",
        glue_return_type, name, param_decls
    );

    for converted in converted_params {
        result += &converted.glue;
    }

    if glue_return_type != "void" {
        result += &format!("    {} result = ", return_type.to_cpp_code());
    } else {
        result += "    ";
    }

    result += &format!(
        "{}({});\n",
        call_target,
        params.iter().map(|param| param.name.as_str()).join(", ")
    );

    if !converted_return.glue.is_empty() {
        result += &format!("    {}", converted_return.glue);
    } else if glue_return_type != "void" {
        result += "    return result;\n";
    }

    result += "}\n";

    if define.is_some() {
        result += "#endif\n";
    }

    result += "\n";
    result
}

pub fn generate_global_function_wrapper(
    db: &CppDatabase,
    function: &CppGlobalFunction,
    converted_params: &[ConvertedVariable],
    converted_return: &ConvertedVariable,
) -> String {
    generate_wrapper_text(
        db.inside_define(&function.header_file),
        &function.location,
        &global_function_wrapper_name(function),
        &function.return_type,
        &function.name,
        None,
        &function.params,
        converted_params,
        converted_return,
    )
}

pub fn generate_static_method_wrapper(
    db: &CppDatabase,
    method: &CppStaticMethod,
    converted_params: &[ConvertedVariable],
    converted_return: &ConvertedVariable,
) -> String {
    generate_wrapper_text(
        db.inside_define(&method.header_file),
        &method.location,
        &static_method_wrapper_name(method),
        &method.return_type,
        &format!("{}::{}", method.class_name, method.name),
        None,
        &method.params,
        converted_params,
        converted_return,
    )
}

/// In template mode only the synthesized function's name changes; the
/// body is shared across the class template's instantiations.
pub fn generate_method_wrapper(
    db: &CppDatabase,
    method: &CppMethod,
    template_version: bool,
    converted_params: &[ConvertedVariable],
    converted_return: &ConvertedVariable,
) -> String {
    generate_wrapper_text(
        db.inside_define(&method.header_file),
        &method.location,
        &method_wrapper_name(method, template_version),
        &method.return_type,
        &format!("ptr->{}", method.name),
        Some(format!("{}* ptr", method.class_name)),
        &method.params,
        converted_params,
        converted_return,
    )
}

pub fn generate_as_function_pr(function: &CppGlobalFunction) -> String {
    format!(
        "asFUNCTIONPR({}, ({}), {})",
        function.name,
        join_param_types(&function.params, &function.specialization),
        function.return_type.to_cpp_code()
    )
}

pub fn generate_static_as_function_pr(method: &CppStaticMethod) -> String {
    format!(
        "asFUNCTIONPR({}::{}, ({}), {})",
        method.class_name,
        method.name,
        join_param_types(&method.params, &method.specialization),
        method.return_type.to_cpp_code()
    )
}

/// In template mode the class name is replaced with the placeholder `T`
/// expected by the shared registration template.
pub fn generate_as_method_pr(method: &CppMethod, template_version: bool) -> String {
    let mut cpp_params = join_param_types(&method.params, &method.specialization);
    cpp_params = format!("({})", cpp_params);
    if method.is_const {
        cpp_params += " const";
    }
    format!(
        "asMETHODPR({}, {}, {}, {})",
        if template_version {
            "T"
        } else {
            method.class_name.as_str()
        },
        method.name,
        cpp_params,
        method.return_type.to_cpp_code()
    )
}
