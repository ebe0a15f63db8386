//! Read-only model of the parsed C++ sources.

use crate::cpp_data::{CppClass, CppEnum};
use log::trace;
use serde_derive::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Lookup indices over the declarations extracted from the documentation
/// XML. Built once by the parsing stage before generation begins and
/// handed down into every translation call; never mutated afterwards.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CppDatabase {
    classes_by_name: HashMap<String, CppClass>,
    class_names_by_id: HashMap<String, String>,
    enums: HashMap<String, CppEnum>,
    usings: HashSet<String>,
    /// Header file -> preprocessor symbol required to compile it.
    header_defines: HashMap<String, String>,
}

impl CppDatabase {
    pub fn new() -> Self {
        CppDatabase::default()
    }

    pub fn add_class(&mut self, class: CppClass) {
        trace!("registered class {}", class.name);
        self.class_names_by_id
            .insert(class.id.clone(), class.name.clone());
        self.classes_by_name.insert(class.name.clone(), class);
    }

    pub fn add_enum(&mut self, enum1: CppEnum) {
        trace!("registered enum {}", enum1.name);
        self.enums.insert(enum1.name.clone(), enum1);
    }

    /// Records a `using` type alias name.
    pub fn add_using(&mut self, name: impl Into<String>) {
        self.usings.insert(name.into());
    }

    pub fn set_header_define(&mut self, header_file: impl Into<String>, define: impl Into<String>) {
        self.header_defines.insert(header_file.into(), define.into());
    }

    pub fn find_class_by_name(&self, name: &str) -> Option<&CppClass> {
        self.classes_by_name.get(name)
    }

    pub fn find_class_by_id(&self, id: &str) -> Option<&CppClass> {
        let name = self.class_names_by_id.get(id)?;
        self.classes_by_name.get(name)
    }

    pub fn find_enum(&self, name: &str) -> Option<&CppEnum> {
        self.enums.get(name)
    }

    pub fn is_using(&self, name: &str) -> bool {
        self.usings.contains(name)
    }

    /// Returns the preprocessor symbol a header is compiled under, if
    /// any. Wrappers for declarations from such headers are guarded with
    /// `#ifdef`.
    pub fn inside_define(&self, header_file: &str) -> Option<&str> {
        self.header_defines.get(header_file).map(String::as_str)
    }
}
