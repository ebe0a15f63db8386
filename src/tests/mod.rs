mod cpp_type;
