use regex::Regex;

/*
A function to get the instance name from a file path.

Example: file_path = ./benchmarks/uniform/uf20-091.cnf
            => instance_name = uf20-091.cnf

Returns the instance name.
*/
pub fn read_instance_name(file_path: &str) -> String {
    let re_get_instance = Regex::new(r"[^/\\]+$").unwrap();
    re_get_instance
        .find(file_path)
        .map(|m| m.as_str())
        .unwrap_or(file_path)
        .to_string()
}
