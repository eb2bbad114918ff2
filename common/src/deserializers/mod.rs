pub mod json_from_string;
