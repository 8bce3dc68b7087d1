pub mod lenient_json;
