mod parse;

pub use parse::{parse_address, parse_amount, parse_hex_bytes, parse_name};
