extern crate regex;
use self::regex::Regex;

// atoi semantics: optional leading whitespace and sign, then digits;
// anything else (or overflow) reads as zero
pub fn leading_int(input: &str) -> i32 {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\s*([+-]?\d+)").unwrap();
    }

    match RE.captures(input) {
        None => 0,
        Some(c) => match c.get(1) {
            None => 0,
            Some(m) => m.as_str().parse::<i32>().unwrap_or(0),
        },
    }
}
