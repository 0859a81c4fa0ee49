//! Hex colour parsing.

use crate::error::{CoreError, CoreResult};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[a-fA-F0-9]{3}(?:[a-fA-F0-9]{3})?$").expect("hex colour pattern is valid")
});

/// A colour in blue-green-red channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bgr {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Bgr {
    pub fn to_array(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl fmt::Display for Bgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.b, self.g, self.r)
    }
}

/// Parses `#rgb` or `#rrggbb`. The short form doubles each digit.
pub fn parse_hex_color(input: &str) -> CoreResult<Bgr> {
    if !HEX_COLOR.is_match(input) {
        return Err(CoreError::InvalidHexColor(input.to_string()));
    }

    let digits = &input[1..];
    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| CoreError::InvalidHexColor(input.to_string()))
    };

    let (r, g, b) = if digits.len() == 3 {
        let doubled: Vec<String> = digits.chars().map(|c| c.to_string().repeat(2)).collect();
        (channel(&doubled[0])?, channel(&doubled[1])?, channel(&doubled[2])?)
    } else {
        (channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?)
    };

    Ok(Bgr { b, g, r })
}
