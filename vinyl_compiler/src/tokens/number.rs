//! Numeric literal grammars
//!
//! Literal text is cleaned before matching: digit separators (`_`) are
//! removed and letters are lowercased, so `0xBEEF_u8` and `0xbeefu8` decode
//! identically. Integer values are arbitrary precision.

use num_bigint::BigUint;
use num_traits::{Num, ToPrimitive};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;

const INTEGER_SUFFIX: &str = "(i8|u8|i16|u16|i32|u32|i64|u64|iz|uz)?";
const FLOAT_SUFFIX: &str = "(f32|f64)?";

/// Radix of an integer literal, selected by its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IntegerBase {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl IntegerBase {
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Canonical prefix when rendering a literal in this base
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Binary => "0b",
            Self::Octal => "0o",
            Self::Decimal => "",
            Self::Hexadecimal => "0x",
        }
    }
}

/// Storage type requested by an integer suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IntegerKind {
    /// No suffix; the type is decided later
    Unsized,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    ISize,
    USize,
}

impl IntegerKind {
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Self::Unsized),
            "i8" => Some(Self::I8),
            "u8" => Some(Self::U8),
            "i16" => Some(Self::I16),
            "u16" => Some(Self::U16),
            "i32" => Some(Self::I32),
            "u32" => Some(Self::U32),
            "i64" => Some(Self::I64),
            "u64" => Some(Self::U64),
            "iz" => Some(Self::ISize),
            "uz" => Some(Self::USize),
            _ => None,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Unsized => "",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::ISize => "iz",
            Self::USize => "uz",
        }
    }
}

/// Decoded integer literal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IntegerLiteral {
    #[serde(serialize_with = "serialize_decimal")]
    pub value: BigUint,
    pub base: IntegerBase,
    pub kind: IntegerKind,
}

fn serialize_decimal<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn integer_grammars() -> &'static [(IntegerBase, Regex); 4] {
    static GRAMMARS: OnceLock<[(IntegerBase, Regex); 4]> = OnceLock::new();
    GRAMMARS.get_or_init(|| {
        let grammar = |digits: &str| {
            Regex::new(&format!("^{}{}$", digits, INTEGER_SUFFIX))
                .expect("integer grammar is a valid pattern")
        };
        [
            (IntegerBase::Binary, grammar("0b([01]+)")),
            (IntegerBase::Octal, grammar("0[oc]([0-7]+)")),
            (IntegerBase::Hexadecimal, grammar("0x([0-9a-f]+)")),
            (IntegerBase::Decimal, grammar("([0-9]+)")),
        ]
    })
}

impl IntegerLiteral {
    /// Decode literal text, or `None` if it is not a valid integer literal
    pub fn parse(text: &str) -> Option<Self> {
        let cleaned = clean(text);

        integer_grammars().iter().find_map(|(base, grammar)| {
            let captures = grammar.captures(&cleaned)?;
            let digits = captures.get(1)?.as_str();
            let suffix = captures.get(2).map_or("", |m| m.as_str());

            Some(Self {
                value: BigUint::from_str_radix(digits, base.radix()).ok()?,
                base: *base,
                kind: IntegerKind::from_suffix(suffix)?,
            })
        })
    }

    /// Value as `u64` when it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.base.prefix(),
            self.value.to_str_radix(self.base.radix()),
            self.kind.suffix()
        )
    }
}

/// Storage type requested by a float suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FloatKind {
    Unsized,
    F32,
    F64,
}

impl FloatKind {
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Self::Unsized),
            "f32" => Some(Self::F32),
            "f64" => Some(Self::F64),
            _ => None,
        }
    }
}

/// Decoded floating point literal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatLiteral {
    pub value: f64,
    pub kind: FloatKind,
}

fn float_grammars() -> &'static [Regex; 2] {
    static GRAMMARS: OnceLock<[Regex; 2]> = OnceLock::new();
    GRAMMARS.get_or_init(|| {
        let grammar = |number: &str| {
            Regex::new(&format!("^({}){}$", number, FLOAT_SUFFIX))
                .expect("float grammar is a valid pattern")
        };
        [
            grammar(r"[0-9]+\.[0-9]*(?:e[+-]?[0-9]+)?"),
            grammar(r"[0-9]+e[+-]?[0-9]+"),
        ]
    })
}

impl FloatLiteral {
    /// Decode literal text, or `None` if it is not a valid float literal
    pub fn parse(text: &str) -> Option<Self> {
        let cleaned = clean(text);

        float_grammars().iter().find_map(|grammar| {
            let captures = grammar.captures(&cleaned)?;
            let number = captures.get(1)?.as_str();
            let suffix = captures.get(2).map_or("", |m| m.as_str());

            Some(Self {
                value: number.parse().ok()?,
                kind: FloatKind::from_suffix(suffix)?,
            })
        })
    }
}

fn clean(text: &str) -> String {
    text.chars()
        .filter(|&c| c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integer(text: &str) -> (u64, IntegerBase, IntegerKind) {
        let literal = IntegerLiteral::parse(text)
            .unwrap_or_else(|| panic!("{:?} should be an integer literal", text));
        (literal.to_u64().unwrap(), literal.base, literal.kind)
    }

    #[test]
    fn test_integer_bases() {
        assert_eq!(integer("1"), (1, IntegerBase::Decimal, IntegerKind::Unsized));
        assert_eq!(integer("1_000"), (1000, IntegerBase::Decimal, IntegerKind::Unsized));
        assert_eq!(integer("0xBEEF"), (0xbeef, IntegerBase::Hexadecimal, IntegerKind::Unsized));
        assert_eq!(integer("0o17"), (15, IntegerBase::Octal, IntegerKind::Unsized));
        assert_eq!(integer("0c17"), (15, IntegerBase::Octal, IntegerKind::Unsized));
        assert_eq!(
            integer("0b1000_0001_1001u32"),
            (0b1000_0001_1001, IntegerBase::Binary, IntegerKind::U32)
        );
    }

    #[test]
    fn test_integer_suffixes() {
        assert_eq!(integer("7i8").2, IntegerKind::I8);
        assert_eq!(integer("7U64").2, IntegerKind::U64);
        assert_eq!(integer("0xffuz").2, IntegerKind::USize);
        assert_eq!(integer("12iz").2, IntegerKind::ISize);
    }

    #[test]
    fn test_malformed_integers() {
        for text in ["0xBEEFi", "0b102", "0o8", "0x", "12i128", "1.5", "abc", ""] {
            assert!(IntegerLiteral::parse(text).is_none(), "{:?} should fail", text);
        }
    }

    #[test]
    fn test_integer_value_is_arbitrary_precision() {
        let literal = IntegerLiteral::parse("340282366920938463463374607431768211456").unwrap();
        assert_eq!(literal.to_u64(), None);
        assert_eq!(
            literal.value.to_string(),
            "340282366920938463463374607431768211456"
        );
    }

    #[test]
    fn test_rendered_integer_reparses() {
        for text in ["0b1011i16", "0o777", "0xdeadu64", "42uz", "0C12"] {
            let literal = IntegerLiteral::parse(text).unwrap();
            let reparsed = IntegerLiteral::parse(&literal.to_string()).unwrap();
            assert_eq!(reparsed, literal);
        }
    }

    #[test]
    fn test_floats() {
        let literal = FloatLiteral::parse("1.5").unwrap();
        assert_eq!(literal.value, 1.5);
        assert_eq!(literal.kind, FloatKind::Unsized);

        let literal = FloatLiteral::parse("2.5e3f32").unwrap();
        assert_eq!(literal.value, 2500.0);
        assert_eq!(literal.kind, FloatKind::F32);

        assert_eq!(FloatLiteral::parse("1e-2").unwrap().value, 0.01);
        assert_eq!(FloatLiteral::parse("3.").unwrap().value, 3.0);
        assert_eq!(FloatLiteral::parse("1_0.0_1F64").unwrap().kind, FloatKind::F64);
    }

    #[test]
    fn test_malformed_floats() {
        for text in ["1", "1e", ".5", "1.5f16", "1.2.3", "e5"] {
            assert!(FloatLiteral::parse(text).is_none(), "{:?} should fail", text);
        }
    }

    #[test]
    fn test_integer_serializes_value_as_decimal_string() {
        let literal = IntegerLiteral::parse("0x10").unwrap();
        let json = serde_json::to_value(&literal).unwrap();
        assert_eq!(json["value"], "16");
        assert_eq!(json["base"], "Hexadecimal");
    }
}
