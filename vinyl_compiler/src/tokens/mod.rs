//! Token taxonomy
//!
//! A [`Token`] is a validated lexeme. Each variant of [`TokenKind`] has a
//! factory on [`Token`] that checks the text against the variant's grammar
//! and returns [`TokenError`] on mismatch, so a constructed token is always
//! well formed.
//!
//! | Kind | Grammar |
//! |------|---------|
//! | integer literal | `0b`, `0o`/`0c`, `0x` or decimal digits, optional `i8`..`u64`, `iz`, `uz` suffix |
//! | floating point literal | digits with a fraction and/or exponent, optional `f32`/`f64` suffix |
//! | identifier | word characters, not starting with a digit, not a keyword |
//! | keyword | `def`, `let`, `if`, `else` |
//! | symbol | see [`Symbol`] |
//! | comment | `// ...` or `/* ... */` |

pub mod kinds;
pub mod number;
pub mod token;

pub use kinds::{Keyword, Symbol};
pub use number::{FloatKind, FloatLiteral, IntegerBase, IntegerKind, IntegerLiteral};
pub use token::{Token, TokenError, TokenKind};
