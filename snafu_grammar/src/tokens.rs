//! Token kinds of the Snafu grammar

pub const LET: i32 = 1;
pub const PRINT: i32 = 2;
pub const ASSIGN: i32 = 3;
pub const SEMI: i32 = 4;
pub const PLUS: i32 = 5;
pub const MINUS: i32 = 6;
pub const STAR: i32 = 7;
pub const SLASH: i32 = 8;
pub const LPAREN: i32 = 9;
pub const RPAREN: i32 = 10;
pub const ID: i32 = 11;
pub const INT: i32 = 12;
pub const STRING: i32 = 13;
pub const WS: i32 = 14;
pub const COMMENT: i32 = 15;

/// Display names indexed by token kind
pub const VOCABULARY: &[&str] = &[
    "<INVALID>",
    "'let'",
    "'print'",
    "'='",
    "';'",
    "'+'",
    "'-'",
    "'*'",
    "'/'",
    "'('",
    "')'",
    "ID",
    "INT",
    "STRING",
    "WS",
    "COMMENT",
];

pub fn keyword(text: &str) -> Option<i32> {
    match text {
        "let" => Some(LET),
        "print" => Some(PRINT),
        _ => None,
    }
}
