//! Token kinds and the reserved key set.

/// Classification of a token.
///
/// All values fit in a single `u8`, with categories arranged in contiguous
/// ranges so the category predicates are range checks:
///
/// | Range | Category             |
/// |-------|----------------------|
/// | 0-6   | Literals             |
/// | 7-28  | Operators            |
/// | 29-39 | Delimiters           |
/// | 40-81 | Keywords             |
/// | 82-83 | Sentinels            |
///
/// Discriminants are dense, so [`TokenKind::from_u8`] is a bounds-checked
/// index into [`TokenKind::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Literals (0-6) ===
    String = 0,
    Integer = 1,
    Hexadecimal = 2,
    Octal = 3,
    Binary = 4,
    Float = 5,
    Identifier = 6,

    // === Arithmetic / logical (7-14) ===
    Plus = 7,
    Minus = 8,
    Multiply = 9,
    Divide = 10,
    Mod = 11,
    And = 12,
    Or = 13,
    Not = 14,

    // === Comparison (15-20) ===
    Equal = 15,
    NotEqual = 16,
    LessThan = 17,
    GreaterThan = 18,
    LessThanOrEqual = 19,
    GreaterThanOrEqual = 20,

    // === Assignment (21-26) ===
    Assignment = 21,
    Declaration = 22,
    PlusEqual = 23,
    MinusEqual = 24,
    MultiplyEqual = 25,
    DivideEqual = 26,

    // === Special operators (27-28) ===
    Question = 27,
    Arrow = 28,

    // === Delimiters (29-39) ===
    LParen = 29,
    RParen = 30,
    LBrace = 31,
    RBrace = 32,
    LBracket = 33,
    RBracket = 34,
    Dot = 35,
    Dots = 36,
    Comma = 37,
    Colon = 38,
    Semicolon = 39,

    // === Control flow (40-51) ===
    If = 40,
    Else = 41,
    For = 42,
    In = 43,
    While = 44,
    Switch = 45,
    Return = 46,
    Break = 47,
    Continue = 48,
    Goto = 49,
    Marker = 50,
    Scene = 51,

    // === Concurrency (52-54) ===
    Spawn = 52,
    Joined = 53,
    Await = 54,

    // === Error handling (55-57) ===
    Try = 55,
    Catch = 56,
    Must = 57,

    // === Declaration modifiers (58-70) ===
    Const = 58,
    Mutable = 59,
    Var = 60,
    Let = 61,
    Auto = 62,
    Global = 63,
    Persistent = 64,
    Local = 65,
    Lend = 66,
    Shared = 67,
    View = 68,
    Unique = 69,
    Pack = 70,

    // === Access modifiers (71) ===
    Modifier = 71,

    // === Type declarations (72-81) ===
    Type = 72,
    Struct = 73,
    Component = 74,
    Enum = 75,
    Union = 76,
    Family = 77,
    Entity = 78,
    Trait = 79,
    Typedef = 80,
    Implement = 81,

    // === Sentinels (82-83) ===
    End = 82,
    Unknown = 83,
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);
const _: () = assert!(TokenKind::ALL.len() == TokenKind::COUNT);

impl TokenKind {
    /// Number of variants.
    pub const COUNT: usize = Self::Unknown as usize + 1;

    /// Every variant, indexed by discriminant.
    pub const ALL: [TokenKind; Self::COUNT] = [
        Self::String,
        Self::Integer,
        Self::Hexadecimal,
        Self::Octal,
        Self::Binary,
        Self::Float,
        Self::Identifier,
        Self::Plus,
        Self::Minus,
        Self::Multiply,
        Self::Divide,
        Self::Mod,
        Self::And,
        Self::Or,
        Self::Not,
        Self::Equal,
        Self::NotEqual,
        Self::LessThan,
        Self::GreaterThan,
        Self::LessThanOrEqual,
        Self::GreaterThanOrEqual,
        Self::Assignment,
        Self::Declaration,
        Self::PlusEqual,
        Self::MinusEqual,
        Self::MultiplyEqual,
        Self::DivideEqual,
        Self::Question,
        Self::Arrow,
        Self::LParen,
        Self::RParen,
        Self::LBrace,
        Self::RBrace,
        Self::LBracket,
        Self::RBracket,
        Self::Dot,
        Self::Dots,
        Self::Comma,
        Self::Colon,
        Self::Semicolon,
        Self::If,
        Self::Else,
        Self::For,
        Self::In,
        Self::While,
        Self::Switch,
        Self::Return,
        Self::Break,
        Self::Continue,
        Self::Goto,
        Self::Marker,
        Self::Scene,
        Self::Spawn,
        Self::Joined,
        Self::Await,
        Self::Try,
        Self::Catch,
        Self::Must,
        Self::Const,
        Self::Mutable,
        Self::Var,
        Self::Let,
        Self::Auto,
        Self::Global,
        Self::Persistent,
        Self::Local,
        Self::Lend,
        Self::Shared,
        Self::View,
        Self::Unique,
        Self::Pack,
        Self::Modifier,
        Self::Type,
        Self::Struct,
        Self::Component,
        Self::Enum,
        Self::Union,
        Self::Family,
        Self::Entity,
        Self::Trait,
        Self::Typedef,
        Self::Implement,
        Self::End,
        Self::Unknown,
    ];

    /// Recover a kind from its discriminant.
    #[inline]
    pub fn from_u8(value: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Stable upper-case name used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Integer => "INTEGER",
            Self::Hexadecimal => "HEXADECIMAL",
            Self::Octal => "OCTAL",
            Self::Binary => "BINARY",
            Self::Float => "FLOAT",
            Self::Identifier => "IDENTIFIER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Mod => "MOD",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::LessThan => "LESS_THAN",
            Self::GreaterThan => "GREATER_THAN",
            Self::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            Self::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            Self::Assignment => "ASSIGNMENT",
            Self::Declaration => "DECLARATION",
            Self::PlusEqual => "PLUS_EQUAL",
            Self::MinusEqual => "MINUS_EQUAL",
            Self::MultiplyEqual => "MULTIPLY_EQUAL",
            Self::DivideEqual => "DIVIDE_EQUAL",
            Self::Question => "QUESTION",
            Self::Arrow => "ARROW",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Dot => "DOT",
            Self::Dots => "DOTS",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::Semicolon => "SEMICOLON",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::For => "FOR",
            Self::In => "IN",
            Self::While => "WHILE",
            Self::Switch => "SWITCH",
            Self::Return => "RETURN",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::Goto => "GOTO",
            Self::Marker => "MARKER",
            Self::Scene => "SCENE",
            Self::Spawn => "SPAWN",
            Self::Joined => "JOINED",
            Self::Await => "AWAIT",
            Self::Try => "TRY",
            Self::Catch => "CATCH",
            Self::Must => "MUST",
            Self::Const => "CONST",
            Self::Mutable => "MUTABLE",
            Self::Var => "VAR",
            Self::Let => "LET",
            Self::Auto => "AUTO",
            Self::Global => "GLOBAL",
            Self::Persistent => "PERSISTENT",
            Self::Local => "LOCAL",
            Self::Lend => "LEND",
            Self::Shared => "SHARED",
            Self::View => "VIEW",
            Self::Unique => "UNIQUE",
            Self::Pack => "PACK",
            Self::Modifier => "MODIFIER",
            Self::Type => "TYPE",
            Self::Struct => "STRUCT",
            Self::Component => "COMPONENT",
            Self::Enum => "ENUM",
            Self::Union => "UNION",
            Self::Family => "FAMILY",
            Self::Entity => "ENTITY",
            Self::Trait => "TRAIT",
            Self::Typedef => "TYPEDEF",
            Self::Implement => "IMPLEMENT",
            Self::End => "END",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// String, numeric and identifier tokens.
    #[inline]
    pub const fn is_literal(self) -> bool {
        (self as u8) <= Self::Identifier as u8
    }

    /// Arithmetic, logical, comparison, assignment and special operators.
    #[inline]
    pub const fn is_operator(self) -> bool {
        let v = self as u8;
        v >= Self::Plus as u8 && v <= Self::Arrow as u8
    }

    /// Brackets, separators and the dot forms.
    #[inline]
    pub const fn is_delimiter(self) -> bool {
        let v = self as u8;
        v >= Self::LParen as u8 && v <= Self::Semicolon as u8
    }

    /// Reserved words, including modifiers and builtin type names.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        let v = self as u8;
        v >= Self::If as u8 && v <= Self::Implement as u8
    }

    /// Tokens that can end an operand: number literals, identifiers and
    /// closing `)` / `]`. A `.` directly after one of these is member access.
    #[inline]
    pub const fn ends_value(self) -> bool {
        matches!(
            self,
            Self::Integer
                | Self::Hexadecimal
                | Self::Octal
                | Self::Binary
                | Self::Float
                | Self::Identifier
                | Self::RParen
                | Self::RBracket
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Length in bytes of the longest operator or punctuation key.
pub const MAX_OPERATOR_LEN: usize = 3;

/// The fixed reserved key set: every keyword, builtin type name, modifier,
/// operator and punctuation lexeme, paired with its kind.
pub static RESERVED: &[(&str, TokenKind)] = &[
    // Control flow
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("in", TokenKind::In),
    ("while", TokenKind::While),
    ("switch", TokenKind::Switch),
    ("return", TokenKind::Return),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("goto", TokenKind::Goto),
    ("marker", TokenKind::Marker),
    ("scene", TokenKind::Scene),
    // Concurrency
    ("spawn", TokenKind::Spawn),
    ("joined", TokenKind::Joined),
    ("await", TokenKind::Await),
    // Error handling
    ("try", TokenKind::Try),
    ("catch", TokenKind::Catch),
    ("must", TokenKind::Must),
    // Declaration modifiers
    ("const", TokenKind::Const),
    ("mut", TokenKind::Mutable),
    ("var", TokenKind::Var),
    ("let", TokenKind::Let),
    ("auto", TokenKind::Auto),
    ("global", TokenKind::Global),
    ("persistent", TokenKind::Persistent),
    ("local", TokenKind::Local),
    ("lend", TokenKind::Lend),
    ("shared", TokenKind::Shared),
    ("view", TokenKind::View),
    ("unique", TokenKind::Unique),
    ("pack", TokenKind::Pack),
    // Access modifiers
    ("public", TokenKind::Modifier),
    ("private", TokenKind::Modifier),
    ("protected", TokenKind::Modifier),
    // Builtin type names
    ("i8", TokenKind::Type),
    ("i16", TokenKind::Type),
    ("i32", TokenKind::Type),
    ("i64", TokenKind::Type),
    ("u8", TokenKind::Type),
    ("u16", TokenKind::Type),
    ("u32", TokenKind::Type),
    ("u64", TokenKind::Type),
    ("f32", TokenKind::Type),
    ("f64", TokenKind::Type),
    ("bool", TokenKind::Type),
    ("str", TokenKind::Type),
    ("void", TokenKind::Type),
    // Type declarations
    ("struct", TokenKind::Struct),
    ("component", TokenKind::Component),
    ("enum", TokenKind::Enum),
    ("union", TokenKind::Union),
    ("family", TokenKind::Family),
    ("entity", TokenKind::Entity),
    ("trait", TokenKind::Trait),
    ("typedef", TokenKind::Typedef),
    ("implement", TokenKind::Implement),
    // Arithmetic / logical
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Multiply),
    ("/", TokenKind::Divide),
    ("%", TokenKind::Mod),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("!", TokenKind::Not),
    // Comparison
    ("==", TokenKind::Equal),
    ("!=", TokenKind::NotEqual),
    ("<", TokenKind::LessThan),
    (">", TokenKind::GreaterThan),
    ("<=", TokenKind::LessThanOrEqual),
    (">=", TokenKind::GreaterThanOrEqual),
    // Assignment
    ("=", TokenKind::Assignment),
    (":=", TokenKind::Declaration),
    ("+=", TokenKind::PlusEqual),
    ("-=", TokenKind::MinusEqual),
    ("*=", TokenKind::MultiplyEqual),
    ("/=", TokenKind::DivideEqual),
    // Special
    ("?", TokenKind::Question),
    ("->", TokenKind::Arrow),
    // Delimiters
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
    (".", TokenKind::Dot),
    ("...", TokenKind::Dots),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
    (";", TokenKind::Semicolon),
];

#[cfg(test)]
mod tests;
