/// SurrealQL keywords and punctuation.
///
/// Keywords render in upper case; punctuation tokens control spacing in
/// [`SQL::sql`](super::SQL::sql).
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // statements
    SELECT,
    CREATE,
    INSERT,
    UPDATE,
    DELETE,
    RELATE,
    DEFINE,
    INFO,
    LET,
    LIVE,

    // clauses
    VALUE,
    FROM,
    WHERE,
    FETCH,
    LIMIT,
    START,
    ORDER,
    BY,
    AS,
    INTO,
    CONTENT,
    MERGE,
    PATCH,
    INDEX,
    ON,
    TABLE,
    COLUMNS,
    UNIQUE,
    SEARCH,
    ANALYZER,
    BM25,
    HIGHLIGHTS,
    FOR,
    DIFF,

    // punctuation
    STAR,
    COMMA,
    SEMI,
    LPAREN,
    RPAREN,
    DOT,
    EQ,
}

impl Token {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Token::SELECT => "SELECT",
            Token::CREATE => "CREATE",
            Token::INSERT => "INSERT",
            Token::UPDATE => "UPDATE",
            Token::DELETE => "DELETE",
            Token::RELATE => "RELATE",
            Token::DEFINE => "DEFINE",
            Token::INFO => "INFO",
            Token::LET => "LET",
            Token::LIVE => "LIVE",
            Token::VALUE => "VALUE",
            Token::FROM => "FROM",
            Token::WHERE => "WHERE",
            Token::FETCH => "FETCH",
            Token::LIMIT => "LIMIT",
            Token::START => "START",
            Token::ORDER => "ORDER",
            Token::BY => "BY",
            Token::AS => "AS",
            Token::INTO => "INTO",
            Token::CONTENT => "CONTENT",
            Token::MERGE => "MERGE",
            Token::PATCH => "PATCH",
            Token::INDEX => "INDEX",
            Token::ON => "ON",
            Token::TABLE => "TABLE",
            Token::COLUMNS => "COLUMNS",
            Token::UNIQUE => "UNIQUE",
            Token::SEARCH => "SEARCH",
            Token::ANALYZER => "ANALYZER",
            Token::BM25 => "BM25",
            Token::HIGHLIGHTS => "HIGHLIGHTS",
            Token::FOR => "FOR",
            Token::DIFF => "DIFF",
            Token::STAR => "*",
            Token::COMMA => ",",
            Token::SEMI => ";",
            Token::LPAREN => "(",
            Token::RPAREN => ")",
            Token::DOT => ".",
            Token::EQ => "=",
        }
    }

    /// Returns `true` for alphabetic keywords
    #[inline]
    pub const fn is_keyword(&self) -> bool {
        !matches!(
            self,
            Token::STAR
                | Token::COMMA
                | Token::SEMI
                | Token::LPAREN
                | Token::RPAREN
                | Token::DOT
                | Token::EQ
        )
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
