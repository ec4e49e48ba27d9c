use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("`{first}` and `{second}` are mutually exclusive and can't both be given")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },

    #[error("at least one of `{0}` must be given")]
    MissingArgument(&'static str),

    #[error("feature dictionary entry `{0}` has no non-empty noun phrase")]
    EmptyDictEntry(String),

    #[error("not a recognized numeral word: `{0}`")]
    NotANumeral(String),

    #[error("malformed CoNLL-U at line {line}: {reason}")]
    Conllu { line: usize, reason: String },

    #[error("token {token} points at head {head}, outside document of {len} tokens")]
    HeadOutOfBounds {
        token: usize,
        head: usize,
        len: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
