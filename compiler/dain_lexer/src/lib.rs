//! Arena-backed tokenizer for Dain.
//!
//! Runs the [`dain_lexer_core`] scanner over a whole source buffer and
//! stores the result as a [`TokenStream`] inside a caller-owned [`Arena`].
//! Lexical errors are collected next to the stream; only arena exhaustion
//! stops a scan.
//!
//! ```text
//! let arena = Arena::new();
//! let lexed = tokenize(&arena, b"let x = 1;");
//! assert!(!lexed.has_errors());
//! ```

mod lex_error;
mod token;

use std::sync::Once;

use dain_lexer_core::{PerfectHashTable, ScanEvent, Scanner};
use tracing::{debug, trace};

pub use dain_arena::{Arena, ArenaConfig, ArenaError};
pub use dain_lexer_core::{SourceLocation, TokenKind};
pub use lex_error::{render_errors, LexError, LexErrorKind};
pub use token::{Token, TokenIter, TokenStream};

use token::{encode_record, RECORD_ALIGN, RECORD_SIZE};

/// Tokens and lexical errors of one source buffer.
#[derive(Debug)]
pub struct Lexed<'a, 'src> {
    pub tokens: TokenStream<'a, 'src>,
    /// In source order.
    pub errors: Vec<LexError>,
}

impl<'a, 'src> Lexed<'a, 'src> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (TokenStream<'a, 'src>, Vec<LexError>) {
        (self.tokens, self.errors)
    }
}

/// Tokenize `source` into `arena`.
///
/// One scan encodes every token into a local record buffer and collects
/// the errors; the buffer is then copied into a single arena allocation.
/// `source` may itself live in `arena`, for example from
/// [`Arena::load_file`].
///
/// # Errors
///
/// Returns an [`ArenaError`] if the record array cannot be allocated.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn try_tokenize<'a, 'src>(
    arena: &'a Arena,
    source: &'src [u8],
) -> Result<Lexed<'a, 'src>, ArenaError> {
    let mut records = Vec::new();
    let mut errors = Vec::new();
    for event in Scanner::new(source) {
        match event {
            ScanEvent::Token(token) => records.extend_from_slice(&encode_record(&token)),
            ScanEvent::Fault(fault, location) => {
                let error = LexError::from_fault(fault, location);
                trace!(%error, "lexical error");
                errors.push(error);
            }
        }
    }

    let stored = arena.allocate(records.len(), RECORD_ALIGN)?;
    stored.copy_from_slice(&records);
    let stored: &'a [u8] = stored;

    debug!(
        tokens = stored.len() / RECORD_SIZE,
        errors = errors.len(),
        bytes = source.len(),
        "tokenized"
    );
    Ok(Lexed {
        tokens: TokenStream::new(stored, source),
        errors,
    })
}

/// Tokenize `source` into `arena`.
///
/// # Panics
///
/// Panics if the arena cannot allocate the token records. Use
/// [`try_tokenize`] to handle that case.
pub fn tokenize<'a, 'src>(arena: &'a Arena, source: &'src [u8]) -> Lexed<'a, 'src> {
    try_tokenize(arena, source).unwrap_or_else(|e| panic!("tokenize: {e}"))
}

/// [`tokenize`] for text input.
pub fn tokenize_str<'a, 'src>(arena: &'a Arena, source: &'src str) -> Lexed<'a, 'src> {
    tokenize(arena, source.as_bytes())
}

/// Build the keyword classifier now rather than on first scan.
///
/// Idempotent. Returns the process-wide table.
pub fn init() -> &'static PerfectHashTable {
    let table = dain_lexer_core::classifier();
    debug!(
        seed = table.seed(),
        table_size = table.table_size(),
        keys = table.len(),
        "classifier ready"
    );
    table
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for lexer diagnostics.
///
/// Only installs a subscriber when `RUST_LOG` is set, so library users that
/// bring their own subscriber are unaffected. Safe to call more than once.
///
/// ```bash
/// RUST_LOG=dain_lexer=debug cargo test -p dain_lexer
/// RUST_LOG=dain_arena=trace,dain_lexer=trace cargo test
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
