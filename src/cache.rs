//! Tokenized format caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::parser::lexer;
use crate::parser::tokens::FormatToken;

/// Global cache for tokenized format strings.
static CACHE: Mutex<Option<LruCache<String, Vec<FormatToken>>>> = Mutex::new(None);

const CACHE_SIZE: usize = 100;

/// Get or tokenize a format string, using the cache.
///
/// Unguided parsing walks the whole candidate list per call; the cache keeps
/// those token sequences warm instead of re-lexing them every time.
pub fn get_or_tokenize(format: &str) -> Vec<FormatToken> {
    let mut cache_guard = CACHE.lock().unwrap();

    let cache = cache_guard
        .get_or_insert_with(|| LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap()));

    if let Some(tokens) = cache.get(format) {
        return tokens.clone();
    }

    let tokens = lexer::tokenize(format);
    cache.put(format.to_string(), tokens.clone());
    tokens
}
