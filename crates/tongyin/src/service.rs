//! Contains `Dictionary`, the lazily loaded dictionary service that conversions go through.

use crate::{
    contains_chinese,
    convert::{self, Conversion},
    dictionary::{DictionaryStats, HomophoneIndex},
    error::{DictionaryError, DictionaryResult, UnavailableReason},
    pick::{Picker, RandomPicker},
    source::DictionarySource,
};
use std::time::Duration;
use tokio::sync::OnceCell;

/// Loads the dictionary from its source on first use and keeps it for the rest of its lifetime.
///
/// Concurrent first uses share a single load. A failed load leaves the dictionary unloaded,
/// and the next use tries again.
pub struct Dictionary<S> {
    source: S,
    timeout: Option<Duration>,
    index: OnceCell<HomophoneIndex>,
}

impl<S> std::fmt::Debug for Dictionary<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("timeout", &self.timeout)
            .field("loaded", &self.index.initialized())
            .finish_non_exhaustive()
    }
}

impl<S: DictionarySource> Dictionary<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            timeout: None,
            index: OnceCell::new(),
        }
    }

    /// Limits how long retrieving the dictionary may take.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.index.initialized()
    }

    /// Makes sure the dictionary is loaded. Cheap to call once it has been.
    pub async fn load(&self) -> DictionaryResult<DictionaryStats> {
        let index = self.index().await?;
        Ok(index.stats())
    }

    pub async fn index(&self) -> DictionaryResult<&HomophoneIndex> {
        self.index.get_or_try_init(|| self.fetch_and_parse()).await
    }

    /// Returns the members of the class containing the character, loading the dictionary if needed.
    pub async fn class_for(&self, c: char) -> DictionaryResult<&[String]> {
        let index = self.index().await?;
        Ok(index.class_for(c))
    }

    /// Converts the text with uniformly random choices.
    pub async fn convert(&self, text: &str) -> DictionaryResult<String> {
        if !contains_chinese(text) {
            return Ok(text.to_string());
        }
        let index = self.index().await?;
        Ok(convert::convert_text(index, text, RandomPicker::thread()))
    }

    pub async fn convert_with(&self, text: &str, picker: impl Picker) -> DictionaryResult<String> {
        let conversion = self.convert_detailed_with(text, picker).await?;
        Ok(conversion.text)
    }

    pub async fn convert_detailed_with(
        &self,
        text: &str,
        picker: impl Picker,
    ) -> DictionaryResult<Conversion> {
        // nothing to look up, so no reason to load
        if !contains_chinese(text) {
            return Ok(Conversion {
                text: text.to_string(),
                replacements: Vec::new(),
            });
        }
        let index = self.index().await?;
        Ok(convert::convert_text_detailed(index, text, picker))
    }

    async fn fetch_and_parse(&self) -> DictionaryResult<HomophoneIndex> {
        let resource = self.source.describe();
        tracing::info!("Loading dictionary from {resource}");

        let fetched = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.source.fetch())
                .await
                .unwrap_or_else(|_| {
                    Err(DictionaryError::unavailable(
                        &resource,
                        UnavailableReason::Timeout(timeout),
                    ))
                }),
            None => self.source.fetch().await,
        };
        let text = match fetched {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!("Failed to load dictionary: {err}");
                return Err(err);
            }
        };

        let index = HomophoneIndex::parse(&text);
        let stats = index.stats();
        tracing::info!(
            "Loaded {} pinyin with {} characters from {resource}",
            stats.class_count,
            stats.total_char_count
        );
        Ok(index)
    }
}
