//! Where the dictionary text is retrieved from.

use crate::error::{DictionaryError, DictionaryResult, UnavailableReason};
use async_trait::async_trait;
use std::path::PathBuf;

/// Retrieves the raw dictionary text.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    async fn fetch(&self) -> DictionaryResult<String>;

    /// A human readable description of the source used in logs and errors.
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: DictionarySource + ?Sized> DictionarySource for Box<T> {
    async fn fetch(&self) -> DictionaryResult<String> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Reads the dictionary from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DictionarySource for FileSource {
    async fn fetch(&self) -> DictionaryResult<String> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|err| DictionaryError::unavailable(self.describe(), err.into()))?;
        String::from_utf8(bytes).map_err(|_| {
            DictionaryError::unavailable(self.describe(), UnavailableReason::Encoding)
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Downloads the dictionary over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DictionarySource for HttpSource {
    async fn fetch(&self) -> DictionaryResult<String> {
        let unavailable =
            |reason: UnavailableReason| DictionaryError::unavailable(&self.url, reason);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| unavailable(err.into()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(UnavailableReason::Status(status.as_u16())));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|err| unavailable(err.into()))?;
        String::from_utf8(bytes.to_vec()).map_err(|_| unavailable(UnavailableReason::Encoding))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// A dictionary that is already in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl DictionarySource for StaticSource {
    async fn fetch(&self) -> DictionaryResult<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "in-memory dictionary".to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use std::io::Write;
    use tokio::net::TcpListener;

    // serves the dictionary at /dict and 404 elsewhere on a random port
    async fn serve(body: &'static [u8]) -> String {
        let router = Router::new().route("/dict", get(move || async move { body }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ma\t妈\t马").unwrap();
        let source = FileSource::new(file.path());
        assert_eq!(source.fetch().await.unwrap(), "ma\t妈\t马");
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.txt"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err.reason(), UnavailableReason::Io(_)));
    }

    #[tokio::test]
    async fn invalid_utf8_is_unavailable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x6d, 0x61, 0x09, 0xff, 0xfe]).unwrap();
        let source = FileSource::new(file.path());
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err.reason(), UnavailableReason::Encoding));
    }

    #[tokio::test]
    async fn downloads_over_http() {
        let base = serve("ni\t你\t伊".as_bytes()).await;
        let source = HttpSource::new(format!("{base}/dict"));
        assert_eq!(source.fetch().await.unwrap(), "ni\t你\t伊");
    }

    #[tokio::test]
    async fn not_found_is_unavailable() {
        let base = serve(b"").await;
        let source = HttpSource::new(format!("{base}/missing"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(
            err.reason(),
            UnavailableReason::Status(status) if *status == StatusCode::NOT_FOUND.as_u16()
        ));
    }

    #[tokio::test]
    async fn static_source() {
        let source = StaticSource::new("ma\t妈");
        assert_eq!(source.fetch().await.unwrap(), "ma\t妈");
    }
}
