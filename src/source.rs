use include_dir::{include_dir, Dir};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::i18n::LearningLevel;
use crate::phrase::PhraseData;

static DATA_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/data");

pub const DEFAULT_ENDPOINT: &str = "https://backend.phrase-of-the-day.com/api/v1/phrases";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Somewhere a phrase dataset can be loaded from
pub trait PhraseSource {
    fn fetch(&self, level: LearningLevel) -> Result<PhraseData>;
}

/// The phrase service
pub struct HttpPhraseSource {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpPhraseSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PhraseSource for HttpPhraseSource {
    fn fetch(&self, level: LearningLevel) -> Result<PhraseData> {
        log::info!("fetching phrases from {} (level {level})", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("level", level.to_string())])
            .header(CONTENT_TYPE, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.text()?;
        let data: PhraseData = serde_json::from_str(&body)?;
        data.validate()
    }
}

/// The dataset compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledPhraseSource;

impl BundledPhraseSource {
    const FILE_NAME: &'static str = "phrases.json";

    fn read_all() -> Result<PhraseData> {
        let file = DATA_DIR
            .get_file(Self::FILE_NAME)
            .ok_or_else(|| Error::InvalidData(format!("{} is not bundled", Self::FILE_NAME)))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| Error::InvalidData(format!("{} is not utf-8", Self::FILE_NAME)))?;
        Ok(serde_json::from_str(contents)?)
    }
}

impl PhraseSource for BundledPhraseSource {
    /// Phrases at the requested level come first; without any, the whole set
    /// is served as is.
    fn fetch(&self, level: LearningLevel) -> Result<PhraseData> {
        let mut data = Self::read_all()?;
        let (mut matching, rest): (Vec<_>, Vec<_>) = data
            .phrases
            .into_iter()
            .partition(|p| p.difficulty == level);
        matching.extend(rest);
        data.phrases = matching;
        data.validate()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPhrases {
    pub data: PhraseData,
    /// Set when the phrase service was skipped or failed and bundled content
    /// is being shown instead
    pub offline: bool,
}

/// Try the phrase service first and fall back to the bundled dataset.
/// Only an error from the fallback itself is returned.
pub fn load_phrases(
    primary: Option<&dyn PhraseSource>,
    fallback: &dyn PhraseSource,
    level: LearningLevel,
) -> Result<LoadedPhrases> {
    if let Some(primary) = primary {
        match primary.fetch(level) {
            Ok(data) => return Ok(LoadedPhrases { data, offline: false }),
            Err(e) => log::warn!("phrase fetch failed, using fallback data: {e}"),
        }
    }

    let data = fallback.fetch(level)?;
    Ok(LoadedPhrases {
        data,
        offline: true,
    })
}

/// The service/fallback pair the app loads from
pub struct PhraseLoader {
    primary: Option<Box<dyn PhraseSource>>,
    fallback: Box<dyn PhraseSource>,
}

impl PhraseLoader {
    pub fn new(primary: Option<Box<dyn PhraseSource>>, fallback: Box<dyn PhraseSource>) -> Self {
        Self { primary, fallback }
    }

    /// Bundled data only
    pub fn offline() -> Self {
        Self::new(None, Box::new(BundledPhraseSource))
    }

    pub fn load(&self, level: LearningLevel) -> Result<LoadedPhrases> {
        load_phrases(self.primary.as_deref(), &*self.fallback, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    struct FailingSource;

    impl PhraseSource for FailingSource {
        fn fetch(&self, _level: LearningLevel) -> Result<PhraseData> {
            Err(Error::Status(503))
        }
    }

    struct FixedSource(&'static str);

    impl PhraseSource for FixedSource {
        fn fetch(&self, _level: LearningLevel) -> Result<PhraseData> {
            let data: PhraseData = serde_json::from_str(self.0)?;
            data.validate()
        }
    }

    /// Serve one canned HTTP response on a local port and return its URL
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/api/v1/phrases")
    }

    #[test]
    fn test_bundled_source_loads() {
        let data = BundledPhraseSource.fetch(LearningLevel::Beginner).unwrap();
        assert!(!data.phrases.is_empty());
        assert_eq!(data.phrase_of_the_day().unwrap().phrase, "Tú decides");
    }

    #[test]
    fn test_bundled_source_prefers_level() {
        let data = BundledPhraseSource.fetch(LearningLevel::Advanced).unwrap();
        assert_eq!(
            data.phrase_of_the_day().unwrap().difficulty,
            LearningLevel::Advanced
        );
        let all = BundledPhraseSource.fetch(LearningLevel::Beginner).unwrap();
        assert_eq!(data.phrases.len(), all.phrases.len());
    }

    #[test]
    fn test_primary_success_is_online() {
        let primary = FixedSource(r#"{ "phrases": [{ "phrase": "Vale" }] }"#);
        let loaded = load_phrases(Some(&primary), &BundledPhraseSource, LearningLevel::Beginner)
            .unwrap();
        assert!(!loaded.offline);
        assert_eq!(loaded.data.phrase_of_the_day().unwrap().phrase, "Vale");
    }

    #[test]
    fn test_primary_failure_falls_back() {
        let loaded =
            load_phrases(Some(&FailingSource), &BundledPhraseSource, LearningLevel::Beginner)
                .unwrap();
        assert!(loaded.offline);
        assert_eq!(loaded.data.phrase_of_the_day().unwrap().phrase, "Tú decides");
    }

    #[test]
    fn test_empty_primary_falls_back() {
        let primary = FixedSource(r#"{ "phrases": [] }"#);
        let loaded = load_phrases(Some(&primary), &BundledPhraseSource, LearningLevel::Beginner)
            .unwrap();
        assert!(loaded.offline);
    }

    #[test]
    fn test_no_primary_is_offline() {
        let loaded = load_phrases(None, &BundledPhraseSource, LearningLevel::Beginner).unwrap();
        assert!(loaded.offline);
    }

    #[test]
    fn test_fallback_failure_is_returned() {
        let result = load_phrases(Some(&FailingSource), &FailingSource, LearningLevel::Beginner);
        assert_matches!(result, Err(Error::Status(503)));
    }

    #[test]
    fn test_loader_uses_fallback() {
        let loader = PhraseLoader::new(Some(Box::new(FailingSource)), Box::new(BundledPhraseSource));
        let loaded = loader.load(LearningLevel::Intermediate).unwrap();
        assert!(loaded.offline);
        assert_eq!(loaded.data.phrase_of_the_day().unwrap().phrase, "Me da igual");
    }

    #[test]
    fn test_http_source_reads_phrases() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{ "phrases": [{ "phrase": "¡Qué padre!", "formality": "informal" }] }"#,
        );
        let source = HttpPhraseSource::new(url).unwrap();
        let data = source.fetch(LearningLevel::Intermediate).unwrap();
        assert_eq!(data.phrases[0].phrase, "¡Qué padre!");
    }

    #[test]
    fn test_http_source_rejects_error_status() {
        let url = serve_once("HTTP/1.1 500 Internal Server Error", "");
        let source = HttpPhraseSource::new(url).unwrap();
        assert_matches!(
            source.fetch(LearningLevel::Beginner),
            Err(Error::Status(500))
        );
    }

    #[test]
    fn test_http_source_rejects_malformed_body() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{ "phrases": "nope" }"#);
        let source = HttpPhraseSource::new(url).unwrap();
        assert_matches!(source.fetch(LearningLevel::Beginner), Err(Error::Json(_)));
    }
}
