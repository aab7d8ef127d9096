use url::Url;

use crate::app::Result;
use crate::config::ApiConfig;
use crate::domain::AyahRef;

/// Builds alquran.cloud URLs for a base address and text edition.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
    edition: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>, edition: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            edition: edition.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url, &config.edition)
    }

    /// `{base}/ruku/{number}/{edition}`
    pub fn ruku(&self, number: u16) -> Result<Url> {
        self.build(&format!("ruku/{}/{}", number, self.edition))
    }

    /// `{base}/ayah/{surah}:{ayah}/{edition}`
    pub fn ayah(&self, reference: AyahRef) -> Result<Url> {
        self.build(&format!("ayah/{}/{}", reference, self.edition))
    }

    /// `{base}/surah`, the list of all 114 surahs.
    pub fn suwar(&self) -> Result<Url> {
        self.build("surah")
    }

    fn build(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}/{}", self.base, path))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruku_url() {
        let endpoints = Endpoints::new("http://api.alquran.cloud/v1", "quran-uthmani");
        assert_eq!(
            endpoints.ruku(7).unwrap().as_str(),
            "http://api.alquran.cloud/v1/ruku/7/quran-uthmani"
        );
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let endpoints = Endpoints::new("http://localhost:8080/v1/", "quran-simple");
        assert_eq!(
            endpoints.ayah(AyahRef::new(2, 255)).unwrap().as_str(),
            "http://localhost:8080/v1/ayah/2:255/quran-simple"
        );
        assert_eq!(
            endpoints.suwar().unwrap().as_str(),
            "http://localhost:8080/v1/surah"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let endpoints = Endpoints::new("not a url", "quran-uthmani");
        assert!(endpoints.ruku(1).is_err());
    }
}
