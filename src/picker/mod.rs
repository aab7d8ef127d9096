//! Random passage selection on top of the fetcher and normalizer.

use std::sync::Arc;

use rand::Rng;

use crate::app::{Result, RukuError};
use crate::catalogue::SurahCatalogue;
use crate::domain::{Ayah, AyahRef, Passage, Ruku, Surah, RUKU_COUNT};
use crate::fetcher::{Endpoints, Fetcher};
use crate::normalizer::Normalizer;

/// Uniform draw from `1..=558`.
pub fn random_ruku_number<R: Rng>(rng: &mut R) -> u16 {
    rng.gen_range(1..=RUKU_COUNT)
}

/// Uniform draw from `start..=end`.
pub fn ruku_within_range<R: Rng>(start: u16, end: u16, rng: &mut R) -> Result<u16> {
    if start > end {
        return Err(RukuError::InvalidRange(format!(
            "ruku {} comes after ruku {}",
            start, end
        )));
    }
    Ok(rng.gen_range(start..=end))
}

pub struct Picker {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    endpoints: Endpoints,
    normalizer: Normalizer,
}

impl Picker {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, endpoints: Endpoints) -> Self {
        Self {
            fetcher,
            endpoints,
            normalizer: Normalizer::new(),
        }
    }

    /// Fetch a random ruku and return its opening verse.
    pub async fn random_passage<R: Rng>(&self, rng: &mut R) -> Result<Passage> {
        let number = random_ruku_number(rng);
        tracing::info!("Picked ruku {}", number);
        self.passage(number).await
    }

    pub async fn passage(&self, number: u16) -> Result<Passage> {
        let body = self.fetcher.fetch(&self.endpoints.ruku(number)?).await?;
        self.normalizer.passage(&body)
    }

    pub async fn ruku(&self, number: u16) -> Result<Ruku> {
        let body = self.fetcher.fetch(&self.endpoints.ruku(number)?).await?;
        self.normalizer.ruku(&body)
    }

    pub async fn ayah(&self, reference: AyahRef) -> Result<(Ayah, Surah)> {
        let body = self.fetcher.fetch(&self.endpoints.ayah(reference)?).await?;
        self.normalizer.ayah(&body)
    }

    pub async fn catalogue(&self) -> Result<SurahCatalogue> {
        let body = self.fetcher.fetch(&self.endpoints.suwar()?).await?;
        Ok(SurahCatalogue::new(self.normalizer.suwar(&body)?))
    }

    pub async fn random_ruku<R: Rng>(&self, rng: &mut R) -> Result<Ruku> {
        let number = random_ruku_number(rng);
        tracing::info!("Picked ruku {}", number);
        self.ruku(number).await
    }

    /// Random ruku overlapping `start..=end`, trimmed to the ayaat inside it.
    pub async fn random_ruku_in_range<R: Rng>(
        &self,
        start: AyahRef,
        end: AyahRef,
        rng: &mut R,
    ) -> Result<Ruku> {
        if start > end {
            return Err(RukuError::InvalidRange(format!("{} comes after {}", start, end)));
        }

        let (first, _) = self.ayah(start).await?;
        let (last, _) = self.ayah(end).await?;

        let number = ruku_within_range(first.ruku, last.ruku, rng)?;
        tracing::info!(
            "Picked ruku {} between {} (ruku {}) and {} (ruku {})",
            number,
            start,
            first.ruku,
            end,
            last.ruku
        );

        let mut ruku = self.ruku(number).await?;
        ruku.retain_between(first.id, last.id);
        if ruku.ayaat.is_empty() {
            return Err(RukuError::InvalidRange(format!(
                "ruku {} has no ayaat between {} and {}",
                number, start, end
            )));
        }
        Ok(ruku)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::testing::StaticFetcher;
    use crate::normalizer::tests::RUKU_SAMPLE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ayah_body(global: u32, surah: u16, in_surah: u16, ruku: u16) -> String {
        format!(
            r#"{{"code":200,"status":"OK","data":{{"number":{global},"text":"a{global}","surah":{{"number":{surah},"name":"س","englishName":"Al-Baqara","numberOfAyahs":286}},"numberInSurah":{in_surah},"ruku":{ruku},"juz":1,"hizbQuarter":1}}}}"#
        )
    }

    /// Ruku response whose ayaat are `(global, number_in_surah)` pairs in Al-Baqara.
    fn ruku_body(number: u16, ayaat: &[(u32, u16)]) -> String {
        let ayahs: Vec<_> = ayaat
            .iter()
            .map(|&(global, in_surah)| {
                serde_json::json!({
                    "number": global,
                    "text": format!("a{}", global),
                    "surah": {"number": 2, "name": "س", "englishName": "Al-Baqara", "numberOfAyahs": 286},
                    "numberInSurah": in_surah,
                    "ruku": number,
                    "juz": 1,
                    "hizbQuarter": 2
                })
            })
            .collect();
        serde_json::json!({
            "code": 200,
            "status": "OK",
            "data": {"number": number, "ayahs": ayahs}
        })
        .to_string()
    }

    fn ids(ruku: &Ruku) -> Vec<u32> {
        ruku.ayaat.iter().map(|a| a.id).collect()
    }

    fn picker(fetcher: StaticFetcher) -> Picker {
        Picker::new(
            Arc::new(fetcher),
            Endpoints::new("http://api.alquran.cloud/v1", "quran-uthmani"),
        )
    }

    #[test]
    fn test_random_ruku_number_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_min = u16::MAX;
        let mut seen_max = 0;
        for _ in 0..20_000 {
            let n = random_ruku_number(&mut rng);
            assert!((1..=558).contains(&n));
            seen_min = seen_min.min(n);
            seen_max = seen_max.max(n);
        }
        assert_eq!(seen_min, 1);
        assert_eq!(seen_max, 558);
    }

    #[test]
    fn test_ruku_within_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let n = ruku_within_range(5, 8, &mut rng).unwrap();
            assert!((5..=8).contains(&n));
        }
        assert_eq!(ruku_within_range(9, 9, &mut rng).unwrap(), 9);
        assert!(ruku_within_range(9, 8, &mut rng).is_err());
    }

    #[tokio::test]
    async fn test_passage_fetches_ruku_url() {
        let fetcher = StaticFetcher::new().with("/v1/ruku/5/quran-uthmani", RUKU_SAMPLE);
        let picker = picker(fetcher);

        let passage = picker.passage(5).await.unwrap();
        assert_eq!(passage.verse_number, 23);
        assert_eq!(passage.chapter_name, "Al-Baqara");
    }

    #[tokio::test]
    async fn test_random_passage_hits_a_ruku_endpoint() {
        let fetcher = Arc::new(StaticFetcher::new());
        let picker = Picker::new(
            fetcher.clone(),
            Endpoints::new("http://api.alquran.cloud/v1", "quran-uthmani"),
        );
        let mut rng = StdRng::seed_from_u64(42);

        // Nothing is served, so the API 404 envelope comes back
        let err = picker.random_passage(&mut rng).await.unwrap_err();
        assert!(matches!(err, RukuError::Api { code: 404, .. }));

        let requests = fetcher.requests();
        assert_eq!(requests.len(), 1);
        let number: u16 = requests[0]
            .trim_start_matches("/v1/ruku/")
            .trim_end_matches("/quran-uthmani")
            .parse()
            .unwrap();
        assert!((1..=558).contains(&number));
    }

    #[tokio::test]
    async fn test_random_ruku_in_range_trims_to_bounds() {
        // Range 2:24..=2:24 sits inside ruku 5 (ayaat 30 and 31 globally)
        let fetcher = StaticFetcher::new()
            .with("/v1/ayah/2:24/quran-uthmani", ayah_body(31, 2, 24, 5))
            .with("/v1/ruku/5/quran-uthmani", RUKU_SAMPLE);
        let picker = picker(fetcher);
        let mut rng = StdRng::seed_from_u64(3);

        let ruku = picker
            .random_ruku_in_range(AyahRef::new(2, 24), AyahRef::new(2, 24), &mut rng)
            .await
            .unwrap();

        assert_eq!(ruku.id, 5);
        assert_eq!(ruku.ayaat.len(), 1);
        assert_eq!(ruku.ayaat[0].number_in_surah, 24);
    }

    #[tokio::test]
    async fn test_random_ruku_in_range_spanning_several_rukus() {
        // 2:25 is the third ayah of ruku 5 and 2:31 the second of ruku 7
        let fetcher = StaticFetcher::new()
            .with("/v1/ayah/2:25/quran-uthmani", ayah_body(32, 2, 25, 5))
            .with("/v1/ayah/2:31/quran-uthmani", ayah_body(38, 2, 31, 7))
            .with(
                "/v1/ruku/5/quran-uthmani",
                ruku_body(5, &[(30, 23), (31, 24), (32, 25), (33, 26)]),
            )
            .with(
                "/v1/ruku/6/quran-uthmani",
                ruku_body(6, &[(34, 27), (35, 28), (36, 29)]),
            )
            .with(
                "/v1/ruku/7/quran-uthmani",
                ruku_body(7, &[(37, 30), (38, 31), (39, 32)]),
            );
        let picker = picker(fetcher);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 3];

        for _ in 0..60 {
            let ruku = picker
                .random_ruku_in_range(AyahRef::new(2, 25), AyahRef::new(2, 31), &mut rng)
                .await
                .unwrap();
            match ruku.id {
                // Head of the first ruku is cut
                5 => assert_eq!(ids(&ruku), vec![32, 33]),
                // Middle ruku is returned whole
                6 => assert_eq!(ids(&ruku), vec![34, 35, 36]),
                // Tail of the last ruku is cut
                7 => assert_eq!(ids(&ruku), vec![37, 38]),
                other => panic!("ruku {} is outside the range", other),
            }
            seen[usize::from(ruku.id - 5)] = true;
        }

        assert_eq!(seen, [true, true, true]);
    }

    #[tokio::test]
    async fn test_random_ruku_in_range_without_ayaat_between_bounds() {
        // The boundaries claim ruku 5, but the served ruku holds other ayaat
        let fetcher = StaticFetcher::new()
            .with("/v1/ayah/2:25/quran-uthmani", ayah_body(32, 2, 25, 5))
            .with("/v1/ayah/2:26/quran-uthmani", ayah_body(33, 2, 26, 5))
            .with(
                "/v1/ruku/5/quran-uthmani",
                ruku_body(5, &[(40, 33), (41, 34)]),
            );
        let picker = picker(fetcher);
        let mut rng = StdRng::seed_from_u64(3);

        let err = picker
            .random_ruku_in_range(AyahRef::new(2, 25), AyahRef::new(2, 26), &mut rng)
            .await
            .unwrap_err();
        match err {
            RukuError::InvalidRange(reason) => {
                assert!(reason.contains("ruku 5 has no ayaat between 2:25 and 2:26"))
            }
            other => panic!("expected InvalidRange, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_random_ruku_in_range_rejects_reversed_range() {
        let picker = picker(StaticFetcher::new());
        let mut rng = StdRng::seed_from_u64(3);

        let err = picker
            .random_ruku_in_range(AyahRef::new(3, 1), AyahRef::new(2, 1), &mut rng)
            .await
            .unwrap_err();
        assert!(matches!(err, RukuError::InvalidRange(_)));
    }

    #[tokio::test]
    async fn test_catalogue() {
        let body = r#"{"code":200,"status":"OK","data":[
            {"number":1,"name":"ف","englishName":"Al-Faatiha","numberOfAyahs":7},
            {"number":2,"name":"ب","englishName":"Al-Baqara","numberOfAyahs":286}
        ]}"#;
        let picker = picker(StaticFetcher::new().with("/v1/surah", body));

        let catalogue = picker.catalogue().await.unwrap();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.resolve("baqara:5").unwrap(), AyahRef::new(2, 5));
    }
}
