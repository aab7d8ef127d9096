use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::app::{Result, RukuError};
use crate::domain::{Ayah, Passage, Revelation, Ruku, Surah};

/// `{ "code": 200, "status": "OK", "data": ... }`. Error bodies carry a
/// string in `data`, so the payload is decoded only after the code is checked.
#[derive(Debug, Deserialize)]
struct Envelope {
    code: Option<u16>,
    status: Option<String>,
    data: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSurah {
    #[serde(default)]
    number: u16,
    #[serde(default)]
    name: String,
    english_name: String,
    #[serde(default)]
    english_name_translation: String,
    #[serde(default)]
    number_of_ayahs: u16,
    #[serde(default)]
    revelation_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAyah {
    #[serde(default)]
    number: u32,
    text: String,
    number_in_surah: i64,
    surah: Option<WireSurah>,
    #[serde(default)]
    ruku: u16,
    #[serde(default)]
    hizb_quarter: u16,
    #[serde(default)]
    juz: u8,
}

#[derive(Debug, Deserialize)]
struct WireRuku {
    #[serde(default)]
    number: u16,
    ayahs: Vec<WireAyah>,
}

/// Turns alquran.cloud response bodies into domain values.
#[derive(Debug, Clone, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Opening verse of a ruku response: `data.ayahs[0]`.
    pub fn passage(&self, body: &[u8]) -> Result<Passage> {
        let ruku: WireRuku = decode_data(body)?;
        let first = ruku
            .ayahs
            .into_iter()
            .next()
            .ok_or(RukuError::MissingField("data.ayahs[0]"))?;

        let verse_number = verse_number(first.number_in_surah)?;
        let surah = first
            .surah
            .ok_or(RukuError::MissingField("data.ayahs[0].surah"))?;
        let chapter_name = non_empty(surah.english_name, "surah.englishName")?;

        Ok(Passage {
            text: first.text,
            verse_number,
            chapter_name,
        })
    }

    pub fn ruku(&self, body: &[u8]) -> Result<Ruku> {
        let wire: WireRuku = decode_data(body)?;
        let mut ayahs = wire.ayahs.into_iter();

        let first = ayahs.next().ok_or(RukuError::MissingField("data.ayahs[0]"))?;
        let surah = first
            .surah
            .as_ref()
            .ok_or(RukuError::MissingField("data.ayahs[0].surah"))
            .and_then(to_surah)?;

        let mut ayaat = vec![to_ayah(first, surah.number)?];
        for wire_ayah in ayahs {
            let surah_number = wire_ayah.surah.as_ref().map_or(surah.number, |s| s.number);
            ayaat.push(to_ayah(wire_ayah, surah_number)?);
        }

        let id = if wire.number > 0 {
            wire.number
        } else {
            ayaat[0].ruku
        };

        Ok(Ruku {
            id,
            surah,
            ayaat,
            start_index: 0,
        })
    }

    /// Single-ayah response, returned together with its surah.
    pub fn ayah(&self, body: &[u8]) -> Result<(Ayah, Surah)> {
        let wire: WireAyah = decode_data(body)?;
        let surah = wire
            .surah
            .as_ref()
            .ok_or(RukuError::MissingField("data.surah"))
            .and_then(to_surah)?;
        let ayah = to_ayah(wire, surah.number)?;
        Ok((ayah, surah))
    }

    pub fn suwar(&self, body: &[u8]) -> Result<Vec<Surah>> {
        let wire: Vec<WireSurah> = decode_data(body)?;
        wire.iter().map(to_surah).collect()
    }
}

fn decode_data<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    if let Some(code) = envelope.code {
        if code != 200 {
            return Err(RukuError::Api {
                code,
                status: envelope.status.unwrap_or_default(),
            });
        }
    }

    let data = envelope.data.ok_or(RukuError::MissingField("data"))?;
    Ok(serde_json::from_value(data)?)
}

fn verse_number(raw: i64) -> Result<u32> {
    match u32::try_from(raw) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RukuError::UnexpectedValue {
            field: "numberInSurah",
            value: raw.to_string(),
        }),
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(RukuError::UnexpectedValue {
            field,
            value: format!("{:?}", value),
        });
    }
    Ok(value)
}

fn to_surah(wire: &WireSurah) -> Result<Surah> {
    let revelation = match wire.revelation_type.as_deref() {
        Some("Meccan") => Some(Revelation::Meccan),
        Some("Medinan") => Some(Revelation::Medinan),
        _ => None,
    };

    Ok(Surah {
        number: wire.number,
        arabic: wire.name.clone(),
        english: non_empty(wire.english_name.clone(), "surah.englishName")?,
        english_translation: wire.english_name_translation.clone(),
        ayah_count: wire.number_of_ayahs,
        revelation,
    })
}

fn to_ayah(wire: WireAyah, surah: u16) -> Result<Ayah> {
    let number_in_surah = verse_number(wire.number_in_surah)?;
    let number_in_surah =
        u16::try_from(number_in_surah).map_err(|_| RukuError::UnexpectedValue {
            field: "numberInSurah",
            value: number_in_surah.to_string(),
        })?;

    Ok(Ayah {
        id: wire.number,
        surah,
        number_in_surah,
        text: wire.text,
        ruku: wire.ruku,
        hizb_quarter: wire.hizb_quarter,
        juz: wire.juz,
    })
}
