pub mod ayah;
pub mod ruku;
pub mod surah;

pub use ayah::{Ayah, AyahRef};
pub use ruku::{Passage, Ruku, RUKU_COUNT};
pub use surah::{Revelation, Surah};
