use crate::constants::SURAH_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevelationPlace {
    Meccan,
    Medinan,
}

/// One entry of the static surah reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surah {
    pub number: u16,
    pub name: &'static str,
    pub ayah_count: u16,
    pub revelation_place: RevelationPlace,
}

use RevelationPlace::{Meccan, Medinan};

macro_rules! surah {
    ($num:expr, $name:expr, $count:expr, $place:expr) => {
        Surah { number: $num, name: $name, ayah_count: $count, revelation_place: $place }
    };
}

/// The 114 surahs with ayah counts per the standard Kufan numbering.
pub static SURAHS: [Surah; 114] = [
    surah!(1, "Al-Fatihah", 7, Meccan),
    surah!(2, "Al-Baqarah", 286, Medinan),
    surah!(3, "Ali 'Imran", 200, Medinan),
    surah!(4, "An-Nisa'", 176, Medinan),
    surah!(5, "Al-Ma'idah", 120, Medinan),
    surah!(6, "Al-An'am", 165, Meccan),
    surah!(7, "Al-A'raf", 206, Meccan),
    surah!(8, "Al-Anfal", 75, Medinan),
    surah!(9, "At-Tawbah", 129, Medinan),
    surah!(10, "Yunus", 109, Meccan),
    surah!(11, "Hud", 123, Meccan),
    surah!(12, "Yusuf", 111, Meccan),
    surah!(13, "Ar-Ra'd", 43, Medinan),
    surah!(14, "Ibrahim", 52, Meccan),
    surah!(15, "Al-Hijr", 99, Meccan),
    surah!(16, "An-Nahl", 128, Meccan),
    surah!(17, "Al-Isra'", 111, Meccan),
    surah!(18, "Al-Kahf", 110, Meccan),
    surah!(19, "Maryam", 98, Meccan),
    surah!(20, "Ta-Ha", 135, Meccan),
    surah!(21, "Al-Anbiya'", 112, Meccan),
    surah!(22, "Al-Hajj", 78, Medinan),
    surah!(23, "Al-Mu'minun", 118, Meccan),
    surah!(24, "An-Nur", 64, Medinan),
    surah!(25, "Al-Furqan", 77, Meccan),
    surah!(26, "Ash-Shu'ara'", 227, Meccan),
    surah!(27, "An-Naml", 93, Meccan),
    surah!(28, "Al-Qasas", 88, Meccan),
    surah!(29, "Al-'Ankabut", 69, Meccan),
    surah!(30, "Ar-Rum", 60, Meccan),
    surah!(31, "Luqman", 34, Meccan),
    surah!(32, "As-Sajdah", 30, Meccan),
    surah!(33, "Al-Ahzab", 73, Medinan),
    surah!(34, "Saba'", 54, Meccan),
    surah!(35, "Fatir", 45, Meccan),
    surah!(36, "Ya-Sin", 83, Meccan),
    surah!(37, "As-Saffat", 182, Meccan),
    surah!(38, "Sad", 88, Meccan),
    surah!(39, "Az-Zumar", 75, Meccan),
    surah!(40, "Ghafir", 85, Meccan),
    surah!(41, "Fussilat", 54, Meccan),
    surah!(42, "Ash-Shura", 53, Meccan),
    surah!(43, "Az-Zukhruf", 89, Meccan),
    surah!(44, "Ad-Dukhan", 59, Meccan),
    surah!(45, "Al-Jathiyah", 37, Meccan),
    surah!(46, "Al-Ahqaf", 35, Meccan),
    surah!(47, "Muhammad", 38, Medinan),
    surah!(48, "Al-Fath", 29, Medinan),
    surah!(49, "Al-Hujurat", 18, Medinan),
    surah!(50, "Qaf", 45, Meccan),
    surah!(51, "Adh-Dhariyat", 60, Meccan),
    surah!(52, "At-Tur", 49, Meccan),
    surah!(53, "An-Najm", 62, Meccan),
    surah!(54, "Al-Qamar", 55, Meccan),
    surah!(55, "Ar-Rahman", 78, Medinan),
    surah!(56, "Al-Waqi'ah", 96, Meccan),
    surah!(57, "Al-Hadid", 29, Medinan),
    surah!(58, "Al-Mujadilah", 22, Medinan),
    surah!(59, "Al-Hashr", 24, Medinan),
    surah!(60, "Al-Mumtahanah", 13, Medinan),
    surah!(61, "As-Saff", 14, Medinan),
    surah!(62, "Al-Jumu'ah", 11, Medinan),
    surah!(63, "Al-Munafiqun", 11, Medinan),
    surah!(64, "At-Taghabun", 18, Medinan),
    surah!(65, "At-Talaq", 12, Medinan),
    surah!(66, "At-Tahrim", 12, Medinan),
    surah!(67, "Al-Mulk", 30, Meccan),
    surah!(68, "Al-Qalam", 52, Meccan),
    surah!(69, "Al-Haqqah", 52, Meccan),
    surah!(70, "Al-Ma'arij", 44, Meccan),
    surah!(71, "Nuh", 28, Meccan),
    surah!(72, "Al-Jinn", 28, Meccan),
    surah!(73, "Al-Muzzammil", 20, Meccan),
    surah!(74, "Al-Muddaththir", 56, Meccan),
    surah!(75, "Al-Qiyamah", 40, Meccan),
    surah!(76, "Al-Insan", 31, Medinan),
    surah!(77, "Al-Mursalat", 50, Meccan),
    surah!(78, "An-Naba'", 40, Meccan),
    surah!(79, "An-Nazi'at", 46, Meccan),
    surah!(80, "'Abasa", 42, Meccan),
    surah!(81, "At-Takwir", 29, Meccan),
    surah!(82, "Al-Infitar", 19, Meccan),
    surah!(83, "Al-Mutaffifin", 36, Meccan),
    surah!(84, "Al-Inshiqaq", 25, Meccan),
    surah!(85, "Al-Buruj", 22, Meccan),
    surah!(86, "At-Tariq", 17, Meccan),
    surah!(87, "Al-A'la", 19, Meccan),
    surah!(88, "Al-Ghashiyah", 26, Meccan),
    surah!(89, "Al-Fajr", 30, Meccan),
    surah!(90, "Al-Balad", 20, Meccan),
    surah!(91, "Ash-Shams", 15, Meccan),
    surah!(92, "Al-Layl", 21, Meccan),
    surah!(93, "Ad-Duha", 11, Meccan),
    surah!(94, "Ash-Sharh", 8, Meccan),
    surah!(95, "At-Tin", 8, Meccan),
    surah!(96, "Al-'Alaq", 19, Meccan),
    surah!(97, "Al-Qadr", 5, Meccan),
    surah!(98, "Al-Bayyinah", 8, Medinan),
    surah!(99, "Az-Zalzalah", 8, Medinan),
    surah!(100, "Al-'Adiyat", 11, Meccan),
    surah!(101, "Al-Qari'ah", 11, Meccan),
    surah!(102, "At-Takathur", 8, Meccan),
    surah!(103, "Al-'Asr", 3, Meccan),
    surah!(104, "Al-Humazah", 9, Meccan),
    surah!(105, "Al-Fil", 5, Meccan),
    surah!(106, "Quraysh", 4, Meccan),
    surah!(107, "Al-Ma'un", 7, Meccan),
    surah!(108, "Al-Kawthar", 3, Meccan),
    surah!(109, "Al-Kafirun", 6, Meccan),
    surah!(110, "An-Nasr", 3, Medinan),
    surah!(111, "Al-Masad", 5, Meccan),
    surah!(112, "Al-Ikhlas", 4, Meccan),
    surah!(113, "Al-Falaq", 5, Meccan),
    surah!(114, "An-Nas", 6, Meccan),
];

/// Look up a surah by its 1-based ordinal number.
pub fn surah(number: u16) -> Option<&'static Surah> {
    if number == 0 || number > SURAH_COUNT {
        return None;
    }
    Some(&SURAHS[(number - 1) as usize])
}

pub fn ayah_count(number: u16) -> Option<u16> {
    surah(number).map(|s| s.ayah_count)
}

pub fn total_ayah_count() -> u32 {
    SURAHS.iter().map(|s| s.ayah_count as u32).sum()
}
