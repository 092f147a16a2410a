use serde::{Deserialize, Serialize};

/// Chart variant of a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongType {
    Standard,
    Dx,
    Utage,
}

/// Difficulty slot of a chart, BASIC through Re:MASTER
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LevelIndex {
    Basic = 0,
    Advanced = 1,
    Expert = 2,
    Master = 3,
    ReMaster = 4,
}

impl TryFrom<u8> for LevelIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LevelIndex::Basic),
            1 => Ok(LevelIndex::Advanced),
            2 => Ok(LevelIndex::Expert),
            3 => Ok(LevelIndex::Master),
            4 => Ok(LevelIndex::ReMaster),
            other => Err(format!("invalid level index: {other}")),
        }
    }
}

impl From<LevelIndex> for u8 {
    fn from(value: LevelIndex) -> Self {
        value as u8
    }
}

/// Clear rank. Variants are declared best first, so `<=` means "at least as good".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    Sssp,
    Sss,
    Ssp,
    Ss,
    Sp,
    S,
    Aaa,
    Aa,
    A,
    Bbb,
    Bb,
    B,
    C,
    D,
}

impl RateType {
    /// Rank reached by an achievement percentage
    pub fn from_achievement(achievements: f64) -> Self {
        const CUTOFFS: [(f64, RateType); 13] = [
            (100.5, RateType::Sssp),
            (100.0, RateType::Sss),
            (99.5, RateType::Ssp),
            (99.0, RateType::Ss),
            (98.0, RateType::Sp),
            (97.0, RateType::S),
            (94.0, RateType::Aaa),
            (90.0, RateType::Aa),
            (80.0, RateType::A),
            (75.0, RateType::Bbb),
            (70.0, RateType::Bb),
            (60.0, RateType::B),
            (50.0, RateType::C),
        ];
        CUTOFFS
            .iter()
            .find(|(cutoff, _)| achievements >= *cutoff)
            .map(|(_, rate)| *rate)
            .unwrap_or(RateType::D)
    }
}

/// Full combo tier, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FCType {
    App,
    Ap,
    Fcp,
    Fc,
}

/// Full sync tier, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FSType {
    Fsdp,
    Fsd,
    Fsp,
    Fs,
    Sync,
}

/// Game versions with the ordinal stamps used by the song catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Version {
    Maimai,
    MaimaiPlus,
    MaimaiGreen,
    MaimaiGreenPlus,
    MaimaiOrange,
    MaimaiOrangePlus,
    MaimaiPink,
    MaimaiPinkPlus,
    MaimaiMurasaki,
    MaimaiMurasakiPlus,
    MaimaiMilk,
    MaimaiMilkPlus,
    MaimaiFinale,
    MaimaiDx,
    MaimaiDxPlus,
    MaimaiDxSplash,
    MaimaiDxSplashPlus,
    MaimaiDxUniverse,
    MaimaiDxUniversePlus,
    MaimaiDxFestival,
    MaimaiDxFestivalPlus,
    MaimaiDxBuddies,
    MaimaiDxBuddiesPlus,
    MaimaiDxPrism,
}

impl Version {
    pub const ALL: [Version; 24] = [
        Version::Maimai,
        Version::MaimaiPlus,
        Version::MaimaiGreen,
        Version::MaimaiGreenPlus,
        Version::MaimaiOrange,
        Version::MaimaiOrangePlus,
        Version::MaimaiPink,
        Version::MaimaiPinkPlus,
        Version::MaimaiMurasaki,
        Version::MaimaiMurasakiPlus,
        Version::MaimaiMilk,
        Version::MaimaiMilkPlus,
        Version::MaimaiFinale,
        Version::MaimaiDx,
        Version::MaimaiDxPlus,
        Version::MaimaiDxSplash,
        Version::MaimaiDxSplashPlus,
        Version::MaimaiDxUniverse,
        Version::MaimaiDxUniversePlus,
        Version::MaimaiDxFestival,
        Version::MaimaiDxFestivalPlus,
        Version::MaimaiDxBuddies,
        Version::MaimaiDxBuddiesPlus,
        Version::MaimaiDxPrism,
    ];

    /// First ordinal of the DX era; everything below is a legacy version
    pub const DX_ERA: u32 = 20000;

    pub fn ordinal(self) -> u32 {
        match self {
            Version::Maimai => 10000,
            Version::MaimaiPlus => 11000,
            Version::MaimaiGreen => 12000,
            Version::MaimaiGreenPlus => 13000,
            Version::MaimaiOrange => 14000,
            Version::MaimaiOrangePlus => 15000,
            Version::MaimaiPink => 16000,
            Version::MaimaiPinkPlus => 17000,
            Version::MaimaiMurasaki => 18000,
            Version::MaimaiMurasakiPlus => 18500,
            Version::MaimaiMilk => 19000,
            Version::MaimaiMilkPlus => 19500,
            Version::MaimaiFinale => 19900,
            Version::MaimaiDx => 20000,
            Version::MaimaiDxPlus => 20500,
            Version::MaimaiDxSplash => 21000,
            Version::MaimaiDxSplashPlus => 21500,
            Version::MaimaiDxUniverse => 22000,
            Version::MaimaiDxUniversePlus => 22500,
            Version::MaimaiDxFestival => 23000,
            Version::MaimaiDxFestivalPlus => 23500,
            Version::MaimaiDxBuddies => 24000,
            Version::MaimaiDxBuddiesPlus => 24500,
            Version::MaimaiDxPrism => 25000,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.ordinal() == ordinal)
    }

    pub fn latest() -> Self {
        Version::MaimaiDxPrism
    }
}
