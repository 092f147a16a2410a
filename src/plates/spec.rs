use crate::enums::{FCType, FSType, RateType, Version};
use crate::error::{MaimaiError, Result};
use crate::models::Score;

/// Goal of a plate, named after its suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlateKind {
    /// 者: at least A on every chart
    Clear,
    /// 将: at least SSS
    Sss,
    /// 极: any full combo
    FullCombo,
    /// 舞舞: at least FDX
    FullSyncDx,
    /// 神: at least AP
    AllPerfect,
}

impl PlateKind {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "者" => Some(PlateKind::Clear),
            "将" => Some(PlateKind::Sss),
            "极" | "極" => Some(PlateKind::FullCombo),
            "舞舞" => Some(PlateKind::FullSyncDx),
            "神" => Some(PlateKind::AllPerfect),
            _ => None,
        }
    }

    /// Whether a score satisfies this goal on its chart
    pub fn is_met_by(self, score: &Score) -> bool {
        match self {
            PlateKind::Clear => score.rate <= RateType::A,
            PlateKind::Sss => score.rate <= RateType::Sss,
            PlateKind::FullCombo => score.fc.is_some_and(|fc| fc <= FCType::Fc),
            PlateKind::FullSyncDx => score.fs.is_some_and(|fs| fs <= FSType::Fsd),
            PlateKind::AllPerfect => score.fc.is_some_and(|fc| fc <= FCType::Ap),
        }
    }
}

/// A parsed plate name such as `真将` or `舞舞舞`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateSpec {
    pub version_token: char,
    pub versions: Vec<u32>,
    pub kind: PlateKind,
    /// Re:MASTER charts only count for the 舞 and 霸 plates
    pub no_remaster: bool,
}

/// Simplified and variant spellings mapped onto the canonical token
fn normalize_version_token(token: char) -> char {
    match token {
        '晓' => '暁',
        '樱' => '櫻',
        '堇' => '菫',
        '辉' => '輝',
        '华' => '華',
        '覇' => '霸',
        other => other,
    }
}

fn version_of(token: char) -> Option<Version> {
    let version = match token {
        '初' => Version::Maimai,
        '真' => Version::MaimaiPlus,
        '超' => Version::MaimaiGreen,
        '檄' => Version::MaimaiGreenPlus,
        '橙' => Version::MaimaiOrange,
        '暁' => Version::MaimaiOrangePlus,
        '桃' => Version::MaimaiPink,
        '櫻' => Version::MaimaiPinkPlus,
        '紫' => Version::MaimaiMurasaki,
        '菫' => Version::MaimaiMurasakiPlus,
        '白' => Version::MaimaiMilk,
        '雪' => Version::MaimaiMilkPlus,
        '輝' => Version::MaimaiFinale,
        '熊' => Version::MaimaiDx,
        '華' => Version::MaimaiDxPlus,
        '爽' => Version::MaimaiDxSplash,
        '煌' => Version::MaimaiDxSplashPlus,
        '宙' => Version::MaimaiDxUniverse,
        '星' => Version::MaimaiDxUniversePlus,
        '祭' => Version::MaimaiDxFestival,
        '祝' => Version::MaimaiDxFestivalPlus,
        '双' => Version::MaimaiDxBuddies,
        '宴' => Version::MaimaiDxBuddiesPlus,
        _ => return None,
    };
    Some(version)
}

/// DX-era PLUS tokens cover their base version as well
fn base_of_plus(token: char) -> Option<Version> {
    match token {
        '華' => Some(Version::MaimaiDx),
        '煌' => Some(Version::MaimaiDxSplash),
        '星' => Some(Version::MaimaiDxUniverse),
        '祝' => Some(Version::MaimaiDxFestival),
        '宴' => Some(Version::MaimaiDxBuddies),
        _ => None,
    }
}

fn resolve_versions(token: char) -> Vec<u32> {
    match token {
        '真' => vec![Version::Maimai.ordinal(), Version::MaimaiPlus.ordinal()],
        '舞' | '霸' => Version::ALL
            .iter()
            .map(|v| v.ordinal())
            .filter(|&ordinal| ordinal < Version::DX_ERA)
            .collect(),
        other => base_of_plus(other)
            .into_iter()
            .chain(version_of(other))
            .map(|v| v.ordinal())
            .collect(),
    }
}

/// Whether a chart stamp falls in the band of an era: the era ordinal plus a
/// revision offset below 100. Finale (19900) sits 100 below the first DX
/// stamp, so the offset bound is exclusive.
pub fn in_era(chart_version: u32, era: u32) -> bool {
    chart_version >= era && chart_version - era < 100
}

impl PlateSpec {
    pub fn parse(plate: &str) -> Result<Self> {
        let invalid = || MaimaiError::InvalidPlate(plate.to_string());

        let mut chars = plate.chars();
        let version_token = normalize_version_token(chars.next().ok_or_else(invalid)?);
        let kind = PlateKind::from_token(chars.as_str()).ok_or_else(invalid)?;

        let versions = resolve_versions(version_token);
        if versions.is_empty() {
            return Err(invalid());
        }

        Ok(PlateSpec {
            version_token,
            versions,
            kind,
            no_remaster: !matches!(version_token, '舞' | '霸'),
        })
    }

    /// Whether a chart stamp belongs to any era this plate covers
    pub fn covers(&self, chart_version: u32) -> bool {
        self.versions.iter().any(|&era| in_era(chart_version, era))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{LevelIndex, SongType};
    use crate::test_fixtures::create_test_score;

    #[test]
    fn test_parse_single_version_plate() {
        let plate = PlateSpec::parse("橙将").unwrap();
        assert_eq!(plate.versions, vec![14000]);
        assert_eq!(plate.kind, PlateKind::Sss);
        assert!(plate.no_remaster);
    }

    #[test]
    fn test_parse_banded_plates() {
        let shin = PlateSpec::parse("真极").unwrap();
        assert_eq!(shin.versions, vec![10000, 11000]);

        let mai = PlateSpec::parse("舞舞舞").unwrap();
        assert_eq!(mai.kind, PlateKind::FullSyncDx);
        assert!(!mai.no_remaster);
        assert_eq!(mai.versions.len(), 13);
        assert!(mai.versions.iter().all(|&v| v < 20000));

        let ha = PlateSpec::parse("覇者").unwrap();
        assert_eq!(ha.version_token, '霸');
        assert!(!ha.no_remaster);
    }

    #[test]
    fn test_parse_variant_spellings() {
        assert_eq!(PlateSpec::parse("晓将").unwrap().versions, vec![15000]);
        assert_eq!(PlateSpec::parse("华極").unwrap().kind, PlateKind::FullCombo);
        assert_eq!(PlateSpec::parse("熊神").unwrap().versions, vec![20000]);
        assert_eq!(PlateSpec::parse("华将").unwrap().versions, vec![20000, 20500]);
    }

    #[test]
    fn test_plus_tokens_cover_base_and_plus_versions() {
        for (plate, base) in [("華将", 20000), ("煌将", 21000), ("星将", 22000), ("祝将", 23000), ("宴将", 24000)] {
            let spec = PlateSpec::parse(plate).unwrap();
            assert_eq!(spec.versions, vec![base, base + 500], "{plate}");
            assert!(spec.covers(base + 500));
        }
        assert!(!PlateSpec::parse("熊将").unwrap().covers(20500));
    }

    #[test]
    fn test_parse_rejects_invalid_plates() {
        for plate in ["", "将", "真", "真真", "X将", "舞舞舞舞", "真将将"] {
            assert!(
                matches!(PlateSpec::parse(plate), Err(MaimaiError::InvalidPlate(_))),
                "{plate} should be rejected"
            );
        }
    }

    #[test]
    fn test_era_band() {
        assert!(in_era(10000, 10000));
        assert!(in_era(10099, 10000));
        assert!(!in_era(10100, 10000));
        assert!(!in_era(20000, 19900));
        assert!(!in_era(20000, 10000));
        assert!(!in_era(9999, 10000));
    }

    #[test]
    fn test_kind_thresholds() {
        let mut score = create_test_score(1, SongType::Standard, LevelIndex::Master, 100.0, 250.0);
        assert!(PlateKind::Sss.is_met_by(&score));
        assert!(PlateKind::Clear.is_met_by(&score));
        assert!(!PlateKind::FullCombo.is_met_by(&score));

        score.fc = Some(FCType::Fcp);
        assert!(PlateKind::FullCombo.is_met_by(&score));
        assert!(!PlateKind::AllPerfect.is_met_by(&score));
        score.fc = Some(FCType::App);
        assert!(PlateKind::AllPerfect.is_met_by(&score));

        score.fs = Some(FSType::Fsp);
        assert!(!PlateKind::FullSyncDx.is_met_by(&score));
        score.fs = Some(FSType::Fsd);
        assert!(PlateKind::FullSyncDx.is_met_by(&score));

        let low = create_test_score(1, SongType::Standard, LevelIndex::Master, 79.9, 50.0);
        assert!(!PlateKind::Clear.is_met_by(&low));
    }
}
