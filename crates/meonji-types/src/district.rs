/// One of Seoul's autonomous districts and the identifiers it can be
/// addressed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct District {
    /// Romanized name, e.g. `jongno`
    pub short: &'static str,
    /// Romanized name with the `-gu` suffix, e.g. `jongnogu`
    pub long: &'static str,
    /// Six-digit station code used by the measurement feed
    pub code: &'static str,
    /// Korean display name, e.g. `종로구`
    pub name: &'static str,
}

const fn district(
    short: &'static str,
    long: &'static str,
    code: &'static str,
    name: &'static str,
) -> District {
    District {
        short,
        long,
        code,
        name,
    }
}

pub static DISTRICTS: [District; 25] = [
    district("jongno", "jongnogu", "111123", "종로구"),
    district("jung", "junggu", "111121", "중구"),
    district("yongsan", "yongsangu", "111131", "용산구"),
    district("seongdong", "seongdonggu", "111142", "성동구"),
    district("gwangjin", "gwangjingu", "111141", "광진구"),
    district("dongdaemun", "dongdaemungu", "111152", "동대문구"),
    district("jungnang", "jungnanggu", "111151", "중랑구"),
    district("seongbuk", "seongbukgu", "111161", "성북구"),
    district("gangbuk", "gangbukgu", "111291", "강북구"),
    district("dobong", "dobonggu", "111171", "도봉구"),
    district("nowon", "nowongu", "111311", "노원구"),
    district("eunpyeong", "eunpyeonggu", "111181", "은평구"),
    district("seodaemun", "seodaemungu", "111191", "서대문구"),
    district("mapo", "mapogu", "111201", "마포구"),
    district("yangcheon", "yangcheongu", "111301", "양천구"),
    district("gangseo", "gangseogu", "111212", "강서구"),
    district("guro", "gurogu", "111221", "구로구"),
    district("geumcheon", "geumcheongu", "111281", "금천구"),
    district("yeongdeungpo", "yeongdeungpogu", "111231", "영등포구"),
    district("dongjak", "dongjakgu", "111241", "동작구"),
    district("gwanak", "gwanakgu", "111251", "관악구"),
    district("seocho", "seochogu", "111262", "서초구"),
    district("gangnam", "gangnamgu", "111261", "강남구"),
    district("songpa", "songpagu", "111273", "송파구"),
    district("gangdong", "gangdonggu", "111274", "강동구"),
];

impl District {
    /// Find a district by short name, `-gu` name or station code.
    /// Matching ignores case and surrounding whitespace.
    pub fn lookup(key: &str) -> Option<&'static District> {
        let key = key.trim().to_lowercase();
        DISTRICTS
            .iter()
            .find(|d| d.short == key || d.long == key || d.code == key)
    }
}
