//! Fixed display labels. The browser ships a single label set.

pub const UNKNOWN: &str = "미확인";
pub const NOT_AVAILABLE: &str = "N/A";

pub const CONTENT_PENDING: &str = "정보가 준비 중입니다.";
pub const DETAIL_TITLE: &str = "상세 정보";
pub const BASIC_INFO_TITLE: &str = "기본 정보";

pub const NO_ENTRIES: &str = "표시할 몬스터가 없습니다.";
pub const INVALID_SELECTION: &str = "선택한 몬스터 정보를 찾을 수 없습니다.";
pub const LOAD_FAILED: &str = "데이터를 불러오는 데 실패했습니다";
pub const LOADING: &str = "데이터를 불러오는 중...";

pub const LIST_TITLE: &str = "몬스터";
pub const TAB_GUIDE: &str = "가이드";
pub const TAB_SETTINGS: &str = "설정";

pub const SETTING_VIEW_MODE: &str = "보기 방식";
pub const SETTING_ITEMS_PER_PAGE: &str = "페이지당 항목 수";
pub const SETTING_DARK_MODE: &str = "다크 모드";
pub const SETTING_IMAGE_MODE: &str = "이미지 표시";
pub const SETTING_THICK_BORDER: &str = "굵은 테두리";

pub const VIEW_MODE_CARD: &str = "카드";
pub const VIEW_MODE_PAGINATED: &str = "페이지";

pub const ATTR_CATALOG_NUMBER: &str = "도감번호";
pub const ATTR_NAME: &str = "이름";
pub const ATTR_SPECIES: &str = "종류";
pub const ATTR_RARITY: &str = "희귀도";
pub const ATTR_LOCATION: &str = "출현지역";
pub const ATTR_NORMAL_PATTERN: &str = "일반패턴";
pub const ATTR_RAGE_PATTERN: &str = "분노패턴";
pub const ATTR_SPECIAL_PATTERN_1: &str = "특수패턴1";
pub const ATTR_SPECIAL_PATTERN_2: &str = "특수패턴2";
pub const ATTR_ATTACK_ELEMENT: &str = "공격속성";
pub const ATTR_WEAKNESS_ELEMENT: &str = "약점속성";

/// Message shown in the list area when the catalog could not be loaded.
pub fn load_failed(message: &str) -> String {
    format!("{LOAD_FAILED}: {message}")
}
