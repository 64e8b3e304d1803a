use indexmap::IndexMap;

use super::MenuItem;

/// Read-only menu catalog keyed by category, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: IndexMap<String, Vec<MenuItem>>,
}

impl FromIterator<(String, Vec<MenuItem>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<MenuItem>)>>(iter: I) -> Self {
        let mut categories: IndexMap<String, Vec<MenuItem>> = IndexMap::new();
        // A repeated category keeps its first position and appends the items
        for (category, items) in iter {
            categories.entry(category).or_default().extend(items);
        }
        Self { categories }
    }
}

impl Catalog {
    /// Category names in catalog order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Menu items of a category, if the category exists
    pub fn items(&self, category: &str) -> Option<&[MenuItem]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Iterates categories with their items in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MenuItem])> {
        self.categories
            .iter()
            .map(|(category, items)| (category.as_str(), items.as_slice()))
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of menu items across all categories
    pub fn menu_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// The built-in lunch table used when no data directory is configured
    pub fn builtin() -> Self {
        BUILTIN_MENUS
            .iter()
            .map(|(category, items)| {
                let items = items
                    .iter()
                    .map(|(name, level)| MenuItem::new(*name, *level))
                    .collect();
                (category.to_string(), items)
            })
            .collect()
    }
}

type CategoryTable = (&'static str, &'static [(&'static str, u8)]);

const BUILTIN_MENUS: &[CategoryTable] = &[
    (
        "한식",
        &[
            ("된장찌개", 0),
            ("김치찌개", 2),
            ("비빔밥", 1),
            ("불고기", 0),
            ("갈비탕", 0),
            ("냉면", 0),
            ("비빔냉면", 1),
            ("떡볶이", 2),
            ("제육볶음", 2),
            ("순두부찌개", 1),
            ("삼겹살", 0),
        ],
    ),
    (
        "중식",
        &[
            ("짜장면", 0),
            ("짬뽕", 2),
            ("탕수육", 0),
            ("양장피", 0),
            ("마파두부", 2),
            ("볶음밥", 0),
            ("울면", 0),
            ("깐풍기", 1),
            ("유린기", 0),
            ("멘보샤", 0),
        ],
    ),
    (
        "일식",
        &[
            ("초밥", 0),
            ("라멘", 0),
            ("돈까스", 0),
            ("우동", 0),
            ("가츠동", 0),
            ("규동", 0),
            ("덮밥", 0),
            ("오코노미야끼", 0),
            ("타코야끼", 0),
            ("소바", 0),
        ],
    ),
    (
        "양식",
        &[
            ("파스타", 0),
            ("피자", 0),
            ("햄버거", 0),
            ("스테이크", 0),
            ("샌드위치", 0),
            ("리조또", 0),
            ("오믈렛", 0),
            ("시저샐러드", 0),
            ("타코", 1),
            ("부리또", 1),
        ],
    ),
    (
        "베트남음식",
        &[
            ("쌀국수", 0),
            ("월남쌈", 0),
            ("반미", 0),
            ("분짜", 0),
            ("짜조", 0),
            ("반세오", 0),
            ("분보후에", 1),
            ("반컴", 0),
            ("껌승", 0),
        ],
    ),
    (
        "태국음식",
        &[
            ("팟타이", 1),
            ("톰얌꿍", 2),
            ("그린커리", 2),
            ("쏨땀", 3),
            ("카오팟", 0),
            ("똠까가이", 2),
            ("카오팟 푸", 0),
            ("팟크라파오", 2),
            ("푸팟퐁커리", 1),
        ],
    ),
    (
        "인도음식",
        &[
            ("커리", 1),
            ("탄두리 치킨", 1),
            ("난", 0),
            ("사모사", 1),
            ("티카마살라", 1),
            ("팔락 파니르", 0),
            ("비리야니", 1),
            ("라씨", 0),
            ("라지마", 1),
        ],
    ),
    (
        "동남아음식",
        &[
            ("나시고랭", 1),
            ("사테이", 0),
            ("레당", 0),
            ("락사", 1),
            ("미고랭", 1),
            ("아얌 고랭", 1),
            ("롬", 0),
            ("바쿠테", 0),
        ],
    ),
];
