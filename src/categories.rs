use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Topical tag assigned to an entry. Declaration order fixes the order
/// categories are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Technical,
    Documentation,
    Process,
    Collaboration,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Documentation => "documentation",
            Category::Process => "process",
            Category::Collaboration => "collaboration",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pattern groups tested independently against the lower-cased entry text.
/// The taxonomy is data: extending a group means adding a row here.
const CATEGORY_TABLE: [(Category, &[&str]); 4] = [
    (
        Category::Technical,
        &[
            r"implement(ed|ing)",
            r"refactor(ed|ing)",
            r"optimiz(ed|ing)",
            r"enhanc(ed|ing)",
            r"fix(ed|ing)",
            r"updat(ed|ing)",
        ],
    ),
    (
        Category::Documentation,
        &[r"document(ed|ing)", r"readme", r"instruct(ed|ing)"],
    ),
    (
        Category::Process,
        &[r"improv(ed|ing)", r"streamlin(ed|ing)", r"automat(ed|ing)"],
    ),
    (
        Category::Collaboration,
        &[
            r"coordinat(ed|ing)",
            r"collaborat(ed|ing)",
            r"led",
            r"facilitat(ed|ing)",
        ],
    ),
];

static COMPILED: LazyLock<Vec<(Category, Vec<Regex>)>> = LazyLock::new(|| {
    CATEGORY_TABLE
        .iter()
        .map(|&(category, patterns)| {
            let regexes = patterns
                .iter()
                .map(|p| Regex::new(p).expect("category pattern compiles"))
                .collect();
            (category, regexes)
        })
        .collect()
});

/// Tag an entry with every matching category, in table order. Entries
/// matching no group are exactly `[Other]`.
pub fn categorize(entry: &str) -> Vec<Category> {
    let lower = entry.to_lowercase();
    let found: Vec<Category> = COMPILED
        .iter()
        .filter(|(_, regexes)| regexes.iter().any(|re| re.is_match(&lower)))
        .map(|&(category, _)| category)
        .collect();
    if found.is_empty() {
        vec![Category::Other]
    } else {
        found
    }
}
