use std::fmt;

use clap::ValueEnum;

/// A pillar category.
///
/// The variable name doubles as the search term used when scanning pillar
/// files and as the name of the variable set by the generated effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Category {
    HeritageGroup,
    HeritageFamily,
    LanguageGroup,
    LanguageFamily,
}

impl Category {
    /// All categories, in the order their chains appear in the effect file.
    pub const ALL: [Category; 4] = [
        Category::HeritageGroup,
        Category::HeritageFamily,
        Category::LanguageGroup,
        Category::LanguageFamily,
    ];

    pub fn variable_name(self) -> &'static str {
        match self {
            Category::HeritageGroup => "heritage_group",
            Category::HeritageFamily => "heritage_family",
            Category::LanguageGroup => "language_group",
            Category::LanguageFamily => "language_family",
        }
    }

    /// Word delimiter used when building display labels.
    pub fn delimiter(self) -> &'static str {
        match self {
            Category::HeritageFamily => " ",
            Category::HeritageGroup | Category::LanguageGroup | Category::LanguageFamily => "-",
        }
    }

    /// Human-readable plural, used in progress output.
    pub fn plural(self) -> &'static str {
        match self {
            Category::HeritageGroup => "heritage groups",
            Category::HeritageFamily => "heritage families",
            Category::LanguageGroup => "language groups",
            Category::LanguageFamily => "language families",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variable_name())
    }
}
