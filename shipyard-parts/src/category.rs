//! Part categories and keyword classification

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    Engine,
    Fuselage,
    Cabin,
    Wings,
    Armour,
    Weapon,
}

/// Classification order. The first keyword found in a line wins.
///
/// `Armour` is matched by `armor`; part files use the short spelling.
pub const KEYWORD_TABLE: [(&str, Category); Category::COUNT] = [
    ("engine", Category::Engine),
    ("fuselage", Category::Fuselage),
    ("cabin", Category::Cabin),
    ("wings", Category::Wings),
    ("armor", Category::Armour),
    ("weapon", Category::Weapon),
];

impl Category {
    pub const COUNT: usize = 6;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Engine,
        Self::Fuselage,
        Self::Cabin,
        Self::Wings,
        Self::Armour,
        Self::Weapon,
    ];

    /// Stable slot used to index per-category storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Engine => 0,
            Self::Fuselage => 1,
            Self::Cabin => 2,
            Self::Wings => 3,
            Self::Armour => 4,
            Self::Weapon => 5,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Engine => "engine",
            Self::Fuselage => "fuselage",
            Self::Cabin => "cabin",
            Self::Wings => "wings",
            Self::Armour => "armour",
            Self::Weapon => "weapon",
        }
    }

    /// Keyword a part line must contain to land in this category.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        KEYWORD_TABLE
            .iter()
            .find(|(_, category)| *category == self)
            .map_or("", |(keyword, _)| keyword)
    }

    /// Classify a part line by scanning [`KEYWORD_TABLE`] in order.
    ///
    /// Keywords may appear anywhere in the line. Returns `None` when no
    /// keyword matches.
    #[must_use]
    pub fn classify(line: &str) -> Option<Self> {
        KEYWORD_TABLE
            .iter()
            .find(|(keyword, _)| line.contains(*keyword))
            .map(|(_, category)| *category)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_table_order() {
        for (slot, (_, category)) in KEYWORD_TABLE.iter().enumerate() {
            assert_eq!(category.index(), slot);
            assert_eq!(Category::ALL[slot], *category);
        }
    }

    #[test]
    fn keyword_matches_anywhere_in_line() {
        assert_eq!(Category::classify("xengine-mk2"), Some(Category::Engine));
        assert_eq!(
            Category::classify("heavy fuselage frame"),
            Some(Category::Fuselage)
        );
        assert_eq!(Category::classify("pilot_cabin"), Some(Category::Cabin));
    }

    #[test]
    fn earlier_keyword_wins() {
        assert_eq!(
            Category::classify("weapon mount for engine"),
            Some(Category::Engine)
        );
        assert_eq!(
            Category::classify("cabin with wings"),
            Some(Category::Cabin)
        );
        assert_eq!(
            Category::classify("armor plated weapon"),
            Some(Category::Armour)
        );
    }

    #[test]
    fn armour_spelling_is_not_a_keyword() {
        assert_eq!(Category::classify("reactive armour"), None);
        assert_eq!(Category::classify("reactive armor"), Some(Category::Armour));
        assert_eq!(Category::Armour.keyword(), "armor");
        assert_eq!(Category::Armour.label(), "armour");
    }

    #[test]
    fn unmatched_lines_have_no_category() {
        assert_eq!(Category::classify(""), None);
        assert_eq!(Category::classify("ENGINE"), None);
        assert_eq!(Category::classify("single wing"), None);
    }
}
