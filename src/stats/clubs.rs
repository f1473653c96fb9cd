/// Club identifiers tracked when no custom list is configured
pub const STANDARD_CLUBS: [&str; 29] = [
    "driver", "3w", "5w", "7w", "0i", "0hy", "1i", "1hy", "2i", "2hy", "3i", "3hy", "4i", "4hy",
    "5i", "5hy", "6i", "6hy", "7i", "7hy", "8i", "8hy", "9i", "9hy", "pw", "gw", "sw", "lw",
    "putter",
];

/// The closed set of club identifiers a statistics summary is initialized with.
///
/// Order is significant: it is the order clubs appear in the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubSet {
    names: Vec<String>,
}

impl Default for ClubSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl ClubSet {
    /// The standard bag: woods, irons and hybrids 0-9, wedges, putter
    pub fn standard() -> Self {
        Self::new(STANDARD_CLUBS)
    }

    /// Build a club set from identifiers. Identifiers are normalized and
    /// duplicates after the first occurrence are dropped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = Self::normalize(name.as_ref());
            if !name.is_empty() && !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    /// Normalize user input into identifier form (trimmed, lowercase)
    pub fn normalize(input: &str) -> String {
        input.trim().to_lowercase()
    }

    pub fn contains(&self, club: &str) -> bool {
        self.names.iter().any(|name| name == club)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_standard(&self) -> bool {
        self.names.iter().map(String::as_str).eq(STANDARD_CLUBS)
    }
}
