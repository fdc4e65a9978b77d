use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct StatusFilter: u8 {
        const ADDED = 0b001;
        const REMOVED = 0b010;
        const MODIFIED = 0b100;
    }
}

impl StatusFilter {
    /// Parse a `--filter` value such as `AM`.
    ///
    /// `D` and `R` both select removed scripts. Returns `None` on any other
    /// character.
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c.to_ascii_uppercase() {
                'A' => filter |= Self::ADDED,
                'D' | 'R' => filter |= Self::REMOVED,
                'M' => filter |= Self::MODIFIED,
                _ => return None,
            }
        }

        Some(filter)
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A", Some(StatusFilter::ADDED))]
    #[case("dm", Some(StatusFilter::REMOVED | StatusFilter::MODIFIED))]
    #[case("R", Some(StatusFilter::REMOVED))]
    #[case("ADM", Some(StatusFilter::all()))]
    #[case("", Some(StatusFilter::empty()))]
    #[case("AX", None)]
    fn parses_filter(#[case] input: &str, #[case] expected: Option<StatusFilter>) {
        assert_eq!(StatusFilter::try_parse(input), expected);
    }
}
