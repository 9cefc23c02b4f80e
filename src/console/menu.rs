//! Main menu entries and choice parsing.

/// Text printed before every choice prompt.
pub const MENU: &str = "\n=== MENU ===\n\
    1. Add Student\n\
    2. Search Student\n\
    3. Show Tree Structure\n\
    4. Exit\n";

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    SearchStudent,
    ShowTree,
    Exit,
}

/// Why a line could not be turned into a [`MenuChoice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    /// The input was not an integer.
    NotANumber,
    /// The input was an integer outside 1-4.
    OutOfRange(i64),
}

impl MenuChoice {
    /// Map a menu number to its entry.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::AddStudent),
            2 => Some(MenuChoice::SearchStudent),
            3 => Some(MenuChoice::ShowTree),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Parse one line of user input.
    pub fn parse(line: &str) -> Result<Self, ChoiceError> {
        let n: i64 = line.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
        Self::from_number(n).ok_or(ChoiceError::OutOfRange(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(MenuChoice::parse("1"), Ok(MenuChoice::AddStudent));
        assert_eq!(MenuChoice::parse(" 2 "), Ok(MenuChoice::SearchStudent));
        assert_eq!(MenuChoice::parse("3\n"), Ok(MenuChoice::ShowTree));
        assert_eq!(MenuChoice::parse("4"), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(MenuChoice::parse("!"), Err(ChoiceError::NotANumber));
        assert_eq!(MenuChoice::parse("abc"), Err(ChoiceError::NotANumber));
        assert_eq!(MenuChoice::parse(""), Err(ChoiceError::NotANumber));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(MenuChoice::parse("0"), Err(ChoiceError::OutOfRange(0)));
        assert_eq!(MenuChoice::parse("5"), Err(ChoiceError::OutOfRange(5)));
        assert_eq!(MenuChoice::parse("-1"), Err(ChoiceError::OutOfRange(-1)));
    }
}
