//! Numbered menus
//!
//! Each portal declares an enum of commands and a constant table mapping menu
//! rows to commands. Choice `n` selects row `n - 1`; anything else, including
//! input that is not a number (read as 0), is an invalid choice.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::Result;

/// A command enum with its dispatch table
pub trait MenuCommand: Copy + 'static {
    /// Heading printed above the options
    const TITLE: &'static str;

    /// Menu rows in display order
    const ENTRIES: &'static [(Self, &'static str)];

    /// Command for a 1-based menu choice
    fn from_choice(choice: i64) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ENTRIES.get(index).map(|(command, _)| *command)
    }
}

/// Render the heading and numbered options of `C`
pub fn render<C: MenuCommand>() -> String {
    let mut output = format!("\n{}\n", C::TITLE);
    for (i, (_, label)) in C::ENTRIES.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, label));
    }
    output
}

/// Show the menu of `C` and read a choice.
///
/// `Ok(None)` is an invalid choice; the caller reports it.
pub fn choose<C, R, W>(console: &mut Console<R, W>) -> Result<Option<C>>
where
    C: MenuCommand,
    R: BufRead,
    W: Write,
{
    write!(console, "{}", render::<C>())?;
    let choice = console.prompt_int("\nEnter your choice: ")?.unwrap_or(0);
    Ok(C::from_choice(choice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Sample {
        Open,
        Quit,
    }

    impl MenuCommand for Sample {
        const TITLE: &'static str = "== SAMPLE ==";
        const ENTRIES: &'static [(Self, &'static str)] = &[
            (Sample::Open, "Open"),
            (Sample::Quit, "Quit"),
        ];
    }

    #[test]
    fn test_from_choice_maps_rows() {
        assert_eq!(Sample::from_choice(1), Some(Sample::Open));
        assert_eq!(Sample::from_choice(2), Some(Sample::Quit));
        assert_eq!(Sample::from_choice(0), None);
        assert_eq!(Sample::from_choice(3), None);
        assert_eq!(Sample::from_choice(-1), None);
    }

    #[test]
    fn test_render_numbers_entries() {
        assert_eq!(render::<Sample>(), "\n== SAMPLE ==\n1. Open\n2. Quit\n");
    }

    #[test]
    fn test_choose_treats_text_as_invalid() {
        let mut console = Console::new(Cursor::new(b"two\n2\n".to_vec()), Vec::new());
        assert_eq!(choose::<Sample, _, _>(&mut console).unwrap(), None);
        assert_eq!(choose::<Sample, _, _>(&mut console).unwrap(), Some(Sample::Quit));
    }
}
