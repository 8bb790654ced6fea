pub mod astronaut;
pub mod mission;
pub mod validate;

pub use astronaut::AstronautView;
pub use mission::{MissionDetailView, MissionGridView, MissionListView};
pub use validate::ValidationView;

use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::center;

/// Number of grid columns that fit `width`, never less than one
pub fn grid_columns(width: u16, min_cell_width: u16) -> usize {
    (width / min_cell_width.max(1)).max(1) as usize
}

/// Boxed three-line cells laid out `columns` per row
///
/// The middle line of each cell is the title and is bolded when color is on.
pub(crate) fn write_cells(
    f: &mut fmt::Formatter<'_>,
    cells: &[[String; 3]],
    columns: usize,
    cell_width: usize,
    enable_color: bool,
) -> fmt::Result {
    let inner = cell_width.saturating_sub(2).max(1);
    let border = "─".repeat(inner);

    for row in cells.chunks(columns.max(1)) {
        for _ in row {
            write!(f, "┌{}┐", border)?;
        }
        writeln!(f)?;

        for line in 0..3 {
            for cell in row {
                let text = center(&cell[line], inner);
                if line == 1 && enable_color {
                    write!(f, "│{}│", text.bold())?;
                } else {
                    write!(f, "│{}│", text)?;
                }
            }
            writeln!(f)?;
        }

        for _ in row {
            write!(f, "└{}┘", border)?;
        }
        writeln!(f)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(80, 24), 3);
        assert_eq!(grid_columns(20, 24), 1);
        assert_eq!(grid_columns(120, 24), 5);
        assert_eq!(grid_columns(80, 0), 80);
    }
}
