use super::error::{InnerError, Result};

/// Generates a 2048 layout with legible numbers. For the default 4x4 grid:
///
///  Score: 1234
///
///  ╔══════════════════════════════════════╗
///  ║                                      ║
///  ║  xxxxxxx  xxxxxxx  xxxxxxx  xxxxxxx  ║
///  ║  xxxxxxx  xxxxxxx  xxxxxxx  xxxxxxx  ║
///  ║  xxxxxxx  xxxxxxx  xxxxxxx  xxxxxxx  ║
///  ║                                      ║
///  ║  ...                                 ║
///  ╚══════════════════════════════════════╝
///  arrows or hjkl to move, q to quit
///
const SCORE_Y: usize = 0;
const BOARD_FIXED_Y_OFFSET: usize = 2;
const BOARD_FIXED_X_OFFSET: usize = 1;
const BOARD_BORDER_WIDTH: usize = 1;
const BOARD_X_PADDING: usize = 2;
const BOARD_Y_PADDING: usize = 1;
pub(crate) const TILE_HEIGHT: usize = 3;
pub(crate) const TILE_WIDTH: usize = 7;
const FOOTER_HEIGHT: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds2D(pub usize, pub usize);

impl Bounds2D {
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.0
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.1
    }
}

/// A rectangle of terminal cells anchored at its top left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle(pub (usize, usize), pub Bounds2D);

impl Rectangle {
    #[inline(always)]
    pub fn x(&self) -> usize {
        self.0 .0
    }

    #[inline(always)]
    pub fn y(&self) -> usize {
        self.0 .1
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.1 .0
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.1 .1
    }

    /// One past the rightmost column and the bottom row.
    #[inline(always)]
    pub fn extents(&self) -> (usize, usize) {
        (self.x() + self.width(), self.y() + self.height())
    }
}

/// Terminal-cell placement of the score line, the board, its tiles and the footer for a grid of
/// a given size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    board: Rectangle,
    footer: Rectangle,
}

impl Layout {
    /// Fit a `grid_size` board into a terminal of the given dimensions, or fail with
    /// `TerminalTooSmall`.
    pub fn new(grid_size: usize, terminal: (usize, usize)) -> Result<Self> {
        let (need_width, need_height) = Self::required(grid_size);
        let (width, height) = terminal;
        if width < need_width || height < need_height {
            return Err(InnerError::TerminalTooSmall {
                width,
                height,
                need_width,
                need_height,
            }
            .into());
        }
        let board = Self::board_rectangle(grid_size);
        let footer = Rectangle(
            (BOARD_FIXED_X_OFFSET, board.extents().1),
            Bounds2D(width - BOARD_FIXED_X_OFFSET, FOOTER_HEIGHT),
        );
        Ok(Self { board, footer })
    }

    /// Minimum terminal width and height for a `grid_size` board.
    pub fn required(grid_size: usize) -> (usize, usize) {
        let (x_extent, y_extent) = Self::board_rectangle(grid_size).extents();
        (x_extent, y_extent + FOOTER_HEIGHT)
    }

    pub fn score_origin(&self) -> (usize, usize) {
        (BOARD_FIXED_X_OFFSET, SCORE_Y)
    }

    pub fn board(&self) -> Rectangle {
        self.board
    }

    pub fn footer(&self) -> Rectangle {
        self.footer
    }

    /// The rectangle covered by the tile in column `x`, row `y`.
    pub fn tile(&self, x: usize, y: usize) -> Rectangle {
        let x_offset = self.board.x() + BOARD_BORDER_WIDTH + BOARD_X_PADDING;
        let y_offset = self.board.y() + BOARD_BORDER_WIDTH + BOARD_Y_PADDING;
        Rectangle(
            (
                x_offset + (BOARD_X_PADDING + TILE_WIDTH) * x,
                y_offset + (BOARD_Y_PADDING + TILE_HEIGHT) * y,
            ),
            Bounds2D(TILE_WIDTH, TILE_HEIGHT),
        )
    }

    fn board_rectangle(grid_size: usize) -> Rectangle {
        let width =
            2 * BOARD_BORDER_WIDTH + BOARD_X_PADDING + grid_size * (TILE_WIDTH + BOARD_X_PADDING);
        let height =
            2 * BOARD_BORDER_WIDTH + BOARD_Y_PADDING + grid_size * (TILE_HEIGHT + BOARD_Y_PADDING);
        Rectangle(
            (BOARD_FIXED_X_OFFSET, BOARD_FIXED_Y_OFFSET),
            Bounds2D(width, height),
        )
    }
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::classic(4, (41, 23))]
    #[case::small(2, (23, 15))]
    #[case::big(6, (59, 31))]
    fn required_size(#[case] grid_size: usize, #[case] expected: (usize, usize)) {
        assert_eq!(Layout::required(grid_size), expected);
    }

    #[rstest]
    #[case::too_narrow((40, 40))]
    #[case::too_short((80, 22))]
    #[case::tiny((0, 0))]
    fn too_small(#[case] terminal: (usize, usize)) {
        let err = Layout::new(4, terminal).unwrap_err();
        assert!(err.is_terminal_too_small());
    }

    #[test]
    fn tiles_inside_board() -> Result<()> {
        let layout = Layout::new(4, (80, 24))?;
        let board = layout.board();
        let (bx, by) = board.extents();
        for y in 0..4 {
            for x in 0..4 {
                let tile = layout.tile(x, y);
                let (tx, ty) = tile.extents();
                assert!(tile.x() > board.x() && tile.y() > board.y());
                assert!(tx < bx && ty < by, "tile ({x},{y}) escapes the board");
            }
        }
        Ok(())
    }

    #[test]
    fn tiles_do_not_overlap() -> Result<()> {
        let layout = Layout::new(4, (80, 24))?;
        let a = layout.tile(0, 0);
        let b = layout.tile(1, 0);
        let c = layout.tile(0, 1);
        assert!(a.extents().0 < b.x());
        assert!(a.extents().1 < c.y());
        Ok(())
    }

    #[test]
    fn footer_below_board() -> Result<()> {
        let layout = Layout::new(4, (80, 24))?;
        assert_eq!(layout.footer().y(), layout.board().extents().1);
        assert_eq!(layout.footer().width(), 79);
        assert!(layout.footer().extents().1 <= 24);
        Ok(())
    }
}
