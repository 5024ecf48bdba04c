//! Page geometry for a card page. All values are millimetres measured from
//! the bottom-left corner of the page, matching PDF user space.

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

const MARGIN_X_MM: f32 = 14.0;
const MARGIN_Y_MM: f32 = 12.0;
const GAP_MM: f32 = 6.0;
const HEADER_MM: f32 = 34.0;
const FOOTER_MM: f32 = 38.0;
const CODE_IMAGE_MM: f32 = 26.0;
const GRID_SIDE: usize = 5;

pub const PT_PER_MM: f32 = 72.0 / 25.4;

pub fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_MM
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Axis-aligned box, origin at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Area {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn inset(&self, by: f32) -> Area {
        Area::new(self.x + by, self.y + by, self.w - 2.0 * by, self.h - 2.0 * by)
    }

    pub fn contains(&self, other: &Area) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.top() <= self.top() + EPS
    }
}

/// Where everything goes on one card page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page: Area,
    pub margin_x: f32,
    pub margin_y: f32,
    pub header: Area,
    pub footer: Area,
    /// Square region for the artist grid.
    pub top_grid: Area,
    /// Square region for the title grid.
    pub bottom_grid: Area,
    pub code_image_size: f32,
}

impl PageLayout {
    /// Layout for an A4 portrait page.
    pub fn a4() -> Self {
        Self::for_page(A4_WIDTH_MM, A4_HEIGHT_MM)
    }

    pub fn for_page(width: f32, height: f32) -> Self {
        let vertical = (height - 2.0 * MARGIN_Y_MM - HEADER_MM - FOOTER_MM - GAP_MM) / 2.0;
        let horizontal = width - 2.0 * MARGIN_X_MM;
        let square = vertical.min(horizontal).max(0.0);

        let content_x = (width - square) / 2.0;
        let top_grid_y = height - MARGIN_Y_MM - HEADER_MM - square;
        let bottom_grid_y = top_grid_y - GAP_MM - square;

        Self {
            page: Area::new(0.0, 0.0, width, height),
            margin_x: MARGIN_X_MM,
            margin_y: MARGIN_Y_MM,
            header: Area::new(MARGIN_X_MM, height - MARGIN_Y_MM - HEADER_MM, horizontal, HEADER_MM),
            footer: Area::new(MARGIN_X_MM, MARGIN_Y_MM, horizontal, FOOTER_MM),
            top_grid: Area::new(content_x, top_grid_y, square, square),
            bottom_grid: Area::new(content_x, bottom_grid_y, square, square),
            code_image_size: CODE_IMAGE_MM,
        }
    }

    /// The three equal-width footer blocks, left to right.
    pub fn footer_blocks(&self) -> [Area; 3] {
        let w = self.footer.w / 3.0;
        [0, 1, 2].map(|i| Area::new(self.footer.x + i as f32 * w, self.footer.y, w, self.footer.h))
    }
}

/// Cell `index` (0..25) of a 5x5 grid occupying `grid`, filled left to
/// right and top to bottom, so row 0 sits at the visual top.
pub fn grid_cell(grid: &Area, index: usize) -> Area {
    let cell = grid.w / GRID_SIDE as f32;
    let row = index / GRID_SIDE;
    let col = index % GRID_SIDE;
    Area::new(
        grid.x + col as f32 * cell,
        grid.y + (GRID_SIDE - 1 - row) as f32 * cell,
        cell,
        cell,
    )
}
