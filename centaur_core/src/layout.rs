//! Splits the content area between the board column (board plus evaluation
//! strip), the device screen column and the move list.

/// Width of the device screen column on the right.
pub const SCREEN_WIDTH: f64 = 128.0;
/// Narrowest move list worth placing beside the board.
pub const LIST_MIN_WIDTH: f64 = SCREEN_WIDTH * 3.0 / 2.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Move list to the right of the board.
    Horizontal,
    /// Move list below the board.
    Vertical,
}

/// Vertical anchor of the move list panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Top(f64),
    Bottom(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelBounds {
    pub left: f64,
    pub anchor: Anchor,
    pub width: f64,
    pub height: f64,
}

impl PanelBounds {
    /// Absolute CSS placement of the panel.
    #[must_use]
    pub fn style(&self) -> String {
        let (edge, offset) = match self.anchor {
            Anchor::Top(v) => ("top", v),
            Anchor::Bottom(v) => ("bottom", v),
        };
        format!(
            "left: {}px; {edge}: {offset}px; width: {}px; height: {}px;",
            self.left,
            self.width.max(0.0),
            self.height.max(0.0)
        )
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub orientation: Orientation,
    /// Side of the board column. May be negative while the page mounts.
    pub board_width: f64,
    pub panel: PanelBounds,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            board_width: 0.0,
            panel: PanelBounds {
                left: 0.0,
                anchor: Anchor::Top(0.0),
                width: 0.0,
                height: 0.0,
            },
        }
    }
}

impl Layout {
    /// Board side usable for rendering.
    #[must_use]
    pub fn board_size(&self) -> f64 {
        self.board_width.max(0.0)
    }
}

fn horizontal(container: Size, evaluation_height: f64) -> Layout {
    let board_width = (container.width - SCREEN_WIDTH - LIST_MIN_WIDTH)
        .min(container.height - evaluation_height);
    Layout {
        orientation: Orientation::Horizontal,
        board_width,
        panel: PanelBounds {
            left: board_width,
            anchor: Anchor::Top(0.0),
            width: container.width - board_width - SCREEN_WIDTH,
            height: container.height,
        },
    }
}

fn vertical(container: Size, evaluation_height: f64) -> Layout {
    let board_width =
        (container.width - SCREEN_WIDTH).min(container.height - evaluation_height);
    Layout {
        orientation: Orientation::Vertical,
        board_width,
        panel: PanelBounds {
            left: 0.0,
            anchor: Anchor::Bottom(0.0),
            width: container.width,
            height: container.height - board_width - evaluation_height,
        },
    }
}

/// Picks whichever arrangement leaves the move list more room; the
/// horizontal one wins ties.
#[must_use]
pub fn compute_layout(container: Size, evaluation_height: f64) -> Layout {
    let side_by_side = horizontal(container, evaluation_height);
    let stacked = vertical(container, evaluation_height);
    if side_by_side.panel.area() >= stacked.panel.area() {
        side_by_side
    } else {
        stacked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_container_puts_list_beside_board() {
        let layout = compute_layout(Size::new(1200.0, 700.0), 60.0);
        assert_eq!(layout.orientation, Orientation::Horizontal);
        assert!((layout.board_width - 640.0).abs() < f64::EPSILON);
        assert_eq!(layout.panel.anchor, Anchor::Top(0.0));
        assert!((layout.panel.left - 640.0).abs() < f64::EPSILON);
        assert!((layout.panel.width - 432.0).abs() < f64::EPSILON);
        assert!((layout.panel.height - 700.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tall_container_stacks_list_below_board() {
        let layout = compute_layout(Size::new(500.0, 1000.0), 60.0);
        assert_eq!(layout.orientation, Orientation::Vertical);
        assert!((layout.board_width - 372.0).abs() < f64::EPSILON);
        assert_eq!(layout.panel.anchor, Anchor::Bottom(0.0));
        assert!((layout.panel.width - 500.0).abs() < f64::EPSILON);
        assert!((layout.panel.height - 568.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_sized_container_does_not_panic() {
        let layout = compute_layout(Size::default(), 0.0);
        assert!(layout.board_width <= 0.0);
        assert!(layout.board_size().abs() < f64::EPSILON);
        assert!(layout.panel.style().contains("height: 0px"));
    }

    #[test]
    fn chosen_layout_never_loses_list_area() {
        let steps = [0.0, 1.0, 50.0, 128.0, 320.0, 480.0, 777.0, 1024.0, 1920.0];
        for &width in &steps {
            for &height in &steps {
                for evaluation in [0.0, 24.0, 60.0, 400.0] {
                    let container = Size::new(width, height);
                    let chosen = compute_layout(container, evaluation);
                    let other = match chosen.orientation {
                        Orientation::Horizontal => vertical(container, evaluation),
                        Orientation::Vertical => horizontal(container, evaluation),
                    };
                    assert_ne!(chosen.orientation, other.orientation);
                    assert!(chosen.panel.area() >= other.panel.area());
                    assert!(chosen.board_width <= width);
                    assert!(chosen.board_size() <= width);
                }
            }
        }
    }

    #[test]
    fn ties_favor_horizontal() {
        // Both candidates leave an empty list: 0 * h == w * 0.
        let layout = compute_layout(Size::new(320.0, 0.0), 0.0);
        assert_eq!(layout.orientation, Orientation::Horizontal);
    }

    #[test]
    fn style_uses_the_anchor_edge() {
        let layout = compute_layout(Size::new(500.0, 1000.0), 60.0);
        assert_eq!(
            layout.panel.style(),
            "left: 0px; bottom: 0px; width: 500px; height: 568px;"
        );
    }
}
