use crate::app::use_store;
use centaur_core::geometry::square_size;
use centaur_core::overlay::{OverlayRenderer, Point, RenderContext, Stroke, Surface};
use leptos::html::Canvas;
use leptos::{
    component, create_effect, create_memo, create_node_ref, store_value, view, IntoView, NodeRef,
    SignalGet,
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }

    #[allow(deprecated)]
    fn pen(&self, stroke: Stroke) {
        let color = stroke.color.css();
        self.ctx.set_stroke_style(&color.into());
        self.ctx.set_fill_style(&color.into());
        self.ctx.set_line_width(stroke.width);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_segment(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.pen(stroke);
        self.ctx.set_line_cap("round");
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_triangle(&mut self, [a, b, c]: [Point; 3], stroke: Stroke) {
        self.pen(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(a.x, a.y);
        self.ctx.line_to(b.x, b.y);
        self.ctx.line_to(c.x, c.y);
        self.ctx.close_path();
        self.ctx.stroke();
        self.ctx.fill();
    }

    fn stroke_square(&mut self, origin: Point, side: f64, stroke: Stroke) {
        self.pen(stroke);
        self.ctx.begin_path();
        self.ctx.rect(origin.x, origin.y, side, side);
        self.ctx.stroke();
    }
}

/// Canvas laid over the board for arrows and square outlines.
#[component]
pub fn ChessboardArrows() -> impl IntoView {
    let store = use_store();
    let canvas_ref: NodeRef<Canvas> = create_node_ref();
    let renderer = store_value(OverlayRenderer::new());

    let canvas_size = create_memo(move |_| store.with(|state| state.chessboard.board_size));
    // Repaints follow the directive and the orientation only.
    let trigger = create_memo(move |_| {
        store.with(|state| {
            (
                state.chessboard.move_highlight.clone(),
                state.display.settings.reversed_board,
            )
        })
    });

    create_effect(move |_| {
        let (directive, reversed) = trigger.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(mut surface) = CanvasSurface::new(&canvas) else {
            log::warn!("overlay canvas has no 2d context");
            return;
        };
        let ctx = store.with_untracked(|state| RenderContext {
            reversed,
            turn: state.board.turn,
            square_size: square_size(f64::from(canvas.client_width())),
            kings_checks: state.display.settings.kings_checks,
            previous_move: state.display.settings.previous_move,
        });
        renderer.update_value(|renderer| {
            renderer.repaint(&mut surface, &directive, &ctx);
        });
    });

    view! {
        <canvas
            _ref=canvas_ref
            class="board-arrows"
            width=move || canvas_size.get()
            height=move || canvas_size.get()
        />
    }
}
