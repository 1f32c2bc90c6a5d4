//! Frame rendering over an abstract drawing surface.
//!
//! `render_frame` is a pure read of the session; `FrameScheduler` decides when
//! a frame is worth drawing so the browser loop and tests share one path.

use web_sys::CanvasRenderingContext2d;

use crate::model::{Cell, Session};
use crate::state::Layout;

/// The handful of 2D primitives a frame needs.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn set_fill(&mut self, color: &str);
    fn set_font(&mut self, font: &str);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text_centered(&mut self, text: &str, x: f64, y: f64);
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_fill(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_text_centered(&mut self, text: &str, x: f64, y: f64) {
        self.ctx.fill_text(text, x, y).ok();
    }
}

fn paint_cells<S: Surface>(surface: &mut S, layout: &Layout, cells: &[Cell]) {
    for cell in cells {
        let (x, y, w, h) = layout.cell_rect(*cell);
        surface.fill_rect(x, y, w, h);
    }
}

/// Draws one frame: clear, locked paths, selection or rejection, then letters on top.
pub fn render_frame<S: Surface>(session: &Session, layout: &Layout, surface: &mut S) {
    let cfg = &session.puzzle.config;
    surface.clear(layout.width, layout.height);

    surface.set_fill(&cfg.colors.locked);
    for path in &session.locked_paths {
        paint_cells(surface, layout, path);
    }

    let active: &[Cell] = if !session.selection.is_empty() {
        &session.selection
    } else if session.is_flashing() {
        &session.flashed_path
    } else {
        &[]
    };
    if !active.is_empty() {
        let color = if session.is_flashing() {
            &cfg.colors.rejected
        } else {
            &cfg.colors.selecting
        };
        surface.set_fill(color);
        paint_cells(surface, layout, active);
    }

    surface.set_fill(&cfg.colors.letters);
    surface.set_font(&cfg.font_for_cell(layout.cell));
    let mut buf = [0u8; 4];
    for (cell, ch) in session.puzzle.grid.cells() {
        let (cx, cy) = layout.cell_center(cell);
        surface.fill_text_centered(ch.encode_utf8(&mut buf), cx, cy);
    }
}

/// Redraw-on-demand driver. A frame is drawn when the session version or the
/// layout changed since the last draw, or after `invalidate`.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    dirty: bool,
    drawn_version: Option<u64>,
    drawn_layout: Option<Layout>,
}

impl FrameScheduler {
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn needs_frame(&self, session: &Session, layout: &Layout) -> bool {
        self.dirty
            || self.drawn_version != Some(session.version)
            || self.drawn_layout.as_ref() != Some(layout)
    }

    /// Draws if needed; returns whether a frame was drawn.
    pub fn frame<S: Surface>(&mut self, session: &Session, layout: &Layout, surface: &mut S) -> bool {
        if !self.needs_frame(session, layout) {
            return false;
        }
        render_frame(session, layout, surface);
        self.dirty = false;
        self.drawn_version = Some(session.version);
        self.drawn_layout = Some(*layout);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Puzzle, SessionAction};
    use std::rc::Rc;
    use yew::Reducible;

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Clear,
        Fill(String),
        Font(String),
        Rect(f64, f64, f64, f64),
        Text(String, f64, f64),
    }

    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.cmds.push(Cmd::Clear);
        }
        fn set_fill(&mut self, color: &str) {
            self.cmds.push(Cmd::Fill(color.to_string()));
        }
        fn set_font(&mut self, font: &str) {
            self.cmds.push(Cmd::Font(font.to_string()));
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.cmds.push(Cmd::Rect(x, y, w, h));
        }
        fn fill_text_centered(&mut self, text: &str, x: f64, y: f64) {
            self.cmds.push(Cmd::Text(text.to_string(), x, y));
        }
    }

    impl Recorder {
        fn rects(&self) -> usize {
            self.cmds.iter().filter(|c| matches!(c, Cmd::Rect(..))).count()
        }
        fn texts(&self) -> usize {
            self.cmds.iter().filter(|c| matches!(c, Cmd::Text(..))).count()
        }
        fn fills(&self) -> Vec<&str> {
            self.cmds
                .iter()
                .filter_map(|c| match c {
                    Cmd::Fill(s) => Some(s.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    fn session() -> Rc<Session> {
        Rc::new(Session::new(Rc::new(Puzzle::bundled().unwrap())))
    }

    fn layout() -> Layout {
        Layout::fit(1000.0, 800.0, 0.9)
    }

    #[test]
    fn idle_frame_draws_only_letters() {
        let mut r = Recorder::default();
        render_frame(&session(), &layout(), &mut r);
        assert_eq!(r.cmds[0], Cmd::Clear);
        assert_eq!(r.rects(), 0);
        assert_eq!(r.texts(), 625);
        assert_eq!(r.cmds[3], Cmd::Font("16px Epoch, sans-serif".into()));
        assert_eq!(r.cmds[4], Cmd::Text("Z".into(), 164.0, 64.0));
    }

    #[test]
    fn overlays_are_painted_before_letters() {
        let s = session()
            .reduce(SessionAction::PointerDown { cell: Some(Cell::new(2, 0)) })
            .reduce(SessionAction::PointerMove { cell: Some(Cell::new(2, 6)) })
            .reduce(SessionAction::PointerUp)
            .reduce(SessionAction::PointerDown { cell: Some(Cell::new(13, 5)) })
            .reduce(SessionAction::PointerMove { cell: Some(Cell::new(13, 7)) });
        let mut r = Recorder::default();
        render_frame(&s, &layout(), &mut r);
        assert_eq!(r.rects(), 7 + 3);
        let cfg = &s.puzzle.config;
        assert_eq!(
            r.fills(),
            vec![
                cfg.colors.locked.as_str(),
                cfg.colors.selecting.as_str(),
                cfg.colors.letters.as_str()
            ]
        );
        let last_rect = r.cmds.iter().rposition(|c| matches!(c, Cmd::Rect(..))).unwrap();
        let first_text = r.cmds.iter().position(|c| matches!(c, Cmd::Text(..))).unwrap();
        assert!(last_rect < first_text);
    }

    #[test]
    fn rejection_paints_flashed_path_red_until_expiry() {
        let s = session()
            .reduce(SessionAction::PointerDown { cell: Some(Cell::new(0, 0)) })
            .reduce(SessionAction::PointerMove { cell: Some(Cell::new(0, 2)) })
            .reduce(SessionAction::PointerUp);
        let rejected = s.puzzle.config.colors.rejected.clone();
        let mut r = Recorder::default();
        render_frame(&s, &layout(), &mut r);
        assert_eq!(r.rects(), 3);
        assert!(r.fills().contains(&rejected.as_str()));

        let s = s.reduce(SessionAction::Tick { dt_ms: 300.0 });
        let mut r = Recorder::default();
        render_frame(&s, &layout(), &mut r);
        assert_eq!(r.rects(), 0);
        assert!(!r.fills().contains(&rejected.as_str()));
    }

    #[test]
    fn found_word_after_rejection_is_not_painted_red() {
        let s = session()
            .reduce(SessionAction::PointerDown { cell: Some(Cell::new(13, 8)) })
            .reduce(SessionAction::PointerMove { cell: Some(Cell::new(13, 5)) })
            .reduce(SessionAction::PointerUp)
            .reduce(SessionAction::Tick { dt_ms: 100.0 })
            .reduce(SessionAction::PointerDown { cell: Some(Cell::new(13, 5)) })
            .reduce(SessionAction::PointerMove { cell: Some(Cell::new(13, 8)) })
            .reduce(SessionAction::PointerUp);
        let rejected = s.puzzle.config.colors.rejected.clone();
        let mut r = Recorder::default();
        render_frame(&s, &layout(), &mut r);
        assert_eq!(r.rects(), 4);
        assert!(!r.fills().contains(&rejected.as_str()));
    }

    #[test]
    fn rendering_leaves_session_untouched() {
        let s = session()
            .reduce(SessionAction::PointerDown { cell: Some(Cell::new(2, 0)) })
            .reduce(SessionAction::PointerMove { cell: Some(Cell::new(2, 4)) });
        let before = (*s).clone();
        render_frame(&s, &layout(), &mut Recorder::default());
        assert_eq!(*s, before);
    }

    #[test]
    fn scheduler_skips_clean_frames() {
        let mut sched = FrameScheduler::default();
        let s = session();
        let l = layout();
        let mut r = Recorder::default();
        assert!(sched.frame(&s, &l, &mut r));
        assert!(!sched.frame(&s, &l, &mut r));

        sched.invalidate();
        assert!(sched.frame(&s, &l, &mut r));

        let s = s.reduce(SessionAction::PointerDown { cell: Some(Cell::new(1, 1)) });
        assert!(sched.frame(&s, &l, &mut r));
        assert!(!sched.frame(&s, &l, &mut r));

        let resized = Layout::fit(600.0, 600.0, 0.9);
        assert!(sched.frame(&s, &resized, &mut r));
        assert!(!sched.frame(&s, &resized, &mut r));
    }
}
