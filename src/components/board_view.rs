use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};
use yew::prelude::*;

use crate::model::{Puzzle, Session, SessionAction};
use crate::render::{CanvasSurface, FrameScheduler};
use crate::state::{Layout, MatchOutcome};
use crate::util::{cerror, clog};

use super::{
    complete_overlay::CompleteOverlay, found_words_panel::FoundWordsPanel,
    stats_panel::StatsPanel,
};

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub puzzle: Rc<Puzzle>,
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let session = {
        let puzzle = props.puzzle.clone();
        use_reducer(move || Session::new(puzzle))
    };
    let session_ref = use_mut_ref(|| session.clone());
    let layout = use_mut_ref(Layout::default);
    let scheduler = use_mut_ref(FrameScheduler::default);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    // Effect: keep the latest handle for the frame loop, redraw on change
    {
        let session_ref = session_ref.clone();
        let current_handle = session.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with(session.version, move |_| {
            *session_ref.borrow_mut() = current_handle;
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }
    // Effect: report drag outcomes
    {
        let total = session.total_count();
        let found = session.found_count();
        use_effect_with(session.last_outcome.clone(), move |outcome| {
            match outcome {
                Some(MatchOutcome::Found(word)) => {
                    clog(&format!("Found {} ({}/{})", word, found, total));
                }
                Some(MatchOutcome::Retraced(word)) => clog(&format!("Retraced {}", word)),
                Some(MatchOutcome::Rejected(letters)) => clog(&format!("Rejected {}", letters)),
                Some(MatchOutcome::Empty) | None => {}
            }
            || ()
        });
    }
    // Main mount effect (listeners, frame loop)
    {
        let canvas_ref = canvas_ref.clone();
        let session_ref = session_ref.clone();
        let dispatcher = session.dispatcher();
        let layout = layout.clone();
        let scheduler = scheduler.clone();
        let draw_ref_setup = draw_ref.clone();
        let fill_ratio = props.puzzle.config.fill_ratio;
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let document = window.document().expect("document");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");
            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                let layout = layout.clone();
                let scheduler = scheduler.clone();
                move || {
                    // size to the game area, not the window
                    let (width, height) = canvas
                        .parent_element()
                        .map(|el| {
                            let rect = el.get_bounding_client_rect();
                            (rect.width(), rect.height())
                        })
                        .unwrap_or((800.0, 600.0));
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                    let next = Layout::fit(canvas.width() as f64, canvas.height() as f64, fill_ratio);
                    *layout.borrow_mut() = next;
                    // resizing the backing store wipes it even when the layout is unchanged
                    scheduler.borrow_mut().invalidate();
                    clog(&format!(
                        "Resize {}x{} cell={}",
                        next.width, next.height, next.cell
                    ));
                }
            };
            compute_and_apply_canvas_size();
            // Draw closure
            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let session_ref = session_ref.clone();
                let layout = layout.clone();
                let scheduler = scheduler.clone();
                let ctx = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
                if ctx.is_none() {
                    cerror("2d canvas context unavailable; board will not render");
                }
                let surface = RefCell::new(ctx.map(CanvasSurface::new));
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let mut surface = surface.borrow_mut();
                    let Some(surface) = surface.as_mut() else { return };
                    let handle = session_ref.borrow().clone();
                    let l = *layout.borrow();
                    scheduler.borrow_mut().frame(&handle, &l, surface);
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            (draw_closure)();
            // RAF loop; the frame timestamp also drives the rejection flash
            let raf_id = Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let draw_ref_loop = draw_ref_setup.clone();
                let window_loop = window.clone();
                let session_ref = session_ref.clone();
                let dispatcher = dispatcher.clone();
                let last_ts = Rc::new(RefCell::new(None::<f64>));
                let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
                    let prev = last_ts.borrow_mut().replace(ts);
                    if let Some(prev) = prev {
                        if session_ref.borrow().is_flashing() {
                            dispatcher.dispatch(SessionAction::Tick {
                                dt_ms: (ts - prev).max(0.0),
                            });
                        }
                    }
                    if let Some(f) = &*draw_ref_loop.borrow() {
                        f();
                    }
                    if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                        if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id_clone.borrow_mut() = Some(id);
                        }
                    }
                })
                    as Box<dyn FnMut(f64)>));
                if let Some(cb) = closure_cell.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }
            }
            // Pointer events
            let pointerdown_cb = {
                let canvas = canvas.clone();
                let layout = layout.clone();
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    e.prevent_default();
                    let rect = canvas.get_bounding_client_rect();
                    let cell = layout.borrow().cell_at_client(
                        e.client_x() as f64,
                        e.client_y() as f64,
                        rect.left(),
                        rect.top(),
                    );
                    canvas.set_pointer_capture(e.pointer_id()).ok();
                    dispatcher.dispatch(SessionAction::PointerDown { cell });
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "pointerdown",
                    pointerdown_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let pointermove_cb = {
                let canvas = canvas.clone();
                let layout = layout.clone();
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    let rect = canvas.get_bounding_client_rect();
                    let cell = layout.borrow().cell_at_client(
                        e.client_x() as f64,
                        e.client_y() as f64,
                        rect.left(),
                        rect.top(),
                    );
                    dispatcher.dispatch(SessionAction::PointerMove { cell });
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "pointermove",
                    pointermove_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let pointerup_cb = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |_e: PointerEvent| {
                    dispatcher.dispatch(SessionAction::PointerUp);
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("pointerup", pointerup_cb.as_ref().unchecked_ref())
                .ok();
            let pointercancel_cb = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |_e: PointerEvent| {
                    dispatcher.dispatch(SessionAction::PointerCancel);
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "pointercancel",
                    pointercancel_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let contextmenu_cb = {
                Closure::wrap(Box::new(move |e: web_sys::Event| {
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let resize_cb = {
                let compute_and_apply_canvas_size = compute_and_apply_canvas_size.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    compute_and_apply_canvas_size();
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();
            // Letters drawn before the web font arrives use the fallback face
            let fonts_ready_cb = {
                let scheduler = scheduler.clone();
                Closure::wrap(Box::new(move |_v: JsValue| {
                    scheduler.borrow_mut().invalidate();
                }) as Box<dyn FnMut(JsValue)>)
            };
            let fonts_ready: Result<js_sys::Promise, JsValue> = document.fonts().ready();
            match fonts_ready {
                Ok(promise) => {
                    let _ = promise.then(&fonts_ready_cb);
                }
                Err(_) => cerror("document.fonts.ready unavailable"),
            }
            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "pointerdown",
                    pointerdown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "pointermove",
                    pointermove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "pointerup",
                    pointerup_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "pointercancel",
                    pointercancel_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                let _keep_alive = (
                    &pointerdown_cb,
                    &pointermove_cb,
                    &pointerup_cb,
                    &pointercancel_cb,
                    &contextmenu_cb,
                    &resize_cb,
                    &fonts_ready_cb,
                );
            }
        });
    }

    let found_words = session.found_words.clone();
    html! {<div style="display:flex; width:100vw; height:100vh; background:#0e1116; color:#e6edf3;">
        <div id="game-area" style="position:relative; flex:1; min-width:0; height:100%;">
            <canvas ref={canvas_ref.clone()} id="game" style="display:block; width:100%; height:100%; touch-action:none; user-select:none;"></canvas>
            <CompleteOverlay show={session.is_complete()} total={session.total_count()} />
        </div>
        <div style="width:260px; flex-shrink:0; display:flex; flex-direction:column; gap:12px; padding:12px; border-left:1px solid #30363d; overflow-y:auto;">
            <StatsPanel found={session.found_count()} total={session.total_count()} />
            <FoundWordsPanel words={found_words} />
        </div>
    </div>}
}
