use std::rc::Rc;
use yew::prelude::*;

use super::board_view::BoardView;
use crate::model::Puzzle;
use crate::util::cerror;

#[function_component(App)]
pub fn app() -> Html {
    let loaded = use_state(|| Puzzle::bundled().map(Rc::new).map_err(|e| e.to_string()));

    {
        let loaded = loaded.clone();
        use_effect_with((), move |_| {
            if let Err(msg) = &*loaded {
                cerror(&format!("Failed to load puzzle: {}", msg));
            }
            || ()
        });
    }

    match &*loaded {
        Ok(puzzle) => html! { <BoardView puzzle={puzzle.clone()} /> },
        Err(msg) => html! {
            <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px; color:#e6edf3;">
                <h2 style="margin:0 0 12px 0; color:#f85149;">{"Puzzle unavailable"}</h2>
                <p style="margin:4px 0;">{ msg.clone() }</p>
            </div>
        },
    }
}
