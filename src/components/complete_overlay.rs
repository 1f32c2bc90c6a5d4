use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CompleteOverlayProps {
    pub show: bool,
    pub total: usize,
}

#[function_component]
pub fn CompleteOverlay(props: &CompleteOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {
        <div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); background:rgba(0,0,0,0.85); border:2px solid #2ea043; padding:12px 24px; border-radius:12px; text-align:center; pointer-events:none;">
            <h2 style="margin:0 0 4px 0; color:#2ea043;">{"Puzzle complete"}</h2>
            <p style="margin:0;">{ format!("All {} words found.", props.total) }</p>
        </div>
    }
}
