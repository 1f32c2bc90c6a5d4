use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FoundWordRowProps {
    pub word: String,
}

#[function_component(FoundWordRow)]
pub fn found_word_row(props: &FoundWordRowProps) -> Html {
    html! { <div class="found-word" style="display:flex; align-items:center; gap:8px; margin:3px 0;"> <span style="display:inline-block; width:10px; height:10px; background:rgba(0,180,0,0.6); border:1px solid #30363d; border-radius:2px;"></span> <span>{ props.word.clone() }</span> </div> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FoundWordsPanelProps {
    /// Discovery order.
    pub words: Vec<String>,
}

#[function_component]
pub fn FoundWordsPanel(props: &FoundWordsPanelProps) -> Html {
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; font-size:13px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Found words"}</div>
        { if props.words.is_empty() { html!{ <div style="font-size:11px; color:#8b949e;">{"Drag across letters to select a word."}</div> } } else { html!{} } }
        <div id="foundWordsGrid" style="display:grid; grid-template-columns:1fr 1fr; column-gap:8px;">
            { for props.words.iter().map(|w| html!{ <FoundWordRow key={w.clone()} word={w.clone()} /> }) }
        </div>
    </div>}
}
