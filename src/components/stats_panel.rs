use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub found: usize,
    pub total: usize,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style = "text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#2ea043;", label_style)}>{"Found"}</span>
                <span style={format!("{} color:#2ea043;", value_style)}>
                    <span id="foundCount">{ props.found }</span>
                    {" / "}
                    <span id="totalCount">{ props.total }</span>
                </span>
            </div>
        </div>
    }
}
