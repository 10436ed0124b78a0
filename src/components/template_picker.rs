use std::collections::HashSet;
use std::rc::Rc;

use yew::prelude::*;

use crate::catalog;
use crate::model::{AgeGroup, Template};

#[derive(Properties, PartialEq, Clone)]
pub struct TemplatePickerProps {
    pub age_group: AgeGroup,
    pub on_age_group: Callback<AgeGroup>,
    pub on_pick: Callback<Template>,
}

/// Ids whose preview failed to load; those can't be colored either.
#[derive(Default, PartialEq)]
struct FailedPreviews(HashSet<String>);

impl Reducible for FailedPreviews {
    type Action = String;

    fn reduce(self: Rc<Self>, id: String) -> Rc<Self> {
        if self.0.contains(&id) {
            return self;
        }
        let mut set = self.0.clone();
        set.insert(id);
        Rc::new(Self(set))
    }
}

#[function_component]
pub fn TemplatePicker(props: &TemplatePickerProps) -> Html {
    let failed = use_reducer(FailedPreviews::default);
    let templates = catalog::templates_for(props.age_group);

    let tabs = AgeGroup::ALL.into_iter().map(|g| {
        let cb = props.on_age_group.clone();
        let active = g == props.age_group;
        let style = if active {
            "font-weight:700; border:3px solid #8338ec;"
        } else {
            "border:3px solid transparent;"
        };
        html! {
            <button key={g.label()} {style} onclick={Callback::from(move |_| cb.emit(g))}>
                { format!("Ages {}", g.label()) }
            </button>
        }
    });

    let cards = templates.into_iter().map(|t| {
        let unavailable = failed.0.contains(&t.id);
        let onerror = {
            let failed = failed.clone();
            let id = t.id.clone();
            Callback::from(move |_: Event| {
                log::warn!("template preview {id} failed to load");
                failed.dispatch(id.clone());
            })
        };
        let onclick = {
            let cb = props.on_pick.clone();
            let t = t.clone();
            Callback::from(move |_| {
                if !unavailable {
                    cb.emit(t.clone());
                }
            })
        };
        let opacity = if unavailable { "0.4" } else { "1" };
        html! {
            <button
                key={t.id.clone()}
                {onclick}
                disabled={unavailable}
                style={format!("display:flex; flex-direction:column; gap:6px; padding:8px; background:#fff; border:3px solid #f7dc6f; border-radius:10px; opacity:{opacity};")}
            >
                <img src={t.image_url.clone()} alt={t.name.clone()} loading="lazy" {onerror}
                    style="width:100%; aspect-ratio:1; object-fit:contain; background:#fafafa;" />
                <span style="font-weight:600;">{ t.name.clone() }</span>
                { if unavailable { html!{ <span style="font-size:11px;">{"Unavailable"}</span> } } else { html!{} } }
            </button>
        }
    });

    html! {<div style="display:flex; flex-direction:column; gap:12px;">
        <div style="display:flex; gap:6px; flex-wrap:wrap;">{ for tabs }</div>
        <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(160px, 1fr)); gap:10px;">
            { for cards }
        </div>
    </div>}
}
