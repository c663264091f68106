use dioxus::prelude::*;

use crate::services::client::{CompetenceGroup, CompetenceSelection};

#[derive(Props, PartialEq, Clone)]
pub struct CompetenceSelectProps {
    pub element_id: String,
    pub groups: Vec<CompetenceGroup>,
    pub selection: CompetenceSelection,
    /// Called with the id of the competence that was clicked
    pub on_toggle: EventHandler<String>,
}

/// Multi-select of competences, one checkbox per active competence
#[component]
pub fn CompetenceSelect(props: CompetenceSelectProps) -> Element {
    if props.groups.is_empty() {
        return rsx! {
            div {
                id: "{props.element_id}",
                class: "competence-select empty",
                "No competences available"
            }
        };
    }

    rsx! {
        div {
            id: "{props.element_id}",
            class: "competence-select",
            for group in props.groups.iter() {
                fieldset {
                    key: "{group.name}",
                    class: "competence-group",
                    legend { "{group.name}" }
                    for competence in group.active_competences() {
                        CompetenceCheckbox {
                            key: "{competence.id}",
                            id: competence.id.clone(),
                            name: competence.name.clone(),
                            checked: props.selection.contains(&competence.id),
                            on_toggle: props.on_toggle,
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct CompetenceCheckboxProps {
    id: String,
    name: String,
    checked: bool,
    on_toggle: EventHandler<String>,
}

#[component]
fn CompetenceCheckbox(props: CompetenceCheckboxProps) -> Element {
    let id = props.id.clone();
    let on_toggle = props.on_toggle;

    rsx! {
        label {
            class: "competence-option",
            input {
                r#type: "checkbox",
                name: "competences",
                value: "{props.id}",
                checked: props.checked,
                onchange: move |_| on_toggle.call(id.clone())
            }
            "{props.name}"
        }
    }
}
