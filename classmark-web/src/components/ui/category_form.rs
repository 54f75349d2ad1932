//! Modal form for creating an evaluation category.

use crate::api::ApiClient;
use crate::components::modal::Modal;
use crate::dom;
use classmark_core::model::Category;
use classmark_core::validate_new_category;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryFormProps {
    pub api: ApiClient,
    pub open: bool,
    /// Fired with the stored category once the collaborator accepts it.
    pub on_created: Callback<Category>,
    pub on_close: Callback<()>,
}

#[function_component(CategoryForm)]
pub fn category_form(props: &CategoryFormProps) -> Html {
    let name = use_state(String::new);
    let max_raw = use_state(|| "100".to_string());
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = dom::input_value(&e) {
                name.set(value);
            }
        })
    };
    let on_max = {
        let max_raw = max_raw.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = dom::input_value(&e) {
                max_raw.set(value);
            }
        })
    };

    let onsubmit = {
        let name = name.clone();
        let max_raw = max_raw.clone();
        let error = error.clone();
        let busy = busy.clone();
        let api = props.api.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let Ok(max_score) = max_raw.trim().parse::<f64>() else {
                error.set(Some("Enter a maximum score.".to_string()));
                return;
            };
            let new_category = match validate_new_category(&name, max_score) {
                Ok(category) => category,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            busy.set(true);
            let api = api.clone();
            let error = error.clone();
            let busy = busy.clone();
            let on_created = on_created.clone();
            let name = name.clone();
            let max_raw = max_raw.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.create_category(&new_category).await {
                    Ok(category) => {
                        // Back to the defaults for the next opening.
                        name.set(String::new());
                        max_raw.set("100".to_string());
                        on_created.emit(category);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <Modal open={props.open} title="Add a category" on_close={props.on_close.clone()}>
            <form class="category-form" {onsubmit}>
                <label for="category-name">{ "Name" }</label>
                <input
                    id="category-name"
                    type="text"
                    value={(*name).clone()}
                    oninput={on_name}
                    disabled={*busy}
                />
                <label for="category-max">{ "Maximum score" }</label>
                <input
                    id="category-max"
                    type="number"
                    min="1"
                    step="any"
                    value={(*max_raw).clone()}
                    oninput={on_max}
                    disabled={*busy}
                />
                if let Some(message) = error.as_ref() {
                    <p class="form-error" role="alert">{ message }</p>
                }
                <button type="submit" disabled={*busy}>
                    { if *busy { "Adding..." } else { "Add" } }
                </button>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;
    use futures::executor::block_on;
    use std::rc::Rc;
    use yew::LocalServerRenderer;

    fn props(open: bool) -> CategoryFormProps {
        CategoryFormProps {
            api: ApiClient::new(Rc::new(MemoryTokenStore::default())),
            open,
            on_created: Callback::noop(),
            on_close: Callback::noop(),
        }
    }

    #[test]
    fn renders_inside_the_modal_when_open() {
        let html =
            block_on(LocalServerRenderer::<CategoryForm>::with_props(props(true)).render());
        assert!(html.contains("Add a category"));
        assert!(html.contains("category-max"));
    }

    #[test]
    fn renders_nothing_when_closed() {
        let html =
            block_on(LocalServerRenderer::<CategoryForm>::with_props(props(false)).render());
        assert!(!html.contains("category-form"));
    }
}
