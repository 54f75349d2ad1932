//! The working screen: sidebar, per-category grid, student detail.

use crate::api::{ApiClient, ApiError};
use crate::components::ui::category_form::CategoryForm;
use crate::components::ui::evaluation_grid::EvaluationGrid;
use crate::components::ui::sidebar::Sidebar;
use crate::components::ui::student_detail::StudentDetail;
use crate::dom;
use crate::router::Route;
use classmark_core::model::{Category, Student};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub api: ApiClient,
    /// Category picked through the URL, if any.
    #[prop_or_default]
    pub selected_category_id: Option<i64>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let students = use_state(Vec::<Student>::new);
    let categories = use_state(Vec::<Category>::new);
    let loaded = use_state(|| false);
    let load_error = use_state(|| None::<String>);
    let show_category_form = use_state(|| false);
    let detail_student = use_state(|| None::<Student>);
    let navigator = use_navigator();

    {
        let api = props.api.clone();
        let students = students.clone();
        let categories = categories.clone();
        let loaded = loaded.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                let (students_res, categories_res) =
                    futures::join!(api.students(false), api.categories());
                match (students_res, categories_res) {
                    (Ok(roster), Ok(category_list)) => {
                        students.set(roster);
                        categories.set(category_list);
                        loaded.set(true);
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        if matches!(err, ApiError::Server { status: 401, .. }) {
                            // Stale token: drop it and start over at login.
                            api.end_session();
                            dom::navigate_to("/login");
                        } else {
                            load_error.set(Some(err.to_string()));
                        }
                    }
                }
            });
            || {}
        });
    }

    if let Some(message) = load_error.as_ref() {
        return html! {
            <div class="boot-screen boot-screen--error" role="alert">
                <p>{ message }</p>
            </div>
        };
    }
    if !*loaded {
        return html! {
            <div class="boot-screen" role="status">
                <p>{ "Loading..." }</p>
            </div>
        };
    }

    let on_select_category = {
        let navigator = navigator.clone();
        Callback::from(move |id: i64| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Category { id });
            }
        })
    };
    let on_add_category = {
        let show_category_form = show_category_form.clone();
        Callback::from(move |()| show_category_form.set(true))
    };
    let on_form_close = {
        let show_category_form = show_category_form.clone();
        Callback::from(move |()| show_category_form.set(false))
    };
    let on_created = {
        let categories = categories.clone();
        let show_category_form = show_category_form.clone();
        let navigator = navigator.clone();
        Callback::from(move |category: Category| {
            let mut next = (*categories).clone();
            let id = category.id;
            next.push(category);
            categories.set(next);
            show_category_form.set(false);
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Category { id });
            }
        })
    };
    let on_deleted = {
        let categories = categories.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: i64| {
            let next: Vec<Category> = categories.iter().filter(|c| c.id != id).cloned().collect();
            categories.set(next);
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
        })
    };
    let on_select_student = {
        let detail_student = detail_student.clone();
        Callback::from(move |student: Student| detail_student.set(Some(student)))
    };
    let on_detail_close = {
        let detail_student = detail_student.clone();
        Callback::from(move |()| detail_student.set(None))
    };
    let on_logout = {
        let api = props.api.clone();
        Callback::from(move |()| {
            if dom::confirm("Sign out?") {
                api.end_session();
                dom::navigate_to("/login");
            }
        })
    };

    let selected_category = props
        .selected_category_id
        .and_then(|id| categories.iter().find(|c| c.id == id).cloned());

    let main = match selected_category {
        Some(category) => html! {
            <EvaluationGrid
                api={props.api.clone()}
                key={category.id.to_string()}
                category={category.clone()}
                students={(*students).clone()}
                {on_deleted}
                on_select_student={on_select_student.clone()}
            />
        },
        None => {
            let hint = if categories.is_empty() {
                "Add a category to start recording scores."
            } else {
                "Pick a category on the left."
            };
            html! {
                <div class="dashboard__welcome">
                    <h1>{ "Evaluations" }</h1>
                    <p>{ hint }</p>
                </div>
            }
        }
    };

    html! {
        <div class="dashboard">
            <Sidebar
                categories={(*categories).clone()}
                students={(*students).clone()}
                selected_category_id={props.selected_category_id}
                {on_select_category}
                {on_add_category}
                on_select_student={on_select_student}
                {on_logout}
            />
            <main class="dashboard__main">{ main }</main>
            <CategoryForm
                api={props.api.clone()}
                open={*show_category_form}
                {on_created}
                on_close={on_form_close}
            />
            if let Some(student) = (*detail_student).clone() {
                <StudentDetail
                    api={props.api.clone()}
                    {student}
                    categories={(*categories).clone()}
                    on_close={on_detail_close}
                />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;
    use futures::executor::block_on;
    use std::rc::Rc;
    use yew::LocalServerRenderer;
    use yew_router::Router;
    use yew_router::history::{AnyHistory, MemoryHistory};

    #[function_component(Shell)]
    fn shell() -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        let api = ApiClient::new(Rc::new(MemoryTokenStore::default()));
        html! {
            <Router {history}>
                <DashboardPage {api} selected_category_id={None::<i64>} />
            </Router>
        }
    }

    // Effects do not run during server rendering, so the page stays in
    // its pre-fetch state.
    #[test]
    fn shows_the_loading_state_before_data_arrives() {
        let html = block_on(LocalServerRenderer::<Shell>::new().render());
        assert!(html.contains("Loading..."));
    }
}
