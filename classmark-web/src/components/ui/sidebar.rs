//! Dashboard sidebar: category list, roster list, session actions.
//!
//! Pure view; every action is reported upward through a callback.

use classmark_core::model::{Category, Student};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub categories: Vec<Category>,
    pub students: Vec<Student>,
    #[prop_or_default]
    pub selected_category_id: Option<i64>,
    pub on_select_category: Callback<i64>,
    pub on_add_category: Callback<()>,
    pub on_select_student: Callback<Student>,
    pub on_logout: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let categories: Html = props
        .categories
        .iter()
        .map(|category| {
            let selected = props.selected_category_id == Some(category.id);
            let on_select = {
                let cb = props.on_select_category.clone();
                let id = category.id;
                Callback::from(move |_: MouseEvent| cb.emit(id))
            };
            html! {
                <li key={category.id.to_string()}>
                    <button
                        type="button"
                        class={classes!(
                            "sidebar__item",
                            selected.then_some("sidebar__item--selected"),
                        )}
                        onclick={on_select}
                    >
                        { &category.name }
                        <span class="sidebar__max">{ format!("/ {}", category.max_score) }</span>
                    </button>
                </li>
            }
        })
        .collect();

    let students: Html = props
        .students
        .iter()
        .map(|student| {
            let on_select = {
                let cb = props.on_select_student.clone();
                let student = student.clone();
                Callback::from(move |_: MouseEvent| cb.emit(student.clone()))
            };
            html! {
                <li key={student.id.to_string()}>
                    <button type="button" class="sidebar__item" onclick={on_select}>
                        <span class="sidebar__number">{ student.student_number }</span>
                        { &student.name }
                    </button>
                </li>
            }
        })
        .collect();

    let on_add = {
        let cb = props.on_add_category.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <nav class="sidebar">
            <section class="sidebar__section">
                <div class="sidebar__heading">
                    <h2>{ "Categories" }</h2>
                    <button
                        type="button"
                        class="sidebar__add"
                        aria-label="Add a category"
                        onclick={on_add}
                    >
                        { "+" }
                    </button>
                </div>
                if props.categories.is_empty() {
                    <p class="sidebar__empty">{ "No categories yet." }</p>
                } else {
                    <ul class="sidebar__list">{ categories }</ul>
                }
            </section>
            <section class="sidebar__section">
                <h2>{ format!("Students ({})", props.students.len()) }</h2>
                <ul class="sidebar__list">{ students }</ul>
            </section>
            <button type="button" class="sidebar__logout" onclick={on_logout}>
                { "Sign out" }
            </button>
        </nav>
    }
}
