use chrono_tz::Tz;
use sprig_core::view::category_color;
use sprig_shared::{
  CategoryDto,
  TodoDto,
  TodoStatus
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::KanbanCard;

#[derive(Properties, PartialEq)]
pub struct KanbanColumnProps {
  pub status:     TodoStatus,
  pub cards:      Vec<TodoDto>,
  pub categories: Vec<CategoryDto>,
  pub timezone:   Tz,
  pub on_toggle:  Callback<TodoDto>,
  pub on_edit:    Callback<TodoDto>,
  pub on_delete:  Callback<String>
}

#[function_component(KanbanColumn)]
pub fn kanban_column(
  props: &KanbanColumnProps
) -> Html {
  html! {
      <div class="kanban-column">
          <div class="kanban-column-header">
              <span>{ props.status.label() }</span>
              <span class="badge">{ props.cards.len() }</span>
          </div>
          <div class="kanban-column-body">
              {
                  if props.cards.is_empty() {
                      html! { <div class="kanban-empty">{ "No tasks" }</div> }
                  } else {
                      html! {
                          <>
                              {
                                  for props.cards.iter().cloned().map(|todo| {
                                      let swatch_color = category_color(
                                          &props.categories,
                                          &todo.category,
                                      )
                                      .to_string();
                                      html! {
                                          <KanbanCard
                                              todo={todo}
                                              swatch_color={swatch_color}
                                              timezone={props.timezone}
                                              on_toggle={props.on_toggle.clone()}
                                              on_edit={props.on_edit.clone()}
                                              on_delete={props.on_delete.clone()}
                                          />
                                      }
                                  })
                              }
                          </>
                      }
                  }
              }
          </div>
      </div>
  }
}
