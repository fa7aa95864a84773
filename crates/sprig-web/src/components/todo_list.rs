use chrono_tz::Tz;
use sprig_core::view::category_color;
use sprig_shared::{
  CategoryDto,
  TodoDto
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TodoListRow;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
  pub todos:      Vec<TodoDto>,
  pub categories: Vec<CategoryDto>,
  pub timezone:   Tz,
  pub on_toggle:  Callback<TodoDto>,
  pub on_edit:    Callback<TodoDto>,
  pub on_delete:  Callback<String>
}

#[function_component(TodoList)]
pub fn todo_list(
  props: &TodoListProps
) -> Html {
  html! {
      <div class="panel list">
          <div class="header">{ "Tasks" }</div>
          {
              if props.todos.is_empty() {
                  html! { <p class="list-empty">{ "No tasks yet." }</p> }
              } else {
                  html! {
                      <>
                          {
                              for props.todos.iter().cloned().map(|todo| {
                                  let swatch_color = category_color(
                                      &props.categories,
                                      &todo.category,
                                  )
                                  .to_string();
                                  html! {
                                      <TodoListRow
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
  }
}
