use sprig_shared::CategoryDto;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  UseStateHandle,
  function_component,
  html
};

#[derive(Clone, PartialEq)]
pub enum ModalMode {
  Add,
  Edit(String)
}

/// Draft form fields for both the
/// create and the edit flow. The due
/// date stays in the viewer-local
/// `datetime-local` shape until
/// submit.
#[derive(Clone, PartialEq)]
pub struct ModalState {
  pub mode:           ModalMode,
  pub draft_title:    String,
  pub draft_category: String,
  pub draft_desc:     String,
  pub draft_due:      String,
  pub error:          Option<String>
}

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub state_handle:
    UseStateHandle<Option<ModalState>>,
  pub busy:         bool,
  pub categories:   Vec<CategoryDto>,
  pub on_submit:
    Callback<ModalState>,
  pub on_close: Callback<MouseEvent>
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  let state_handle =
    props.state_handle.clone();
  let Some(state) =
    (*state_handle).clone()
  else {
    return html! {};
  };

  let heading = match &state.mode {
    | ModalMode::Add => "Add Task",
    | ModalMode::Edit(_) => {
      "Edit Task"
    }
  };

  let on_save_click = {
    let on_submit =
      props.on_submit.clone();
    let submit_state = state.clone();
    Callback::from(move |_| {
      on_submit
        .emit(submit_state.clone());
    })
  };

  let on_title_input = {
    let state_handle =
      state_handle.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*state_handle).clone()
        {
          current.draft_title =
            input.value();
          current.error = None;
          state_handle
            .set(Some(current));
        }
      }
    )
  };

  let on_category_change = {
    let state_handle =
      state_handle.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*state_handle).clone()
        {
          current.draft_category =
            select.value();
          current.error = None;
          state_handle
            .set(Some(current));
        }
      }
    )
  };

  let on_desc_input = {
    let state_handle =
      state_handle.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let area: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*state_handle).clone()
        {
          current.draft_desc =
            area.value();
          current.error = None;
          state_handle
            .set(Some(current));
        }
      }
    )
  };

  let on_due_input = {
    let state_handle =
      state_handle.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*state_handle).clone()
        {
          current.draft_due =
            input.value();
          current.error = None;
          state_handle
            .set(Some(current));
        }
      }
    )
  };

  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="header">{ heading }</div>
              <div class="content">
                  {
                      if let Some(err) = state.error.clone() {
                          html! { <div class="form-error">{ err }</div> }
                      } else {
                          html! {}
                      }
                  }
                  <div class="field">
                      <label>{ "Title" }</label>
                      <input
                          value={state.draft_title.clone()}
                          placeholder="Required task title"
                          oninput={on_title_input}
                      />
                  </div>
                  <div class="field">
                      <label>{ "Category" }</label>
                      <select
                          class="category-select"
                          value={state.draft_category.clone()}
                          onchange={on_category_change}
                      >
                          <option value="">{ "Select a category..." }</option>
                          {
                              for props.categories.iter().map(|category| html! {
                                  <option
                                      value={category.id.clone()}
                                      selected={category.id == state.draft_category}
                                  >
                                      { category.name.clone() }
                                  </option>
                              })
                          }
                      </select>
                  </div>
                  <div class="field">
                      <label>{ "Description (optional)" }</label>
                      <textarea
                          value={state.draft_desc.clone()}
                          placeholder="Optional details"
                          oninput={on_desc_input}
                      />
                  </div>
                  <div class="field">
                      <label>{ "Due" }</label>
                      <input
                          type="datetime-local"
                          value={state.draft_due.clone()}
                          oninput={on_due_input}
                      />
                  </div>
                  <div class="footer">
                      <button
                          type="button"
                          class="btn"
                          onclick={props.on_close.clone()}
                      >
                          { "Cancel" }
                      </button>
                      <button
                          type="button"
                          class="btn primary"
                          onclick={on_save_click}
                          disabled={props.busy}
                      >
                          { if props.busy { "Saving..." } else { "Save" } }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
