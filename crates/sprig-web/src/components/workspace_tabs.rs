use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct WorkspaceTabsProps {
  pub active: String,
  pub on_nav: Callback<String>
}

#[function_component(WorkspaceTabs)]
pub fn workspace_tabs(
  props: &WorkspaceTabsProps
) -> Html {
  let make_tab =
    |key: &str, label: &str| {
      let active =
        props.active == key;
      let class = if active {
        "tab active"
      } else {
        "tab"
      };
      let on_nav =
        props.on_nav.clone();
      let key_string =
        key.to_string();
      html! {
          <button
              type="button"
              class={class}
              onclick={move |_| on_nav.emit(key_string.clone())}
          >
              { label }
          </button>
      }
    };

  html! {
      <div class="workspace-tabs">
          { make_tab("list", "List") }
          { make_tab("kanban", "Kanban") }
      </div>
  }
}
