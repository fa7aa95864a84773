use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CategorySwatchProps {
  pub color: String
}

#[function_component(CategorySwatch)]
pub fn category_swatch(
  props: &CategorySwatchProps
) -> Html {
  html! {
      <span
          class="category-swatch"
          style={format!("background-color:{};", props.color)}
      ></span>
  }
}
