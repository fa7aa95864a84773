use sprig_core::state::{
  Notice,
  NoticeKind
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
  pub notice:     Notice,
  pub on_dismiss:
    Callback<MouseEvent>
}

#[function_component(NoticeBanner)]
pub fn notice_banner(
  props: &NoticeBannerProps
) -> Html {
  let class =
    match props.notice.kind {
      | NoticeKind::ListFetchFailed => {
        "notice notice-fetch"
      }
      | NoticeKind::MutationFailed => {
        "notice notice-mutation"
      }
    };

  html! {
      <div class={class}>
          <span>{ props.notice.message.clone() }</span>
          <button
              type="button"
              class="notice-dismiss"
              onclick={props.on_dismiss.clone()}
          >
              { "Dismiss" }
          </button>
      </div>
  }
}
