use gloo::net::http::{
  Request,
  Response
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sprig_core::error::ApiError;
use sprig_shared::{
  CategoryDto,
  TodoCreate,
  TodoDto
};

/// Typed client for the todo REST
/// contract, shared by the flat
/// list and the kanban board. One
/// request per call; no retries, no
/// timeouts.
#[derive(Clone, PartialEq)]
pub struct TodoApi {
  base_url: String
}

impl TodoApi {
  pub fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url
        .trim_end_matches('/')
        .to_string()
    }
  }

  fn endpoint(
    &self,
    path: &str
  ) -> String {
    format!("{}{path}", self.base_url)
  }

  pub async fn list_todos(
    &self
  ) -> Result<Vec<TodoDto>, ApiError>
  {
    fetch_list(
      &self.endpoint("/api/todos")
    )
    .await
  }

  pub async fn list_categories(
    &self
  ) -> Result<
    Vec<CategoryDto>,
    ApiError
  > {
    fetch_list(
      &self.endpoint("/api/categories")
    )
    .await
  }

  pub async fn create_todo(
    &self,
    draft: &TodoCreate
  ) -> Result<TodoDto, ApiError> {
    let response = send_json(
      Request::post(
        &self.endpoint("/api/todos")
      ),
      draft
    )
    .await?;
    decode_body(response).await
  }

  /// Full-object replace: the entire
  /// todo is sent and the server
  /// overwrites all fields.
  pub async fn update_todo(
    &self,
    todo: &TodoDto
  ) -> Result<TodoDto, ApiError> {
    let response = send_json(
      Request::put(&self.endpoint(
        &format!(
          "/api/todos/{}",
          todo.id
        )
      )),
      todo
    )
    .await?;
    decode_body(response).await
  }

  pub async fn delete_todo(
    &self,
    id: &str
  ) -> Result<(), ApiError> {
    let response =
      Request::delete(&self.endpoint(
        &format!("/api/todos/{id}")
      ))
      .send()
      .await
      .map_err(network_error)?;
    check_status(response)?;
    Ok(())
  }
}

async fn fetch_list<T>(
  url: &str
) -> Result<Vec<T>, ApiError>
where
  T: DeserializeOwned
{
  let response = Request::get(url)
    .send()
    .await
    .map_err(network_error)?;
  let response =
    check_status(response)?;

  // The backend encodes an empty
  // collection as JSON null.
  let list: Option<Vec<T>> = response
    .json()
    .await
    .map_err(decode_error)?;
  Ok(list.unwrap_or_default())
}

async fn send_json<B>(
  builder: gloo::net::http::RequestBuilder,
  body: &B
) -> Result<Response, ApiError>
where
  B: Serialize
{
  let request = builder
    .json(body)
    .map_err(|err| {
      ApiError::Decode(format!(
        "request body encode: {err}"
      ))
    })?;
  let response = request
    .send()
    .await
    .map_err(network_error)?;
  check_status(response)
}

async fn decode_body<T>(
  response: Response
) -> Result<T, ApiError>
where
  T: DeserializeOwned
{
  response
    .json()
    .await
    .map_err(decode_error)
}

fn check_status(
  response: Response
) -> Result<Response, ApiError> {
  if response.ok() {
    Ok(response)
  } else {
    Err(ApiError::Status(
      response.status()
    ))
  }
}

fn network_error(
  err: gloo::net::Error
) -> ApiError {
  ApiError::Network(err.to_string())
}

fn decode_error(
  err: gloo::net::Error
) -> ApiError {
  ApiError::Decode(err.to_string())
}
