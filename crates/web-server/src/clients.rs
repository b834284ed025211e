use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use domain::Client;
use serde::Deserialize;
use tracing::info;

use crate::actions::{AssociationAction, ConfirmAction, EditAction, Referrer};
use crate::error::AppError;
use crate::forms::{AddAssociationForm, CommandForm, ConfirmForm};
use crate::params::{parse_id, parse_id_pair};
use crate::views;
use crate::AppState;

/// Controller for client management, with persons as the associated kind.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(list))
        .route("/create", get(create_form).post(create))
        .route("/client-view/:id", get(view).post(back))
        .route("/edit", post(edit))
        .route("/edit/:id", get(edit_form).post(edit_association))
        .route("/delete", post(delete))
        .route("/delete/:id", get(delete_form))
        .route("/remove/:id", get(remove_form).post(remove))
        .route("/available-contacts/:id", get(available).post(add_available))
}

#[derive(Debug, Deserialize)]
pub struct ClientForm {
    pub entity_id: Option<i32>,
    pub company_name: String,
    pub website: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub command: Option<String>,
}

impl ClientForm {
    fn into_client(self) -> Client {
        Client {
            id: self.entity_id,
            company_name: self.company_name,
            website: self.website,
            phone: self.phone,
            street_address: self.street_address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
        }
    }
}

async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let clients = state.app.client_service.list_entities().await?;
    Ok(views::client::list(&clients).into_response())
}

async fn create_form() -> Response {
    views::client::form(&Client::default(), &[], false).into_response()
}

async fn create(
    State(state): State<AppState>,
    Form(form): Form<ClientForm>,
) -> Result<Response, AppError> {
    let client = form.into_client();
    let errors = state.app.client_service.validate_entity(&client);
    if !errors.is_empty() {
        return Ok(views::client::form(&client, &errors, false).into_response());
    }

    let id = state.app.client_service.create_entity(client).await?;
    info!("created client {id}");
    Ok(Redirect::to("/client/list").into_response())
}

async fn view(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let client = state.app.client_service.read_entity(id).await?;
    let contacts = state.app.client_service.get_associations(id).await?;
    Ok(views::client::detail(&client, &contacts).into_response())
}

async fn back(Path(id): Path<i32>) -> Redirect {
    Redirect::to(&format!("/client/client-view/{id}"))
}

async fn edit_form(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw)?;
    let client = state.app.client_service.read_entity(id).await?;
    Ok(views::client::form(&client, &[], true).into_response())
}

async fn edit(
    State(state): State<AppState>,
    Form(form): Form<ClientForm>,
) -> Result<Response, AppError> {
    let command = form.command.clone().unwrap_or_default();
    let client = form.into_client();
    let id = client
        .id
        .ok_or_else(|| AppError::BadRequest("missing entity id".to_string()))?;

    let errors = state.app.client_service.validate_entity(&client);
    if !errors.is_empty() {
        return Ok(views::client::form(&client, &errors, true).into_response());
    }

    state.app.client_service.update_entity(client).await?;
    info!("updated client {id}");

    match EditAction::parse(&command) {
        EditAction::AddAssociations => {
            let client = state.app.client_service.read_entity(id).await?;
            let available = state
                .app
                .client_service
                .get_available_associations(id)
                .await?;
            Ok(views::client::associations(&client, &available, Referrer::Edit, true)
                .into_response())
        }
        EditAction::SeeRemoveAssociations => {
            let client = state.app.client_service.read_entity(id).await?;
            let current = state.app.client_service.get_associations(id).await?;
            Ok(views::client::associations(&client, &current, Referrer::Edit, false)
                .into_response())
        }
        EditAction::Save => Ok(Redirect::to("/client/list").into_response()),
    }
}

async fn edit_association(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<CommandForm>,
) -> Result<Response, AppError> {
    let (id, person_id) = parse_id_pair(&raw)?;

    match AssociationAction::parse(&form.command) {
        Some(AssociationAction::Add) => {
            state.app.client_service.add_association(id, person_id).await?;
        }
        Some(AssociationAction::Remove) => {
            state
                .app
                .client_service
                .remove_association(id, person_id)
                .await?;
        }
        None => {}
    }

    let client = state.app.client_service.read_entity(id).await?;
    Ok(views::client::form(&client, &[], true).into_response())
}

async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let client = state.app.client_service.read_entity(id).await?;
    Ok(views::client::delete_confirm(&client).into_response())
}

async fn delete(
    State(state): State<AppState>,
    Form(form): Form<ConfirmForm>,
) -> Result<Response, AppError> {
    if ConfirmAction::parse_delete(&form.command) == ConfirmAction::Confirm {
        state.app.client_service.delete_entity(form.entity_id).await?;
        info!("deleted client {}", form.entity_id);
    }
    Ok(Redirect::to("/client/list").into_response())
}

async fn remove_form(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response, AppError> {
    let (id, person_id) = parse_id_pair(&raw)?;
    let client = state.app.client_service.read_entity(id).await?;
    let person = state
        .app
        .client_service
        .read_associated_entity(person_id)
        .await?;
    Ok(views::client::remove_confirm(&client, &person).into_response())
}

async fn remove(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<ConfirmForm>,
) -> Result<Response, AppError> {
    let person_id = parse_id(&raw)?;
    if ConfirmAction::parse_remove(&form.command) == ConfirmAction::Confirm {
        state
            .app
            .client_service
            .remove_association(form.entity_id, person_id)
            .await?;
    }
    Ok(Redirect::to(&format!("/client/client-view/{}", form.entity_id)).into_response())
}

async fn available(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let client = state.app.client_service.read_entity(id).await?;
    let contacts = state
        .app
        .client_service
        .get_available_associations(id)
        .await?;
    Ok(views::client::associations(&client, &contacts, Referrer::View, true).into_response())
}

async fn add_available(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<AddAssociationForm>,
) -> Result<Response, AppError> {
    let person_id = parse_id(&raw)?;
    state
        .app
        .client_service
        .add_association(form.entity_id, person_id)
        .await?;

    let target = match Referrer::parse(&form.referrer) {
        Referrer::Edit => format!("/client/edit/{}", form.entity_id),
        Referrer::View => format!("/client/client-view/{}", form.entity_id),
    };
    Ok(Redirect::to(&target).into_response())
}
