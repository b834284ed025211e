use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use domain::Person;
use serde::Deserialize;
use tracing::info;

use crate::actions::{AssociationAction, ConfirmAction, EditAction, Referrer};
use crate::error::AppError;
use crate::forms::{AddAssociationForm, CommandForm, ConfirmForm};
use crate::params::{parse_id, parse_id_pair};
use crate::views;
use crate::AppState;

/// Controller for person management, with clients as the associated kind.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(list))
        .route("/create", get(create_form).post(create))
        .route("/person-view/:id", get(view).post(back))
        .route("/edit", post(edit))
        .route("/edit/:id", get(edit_form).post(edit_association))
        .route("/delete", post(delete))
        .route("/delete/:id", get(delete_form))
        .route("/remove/:id", get(remove_form).post(remove))
        .route("/available-clients/:id", get(available).post(add_available))
}

#[derive(Debug, Deserialize)]
pub struct PersonForm {
    pub entity_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub command: Option<String>,
}

impl PersonForm {
    fn into_person(self) -> Person {
        Person {
            id: self.entity_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email_address: self.email_address,
            street_address: self.street_address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
        }
    }
}

async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let persons = state.app.person_service.list_entities().await?;
    Ok(views::person::list(&persons).into_response())
}

async fn create_form() -> Response {
    views::person::form(&Person::default(), &[], false).into_response()
}

async fn create(
    State(state): State<AppState>,
    Form(form): Form<PersonForm>,
) -> Result<Response, AppError> {
    let person = form.into_person();
    let errors = state.app.person_service.validate_entity(&person);
    if !errors.is_empty() {
        return Ok(views::person::form(&person, &errors, false).into_response());
    }

    let id = state.app.person_service.create_entity(person).await?;
    info!("created person {id}");
    Ok(Redirect::to("/person/list").into_response())
}

async fn view(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let person = state.app.person_service.read_entity(id).await?;
    let clients = state.app.person_service.get_associations(id).await?;
    Ok(views::person::detail(&person, &clients).into_response())
}

async fn back(Path(id): Path<i32>) -> Redirect {
    Redirect::to(&format!("/person/person-view/{id}"))
}

async fn edit_form(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw)?;
    let person = state.app.person_service.read_entity(id).await?;
    Ok(views::person::form(&person, &[], true).into_response())
}

async fn edit(
    State(state): State<AppState>,
    Form(form): Form<PersonForm>,
) -> Result<Response, AppError> {
    let command = form.command.clone().unwrap_or_default();
    let person = form.into_person();
    let id = person
        .id
        .ok_or_else(|| AppError::BadRequest("missing entity id".to_string()))?;

    let errors = state.app.person_service.validate_entity(&person);
    if !errors.is_empty() {
        return Ok(views::person::form(&person, &errors, true).into_response());
    }

    state.app.person_service.update_entity(person).await?;
    info!("updated person {id}");

    match EditAction::parse(&command) {
        EditAction::AddAssociations => {
            let person = state.app.person_service.read_entity(id).await?;
            let available = state
                .app
                .person_service
                .get_available_associations(id)
                .await?;
            Ok(views::person::associations(&person, &available, Referrer::Edit, true)
                .into_response())
        }
        EditAction::SeeRemoveAssociations => {
            let person = state.app.person_service.read_entity(id).await?;
            let current = state.app.person_service.get_associations(id).await?;
            Ok(views::person::associations(&person, &current, Referrer::Edit, false)
                .into_response())
        }
        EditAction::Save => Ok(Redirect::to("/person/list").into_response()),
    }
}

async fn edit_association(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<CommandForm>,
) -> Result<Response, AppError> {
    let (id, client_id) = parse_id_pair(&raw)?;

    match AssociationAction::parse(&form.command) {
        Some(AssociationAction::Add) => {
            state.app.person_service.add_association(id, client_id).await?;
        }
        Some(AssociationAction::Remove) => {
            state
                .app
                .person_service
                .remove_association(id, client_id)
                .await?;
        }
        None => {}
    }

    let person = state.app.person_service.read_entity(id).await?;
    Ok(views::person::form(&person, &[], true).into_response())
}

async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let person = state.app.person_service.read_entity(id).await?;
    Ok(views::person::delete_confirm(&person).into_response())
}

async fn delete(
    State(state): State<AppState>,
    Form(form): Form<ConfirmForm>,
) -> Result<Response, AppError> {
    if ConfirmAction::parse_delete(&form.command) == ConfirmAction::Confirm {
        state.app.person_service.delete_entity(form.entity_id).await?;
        info!("deleted person {}", form.entity_id);
    }
    Ok(Redirect::to("/person/list").into_response())
}

async fn remove_form(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response, AppError> {
    let (id, client_id) = parse_id_pair(&raw)?;
    let person = state.app.person_service.read_entity(id).await?;
    let client = state
        .app
        .person_service
        .read_associated_entity(client_id)
        .await?;
    Ok(views::person::remove_confirm(&person, &client).into_response())
}

async fn remove(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<ConfirmForm>,
) -> Result<Response, AppError> {
    let client_id = parse_id(&raw)?;
    if ConfirmAction::parse_remove(&form.command) == ConfirmAction::Confirm {
        state
            .app
            .person_service
            .remove_association(form.entity_id, client_id)
            .await?;
    }
    Ok(Redirect::to(&format!("/person/person-view/{}", form.entity_id)).into_response())
}

async fn available(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let person = state.app.person_service.read_entity(id).await?;
    let clients = state
        .app
        .person_service
        .get_available_associations(id)
        .await?;
    Ok(views::person::associations(&person, &clients, Referrer::View, true).into_response())
}

async fn add_available(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<AddAssociationForm>,
) -> Result<Response, AppError> {
    let client_id = parse_id(&raw)?;
    state
        .app
        .person_service
        .add_association(form.entity_id, client_id)
        .await?;

    let target = match Referrer::parse(&form.referrer) {
        Referrer::Edit => format!("/person/edit/{}", form.entity_id),
        Referrer::View => format!("/person/person-view/{}", form.entity_id),
    };
    Ok(Redirect::to(&target).into_response())
}
