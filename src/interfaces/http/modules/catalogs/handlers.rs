//! Catalog handlers
//!
//! Reads are public, writes are staff-only. The utoipa annotations use the
//! `/domains` mount; the other three catalogs expose the same operations
//! under their own prefixes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::Response,
    routing::get,
    Extension, Json, Router,
};

use super::dto::{CatalogEntryDto, CatalogEntryRequest};
use crate::application::policy::{allows, base_role, Action, Resource};
use crate::domain::catalog::CatalogKind;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::User;
use crate::interfaces::http::common::{csv, ApiError, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};

#[derive(Clone)]
pub struct CatalogHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub kind: CatalogKind,
}

fn staff_only(actor: &User, action: Action) -> ApiResult<()> {
    if allows(base_role(actor), action, Resource::Catalogs) {
        Ok(())
    } else {
        Err(ApiError::forbidden())
    }
}

#[utoipa::path(
    get,
    path = "/domains",
    tag = "Catalogs",
    responses(
        (status = 200, description = "All rows of the catalog", body = [CatalogEntryDto])
    )
)]
pub async fn list_entries(
    State(state): State<CatalogHandlerState>,
) -> ApiResult<Json<Vec<CatalogEntryDto>>> {
    let entries = state.repos.catalogs().list(state.kind).await?;
    Ok(Json(entries.into_iter().map(CatalogEntryDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/domains/{id}",
    tag = "Catalogs",
    params(("id" = i32, Path, description = "Catalog row id")),
    responses(
        (status = 200, description = "One catalog row", body = CatalogEntryDto),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_entry(
    State(state): State<CatalogHandlerState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CatalogEntryDto>> {
    let entry = state
        .repos
        .catalogs()
        .find_by_id(state.kind, id)
        .await?
        .ok_or_else(|| ApiError::not_found("CatalogEntry"))?;
    Ok(Json(CatalogEntryDto::from(entry)))
}

#[utoipa::path(
    post,
    path = "/domains",
    tag = "Catalogs",
    security(("token_auth" = [])),
    request_body = CatalogEntryRequest,
    responses(
        (status = 201, description = "Row created", body = CatalogEntryDto),
        (status = 403, description = "Staff only")
    )
)]
pub async fn create_entry(
    State(state): State<CatalogHandlerState>,
    Extension(actor): Extension<User>,
    ValidatedJson(request): ValidatedJson<CatalogEntryRequest>,
) -> ApiResult<(StatusCode, Json<CatalogEntryDto>)> {
    staff_only(&actor, Action::Create)?;
    let entry = state
        .repos
        .catalogs()
        .create(state.kind, &request.name)
        .await?;
    Ok((StatusCode::CREATED, Json(CatalogEntryDto::from(entry))))
}

#[utoipa::path(
    put,
    path = "/domains/{id}",
    tag = "Catalogs",
    security(("token_auth" = [])),
    params(("id" = i32, Path, description = "Catalog row id")),
    request_body = CatalogEntryRequest,
    responses(
        (status = 200, description = "Row updated", body = CatalogEntryDto),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_entry(
    State(state): State<CatalogHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<CatalogEntryRequest>,
) -> ApiResult<Json<CatalogEntryDto>> {
    staff_only(&actor, Action::Update)?;
    state
        .repos
        .catalogs()
        .find_by_id(state.kind, id)
        .await?
        .ok_or_else(|| ApiError::not_found("CatalogEntry"))?;
    let entry = state
        .repos
        .catalogs()
        .update(state.kind, id, &request.name)
        .await?;
    Ok(Json(CatalogEntryDto::from(entry)))
}

#[utoipa::path(
    delete,
    path = "/domains/{id}",
    tag = "Catalogs",
    security(("token_auth" = [])),
    params(("id" = i32, Path, description = "Catalog row id")),
    responses(
        (status = 204, description = "Row deleted"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_entry(
    State(state): State<CatalogHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    staff_only(&actor, Action::Delete)?;
    state
        .repos
        .catalogs()
        .find_by_id(state.kind, id)
        .await?
        .ok_or_else(|| ApiError::not_found("CatalogEntry"))?;
    state.repos.catalogs().delete(state.kind, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/domains/export",
    tag = "Catalogs",
    security(("token_auth" = [])),
    responses(
        (status = 200, description = "CSV attachment of the catalog"),
        (status = 403, description = "Staff only")
    )
)]
pub async fn export_entries(
    State(state): State<CatalogHandlerState>,
    Extension(actor): Extension<User>,
) -> ApiResult<Response> {
    staff_only(&actor, Action::Export)?;
    let entries = state.repos.catalogs().list(state.kind).await?;
    let mut rows = vec![vec!["id".to_string(), "name".to_string()]];
    for entry in entries {
        rows.push(vec![entry.id.to_string(), entry.name]);
    }
    Ok(csv::attachment(state.kind.export_name(), &rows))
}

/// Build the router for one catalog mount.
pub fn catalog_routes(state: CatalogHandlerState, auth: AuthState) -> Router {
    let public = Router::new()
        .route("/", get(list_entries))
        .route("/{id}", get(get_entry))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/", axum::routing::post(create_entry))
        .route(
            "/{id}",
            axum::routing::put(update_entry).delete(delete_entry),
        )
        .route("/export", get(export_entries))
        .layer(middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(state);

    public.merge(protected)
}
