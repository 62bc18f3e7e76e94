//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::booking::BookingService;
use crate::application::identity::IdentityService;
use crate::application::payments::PaymentService;
use crate::domain::catalog::CatalogKind;
use crate::domain::repositories::RepositoryProvider;
use crate::interfaces::http::common::PaginatedResponse;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{
    auth, catalogs, health, payment_profiles, periods, reservations, time_slots, users,
    workplaces,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token_auth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "Temporary token, sent as `Token <key>`",
                ))),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Authentication
        auth::login,
        auth::logout,
        // Users
        users::register,
        users::list_users,
        users::get_user,
        users::update_user,
        users::deactivate_user,
        users::export_users,
        users::activate,
        users::reset_password,
        users::change_password,
        // Catalogs (documented on the /domains mount)
        catalogs::list_entries,
        catalogs::get_entry,
        catalogs::create_entry,
        catalogs::update_entry,
        catalogs::delete_entry,
        catalogs::export_entries,
        // Workplaces
        workplaces::list_workplaces,
        workplaces::get_workplace,
        workplaces::create_workplace,
        workplaces::update_workplace,
        // Periods
        periods::list_periods,
        periods::get_period,
        periods::create_period,
        periods::update_period,
        // Time slots
        time_slots::list_time_slots,
        time_slots::get_time_slot,
        time_slots::create_time_slot,
        time_slots::update_time_slot,
        // Reservations
        reservations::create_reservation,
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::update_presence,
        reservations::cancel_reservation,
        // Payment profiles
        payment_profiles::create_profile,
        payment_profiles::list_profiles,
        payment_profiles::get_profile,
        payment_profiles::add_card,
        payment_profiles::update_card,
    ),
    components(
        schemas(
            health::HealthResponse,
            auth::LoginRequest,
            auth::TokenResponse,
            users::UserDto,
            users::UserResponse,
            users::RegisterRequest,
            users::UpdateUserRequest,
            users::ActivateRequest,
            users::ActivationResponse,
            users::ResetPasswordRequest,
            users::ChangePasswordRequest,
            catalogs::CatalogEntryDto,
            catalogs::CatalogEntryRequest,
            workplaces::WorkplaceDto,
            workplaces::WorkplaceRequest,
            periods::PeriodDto,
            periods::PeriodRequest,
            time_slots::TimeSlotDto,
            time_slots::TimeSlotRequest,
            reservations::ReservationDto,
            reservations::ReservationRequest,
            payment_profiles::PaymentProfileDto,
            payment_profiles::PaymentProfileRequest,
            payment_profiles::CardRequest,
            PaginatedResponse<users::UserDto>,
            PaginatedResponse<reservations::ReservationDto>,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Temporary-token login and logout"),
        (name = "Users", description = "Signup, activation, profiles, password flows"),
        (name = "Catalogs", description = "Reference catalogs: /domains, /organizations, \
            /academic_levels and /academic_fields expose identical operations"),
        (name = "Workplaces", description = "Bookable locations and volunteers"),
        (name = "Periods", description = "Dated offering windows per workplace"),
        (name = "TimeSlots", description = "Bookable windows with live capacity"),
        (name = "Reservations", description = "Booking, presence check-in and soft-cancel"),
        (name = "PaymentProfiles", description = "References into the external card vault"),
    ),
    info(
        title = "Atelier Booking API",
        version = "0.1.0",
        description = "REST API for memberships, workplace reservations and payment profiles",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    identity: Arc<IdentityService>,
    booking: Arc<BookingService>,
    payments: Arc<PaymentService>,
) -> Router {
    let auth_state = AuthState {
        identity: identity.clone(),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // ── Authentication ─────────────────────────────────────────
    let auth_handler_state = auth::AuthHandlerState {
        identity: identity.clone(),
    };
    let auth_public = Router::new()
        .route("/authentication", post(auth::login))
        .with_state(auth_handler_state.clone());
    let auth_protected = Router::new()
        .route("/authentication/{key}", axum::routing::delete(auth::logout))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_handler_state);

    // ── Users ──────────────────────────────────────────────────
    let user_state = users::UserHandlerState {
        identity: identity.clone(),
        repos: repos.clone(),
    };
    let users_public = Router::new()
        .route("/users", post(users::register))
        .route("/users/activate", post(users::activate))
        .route("/reset-password", post(users::reset_password))
        .route("/change-password", post(users::change_password))
        .with_state(user_state.clone());
    let users_protected = Router::new()
        .route("/users", get(users::list_users))
        .route("/users/export", get(users::export_users))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::deactivate_user),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(user_state);

    // ── Catalogs: four mounts over one handler set ─────────────
    let catalog_router = |kind: CatalogKind| {
        catalogs::catalog_routes(
            catalogs::CatalogHandlerState {
                repos: repos.clone(),
                kind,
            },
            auth_state.clone(),
        )
    };

    // ── Workplaces ─────────────────────────────────────────────
    let workplace_state = workplaces::WorkplaceHandlerState {
        repos: repos.clone(),
    };
    let workplaces_public = Router::new()
        .route("/workplaces", get(workplaces::list_workplaces))
        .route("/workplaces/{id}", get(workplaces::get_workplace))
        .with_state(workplace_state.clone());
    let workplaces_protected = Router::new()
        .route("/workplaces", post(workplaces::create_workplace))
        .route(
            "/workplaces/{id}",
            axum::routing::put(workplaces::update_workplace),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(workplace_state);

    // ── Periods ────────────────────────────────────────────────
    let period_state = periods::PeriodHandlerState {
        booking: booking.clone(),
        repos: repos.clone(),
    };
    let periods_public = Router::new()
        .route("/periods", get(periods::list_periods))
        .route("/periods/{id}", get(periods::get_period))
        .with_state(period_state.clone());
    let periods_protected = Router::new()
        .route("/periods", post(periods::create_period))
        .route("/periods/{id}", axum::routing::put(periods::update_period))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(period_state);

    // ── Time slots ─────────────────────────────────────────────
    let slot_state = time_slots::TimeSlotHandlerState {
        booking: booking.clone(),
        repos: repos.clone(),
    };
    let slots_public = Router::new()
        .route("/time_slots", get(time_slots::list_time_slots))
        .route("/time_slots/{id}", get(time_slots::get_time_slot))
        .with_state(slot_state.clone());
    let slots_protected = Router::new()
        .route("/time_slots", post(time_slots::create_time_slot))
        .route(
            "/time_slots/{id}",
            axum::routing::put(time_slots::update_time_slot),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(slot_state);

    // ── Reservations ───────────────────────────────────────────
    let reservation_routes = Router::new()
        .route(
            "/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/reservations/{id}",
            get(reservations::get_reservation)
                .patch(reservations::update_presence)
                .delete(reservations::cancel_reservation),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(reservations::ReservationHandlerState { booking });

    // ── Payment profiles ───────────────────────────────────────
    let payment_routes = Router::new()
        .route(
            "/payment-profiles",
            get(payment_profiles::list_profiles).post(payment_profiles::create_profile),
        )
        .route(
            "/payment-profiles/{id}",
            get(payment_profiles::get_profile),
        )
        .route(
            "/payment-profiles/{id}/cards",
            post(payment_profiles::add_card),
        )
        .route(
            "/payment-profiles/{id}/cards/{card_id}",
            axum::routing::put(payment_profiles::update_card),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(payment_profiles::PaymentProfileHandlerState { payments });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .merge(auth_public)
        .merge(auth_protected)
        .merge(users_public)
        .merge(users_protected)
        .nest("/domains", catalog_router(CatalogKind::Domain))
        .nest("/organizations", catalog_router(CatalogKind::Organization))
        .nest("/academic_levels", catalog_router(CatalogKind::AcademicLevel))
        .nest("/academic_fields", catalog_router(CatalogKind::AcademicField))
        .merge(workplaces_public)
        .merge(workplaces_protected)
        .merge(periods_public)
        .merge(periods_protected)
        .merge(slots_public)
        .merge(slots_protected)
        .merge(reservation_routes)
        .merge(payment_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::Service;

    use super::*;
    use crate::application::test_support::{test_service, InMemoryRepos, StubGateway};

    #[tokio::test]
    async fn router_assembles_and_serves_public_and_protected_routes() {
        let repos = Arc::new(InMemoryRepos::new());
        let identity = Arc::new(test_service(repos.clone(), true, false));
        let booking = Arc::new(BookingService::new(repos.clone()));
        let payments = Arc::new(PaymentService::new(
            repos.clone(),
            Arc::new(StubGateway {
                profile_id: "vault-profile-1".into(),
            }),
            "https://api.test.paysafe.com/customervault/v1/".into(),
        ));

        let mut app = create_api_router(repos, identity, booking, payments).into_service();

        let response = app
            .call(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Every protected mount rejects missing credentials.
        for uri in ["/reservations", "/payment-profiles", "/users"] {
            let response = app
                .call(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        }

        // Catalog reads are public on all four mounts.
        for uri in ["/domains", "/organizations", "/academic_levels", "/academic_fields"] {
            let response = app
                .call(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }
}
