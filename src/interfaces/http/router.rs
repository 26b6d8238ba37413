//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BillingService, ParkingService};
use crate::domain::repositories::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{
    auth, health, metrics, parking_records, payments, request_id, slots, vehicles,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
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
        // Auth
        auth::login,
        auth::register,
        auth::get_current_user,
        // Slots
        slots::create_slot,
        slots::list_slots,
        slots::list_available_slots,
        slots::get_slot,
        slots::update_slot_status,
        slots::delete_slot,
        // Vehicles
        vehicles::register_vehicle,
        vehicles::list_vehicles,
        vehicles::get_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        // Parking records
        parking_records::check_in,
        parking_records::check_out,
        parking_records::list_records,
        parking_records::list_active_records,
        parking_records::get_record,
        parking_records::delete_record,
        // Payments
        payments::record_payment,
        payments::list_payments,
        payments::daily_report,
        payments::generate_bill,
        payments::get_payment,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::RegisterRequest,
            auth::UserInfo,
            // Slots
            slots::SlotResponse,
            slots::CreateSlotRequest,
            slots::UpdateSlotStatusRequest,
            // Vehicles
            vehicles::VehicleResponse,
            vehicles::RegisterVehicleRequest,
            vehicles::UpdateVehicleRequest,
            // Parking records
            parking_records::RecordResponse,
            parking_records::CheckInRequest,
            parking_records::CheckInResponse,
            parking_records::CheckOutRequest,
            parking_records::CheckOutResponse,
            // Payments
            payments::PaymentResponse,
            payments::RecordPaymentRequest,
            payments::PaymentCreatedResponse,
            payments::DailyReportResponse,
            payments::BillResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Operator authentication: login (JWT), registration"),
        (name = "Slots", description = "Parking slot inventory and availability"),
        (name = "Vehicles", description = "Registered vehicle and driver directory"),
        (name = "Parking Records", description = "Check-in / check-out occupancy ledger"),
        (name = "Payments", description = "Payment log, daily revenue reports and bills"),
    ),
    info(
        title = "ParkDesk Parking Sales API",
        version = "1.0.0",
        description = "REST API for parking space sales: slots, vehicles, occupancy records and payments",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    parking_service: Arc<ParkingService>,
    billing_service: Arc<BillingService>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    let auth_state = auth::AuthHandlerState { repos, jwt_config };

    let parking_state = slots::ParkingAppState {
        service: parking_service,
    };

    let billing_state = payments::BillingAppState {
        service: billing_service,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // Slot routes (protected)
    let slot_routes = Router::new()
        .route("/", get(slots::list_slots).post(slots::create_slot))
        .route("/available", get(slots::list_available_slots))
        .route(
            "/{slot_number}",
            get(slots::get_slot)
                .put(slots::update_slot_status)
                .delete(slots::delete_slot),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(parking_state.clone());

    // Vehicle routes (protected)
    let vehicle_routes = Router::new()
        .route(
            "/",
            get(vehicles::list_vehicles).post(vehicles::register_vehicle),
        )
        .route(
            "/{plate_number}",
            get(vehicles::get_vehicle)
                .put(vehicles::update_vehicle)
                .delete(vehicles::delete_vehicle),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(parking_state.clone());

    // Parking record routes (protected)
    let record_routes = Router::new()
        .route("/", get(parking_records::list_records))
        .route("/entry", post(parking_records::check_in))
        .route("/exit/{id}", put(parking_records::check_out))
        .route("/active", get(parking_records::list_active_records))
        .route(
            "/{id}",
            get(parking_records::get_record).delete(parking_records::delete_record),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(parking_state);

    // Payment routes (protected)
    let payment_routes = Router::new()
        .route(
            "/",
            get(payments::list_payments).post(payments::record_payment),
        )
        .route("/daily-report", get(payments::daily_report))
        .route("/bill/{record_id}", get(payments::generate_bill))
        .route("/{id}", get(payments::get_payment))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(billing_state);

    // Operational endpoints (public)
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState {
            handle: prometheus_handle,
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health + metrics
        .merge(health_routes)
        .merge(metrics_routes)
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Slots
        .nest("/api/v1/slots", slot_routes)
        // Vehicles
        .nest("/api/v1/vehicles", vehicle_routes)
        // Parking records
        .nest("/api/v1/parking-records", record_routes)
        // Payments
        .nest("/api/v1/payments", payment_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
}
