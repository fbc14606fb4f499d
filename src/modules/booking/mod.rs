pub mod models;
pub mod sessions;
pub mod wizard;

use async_trait::async_trait;
use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use once_cell::sync::Lazy;
use serde_json::json;
use uuid::Uuid;

use stayfinder_http::error::AppError;
use stayfinder_kernel::{InitCtx, Module};

use crate::modules::catalog::data;
use models::{
    BookingConfirmation, CreateSessionRequest, NextOutcome, NextResponse, SessionCreated,
    UpdateFieldRequest, WizardView,
};
use sessions::{NextResult, SessionStore, Snapshot};

static SESSIONS: Lazy<SessionStore> = Lazy::new(SessionStore::new);

/// Booking module owning the checkout wizard sessions
pub struct BookingModule;

impl BookingModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for BookingModule {
    fn name(&self) -> &'static str {
        "booking"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "booking module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/sessions", post(create_session))
            .route("/sessions/{id}", get(get_session).delete(abandon_session))
            .route("/sessions/{id}/fields", put(update_field))
            .route("/sessions/{id}/next", post(go_next))
            .route("/sessions/{id}/back", post(go_back))
            .route("/health", get(health_check))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/sessions": {
                    "post": {
                        "summary": "Open a booking wizard session for a hotel",
                        "tags": ["Booking"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "hotel_id": { "type": "string" }
                                        },
                                        "required": ["hotel_id"]
                                    }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Session created at step 1",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/WizardView"
                                        }
                                    }
                                }
                            },
                            "404": {
                                "description": "Hotel not found",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/sessions/{id}": {
                    "get": {
                        "summary": "Current wizard view for a session",
                        "tags": ["Booking"],
                        "parameters": [
                            {
                                "name": "id",
                                "in": "path",
                                "required": true,
                                "schema": { "type": "string", "format": "uuid" }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Wizard view",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/WizardView"
                                        }
                                    }
                                }
                            },
                            "404": {
                                "description": "Session not found",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "delete": {
                        "summary": "Abandon a session, discarding its draft",
                        "tags": ["Booking"],
                        "parameters": [
                            {
                                "name": "id",
                                "in": "path",
                                "required": true,
                                "schema": { "type": "string", "format": "uuid" }
                            }
                        ],
                        "responses": {
                            "204": {
                                "description": "Session discarded"
                            },
                            "404": {
                                "description": "Session not found",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/sessions/{id}/fields": {
                    "put": {
                        "summary": "Write one draft field and clear its stale error",
                        "tags": ["Booking"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "field": { "type": "string", "example": "checkIn" },
                                            "value": { "type": "string" }
                                        },
                                        "required": ["field", "value"]
                                    }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Updated wizard view",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/WizardView"
                                        }
                                    }
                                }
                            },
                            "400": {
                                "description": "Unparseable value",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/sessions/{id}/next": {
                    "post": {
                        "summary": "Run the current step's gate and advance on success",
                        "tags": ["Booking"],
                        "responses": {
                            "200": {
                                "description": "Outcome with the view, or the confirmation on completion",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/NextResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/sessions/{id}/back": {
                    "post": {
                        "summary": "Step backward without validating (no-op at step 1)",
                        "tags": ["Booking"],
                        "responses": {
                            "200": {
                                "description": "Wizard view",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/WizardView"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Booking health check",
                        "tags": ["Booking"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "text/plain": {
                                        "schema": { "type": "string" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "WizardView": {
                        "type": "object",
                        "properties": {
                            "current_step": {
                                "type": "integer",
                                "minimum": 1,
                                "maximum": 3
                            },
                            "field_errors": {
                                "type": "object",
                                "additionalProperties": { "type": "string" }
                            },
                            "draft": { "type": "object" },
                            "nights": { "type": "integer" },
                            "price_per_night": { "type": "integer" },
                            "total": { "type": "integer" }
                        },
                        "required": ["current_step", "field_errors", "nights", "total"]
                    },
                    "NextResponse": {
                        "type": "object",
                        "properties": {
                            "outcome": {
                                "type": "string",
                                "enum": ["stayed", "advanced", "completed"]
                            },
                            "view": { "$ref": "#/components/schemas/WizardView" },
                            "confirmation": {
                                "type": "object",
                                "properties": {
                                    "confirmation_number": { "type": "string" },
                                    "hotel_name": { "type": "string" },
                                    "total": { "type": "integer" }
                                }
                            }
                        },
                        "required": ["outcome"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "booking module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            open_sessions = SESSIONS.len(),
            "booking module stopped"
        );
        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "booking module is healthy"
}

/// Build the presentation view for a snapshot, pulling the nightly rate from
/// the catalog.
fn view_of(snapshot: &Snapshot) -> Result<WizardView, AppError> {
    let hotel = data::hotel_by_id(&snapshot.hotel_id).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "session references unknown hotel '{}'",
            snapshot.hotel_id
        ))
    })?;
    Ok(WizardView::from_snapshot(snapshot, hotel.price_per_night))
}

/// Open a wizard session for a hotel
async fn create_session(
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionCreated>), AppError> {
    let hotel = data::hotel_by_id(&req.hotel_id)
        .ok_or_else(|| AppError::not_found(format!("hotel '{}' not found", req.hotel_id)))?;

    let session_id = SESSIONS.create(&hotel.id);
    let snapshot = SESSIONS.snapshot(session_id)?;

    Ok((
        StatusCode::CREATED,
        Json(SessionCreated {
            session_id,
            view: view_of(&snapshot)?,
        }),
    ))
}

/// Current view of a session
async fn get_session(Path(id): Path<Uuid>) -> Result<Json<WizardView>, AppError> {
    let snapshot = SESSIONS.snapshot(id)?;
    Ok(Json(view_of(&snapshot)?))
}

/// Abandon a session, discarding its draft
async fn abandon_session(Path(id): Path<Uuid>) -> Result<StatusCode, AppError> {
    SESSIONS.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Write one draft field
async fn update_field(
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFieldRequest>,
) -> Result<Json<WizardView>, AppError> {
    let snapshot = SESSIONS.update_field(id, req.field, &req.value)?;
    Ok(Json(view_of(&snapshot)?))
}

/// Run the current step's gate
async fn go_next(Path(id): Path<Uuid>) -> Result<Json<NextResponse>, AppError> {
    match SESSIONS.go_next(id)? {
        NextResult::Stayed(snapshot) => Ok(Json(NextResponse {
            outcome: NextOutcome::Stayed,
            view: Some(view_of(&snapshot)?),
            confirmation: None,
        })),
        NextResult::Advanced(snapshot) => Ok(Json(NextResponse {
            outcome: NextOutcome::Advanced,
            view: Some(view_of(&snapshot)?),
            confirmation: None,
        })),
        NextResult::Completed { hotel_id, draft } => {
            let hotel = data::hotel_by_id(&hotel_id).ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!(
                    "completed session references unknown hotel '{}'",
                    hotel_id
                ))
            })?;
            Ok(Json(NextResponse {
                outcome: NextOutcome::Completed,
                view: None,
                confirmation: Some(BookingConfirmation::new(hotel, &draft)),
            }))
        }
    }
}

/// Step backward
async fn go_back(Path(id): Path<Uuid>) -> Result<Json<WizardView>, AppError> {
    let snapshot = SESSIONS.go_back(id)?;
    Ok(Json(view_of(&snapshot)?))
}

/// Create a new instance of the booking module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BookingModule::new())
}
