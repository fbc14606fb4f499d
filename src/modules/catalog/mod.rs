pub mod data;
pub mod filters;
pub mod models;

use async_trait::async_trait;
use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use stayfinder_http::error::AppError;
use stayfinder_kernel::{InitCtx, Module};

use models::Hotel;

/// Catalog module exposing the hotel list, search, and detail lookups
pub struct CatalogModule;

impl CatalogModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for CatalogModule {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            hotels = data::search(None).len(),
            "catalog module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(list_hotels))
            .route("/{id}", get(get_hotel))
            .route("/health", get(health_check))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List or search hotels",
                        "tags": ["Catalog"],
                        "parameters": [
                            {
                                "name": "q",
                                "in": "query",
                                "required": false,
                                "description": "Case-insensitive substring matched against hotel name and location",
                                "schema": {
                                    "type": "string"
                                }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Matching hotels (full catalog when no query is given)",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/Hotel"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Get a hotel by id",
                        "tags": ["Catalog"],
                        "parameters": [
                            {
                                "name": "id",
                                "in": "path",
                                "required": true,
                                "schema": {
                                    "type": "string"
                                }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Hotel detail",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Hotel"
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
                "/health": {
                    "get": {
                        "summary": "Catalog health check",
                        "tags": ["Catalog"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "text/plain": {
                                        "schema": {
                                            "type": "string"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Hotel": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "string",
                                "description": "Unique identifier for the hotel"
                            },
                            "name": {
                                "type": "string",
                                "description": "Display name of the hotel"
                            },
                            "location": {
                                "type": "string",
                                "description": "City/region line"
                            },
                            "rating": {
                                "type": "number",
                                "description": "Review score on a 10-point scale"
                            },
                            "review_count": {
                                "type": "integer",
                                "description": "Number of reviews behind the score"
                            },
                            "price_per_night": {
                                "type": "integer",
                                "description": "Nightly rate in whole currency units"
                            },
                            "description": {
                                "type": "string"
                            },
                            "amenities": {
                                "type": "array",
                                "items": {
                                    "type": "string"
                                }
                            }
                        },
                        "required": ["id", "name", "location", "rating", "review_count", "price_per_night"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "catalog module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "catalog module stopped");
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "catalog module is healthy"
}

/// List hotels, optionally narrowed by a search query
async fn list_hotels(Query(params): Query<SearchParams>) -> Json<Vec<Hotel>> {
    let hits = data::search(params.q.as_deref());
    Json(hits.into_iter().cloned().collect())
}

/// Hotel detail lookup
async fn get_hotel(Path(id): Path<String>) -> Result<Json<Hotel>, AppError> {
    data::hotel_by_id(&id)
        .map(|hotel| Json(hotel.clone()))
        .ok_or_else(|| AppError::not_found(format!("hotel '{}' not found", id)))
}

/// Create a new instance of the catalog module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(CatalogModule::new())
}
