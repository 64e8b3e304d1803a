use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{MenuItem, SpicyLevel};
use crate::services::{category_of, recommend, Recommendation};

use super::extract::AppJson;
use super::session::{Selection, SelectionWarning, Session};
use super::AppState;

// Request/Response types

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub name: String,
    pub menu_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryMenusResponse {
    pub name: String,
    pub menus: Vec<MenuResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpicyLevelResponse {
    pub level: SpicyLevel,
    pub label: String,
}

/// A menu as shown to the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuResponse {
    pub name: String,
    pub spicy_level: SpicyLevel,
    pub spicy_label: String,
    /// First category, in catalog order, holding a menu with this name.
    /// When the name appears in several categories this can be one the
    /// user did not select.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchReason {
    NoCategoriesSelected,
    NoMenusMatched,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecommendationResponse {
    Recommended {
        menu: MenuResponse,
        warnings: Vec<SelectionWarning>,
    },
    NoMatch {
        reason: NoMatchReason,
        message: String,
        warnings: Vec<SelectionWarning>,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionRecommendationResponse {
    pub session: Session,
    pub result: RecommendationResponse,
}

impl MenuResponse {
    fn from_item(state: &AppState, item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            spicy_level: item.spicy_level,
            spicy_label: state.labels.label(item.spicy_level).into_owned(),
            category: category_of(&state.catalog, &item.name).map(str::to_string),
        }
    }
}

/// Resolves the selection and picks one menu
async fn recommend_for(state: &AppState, selection: &Selection) -> AppResult<RecommendationResponse> {
    let resolved = selection.resolve(&state.catalog)?;

    let outcome = {
        let mut picker = state.picker.lock().await;
        recommend(
            &state.catalog,
            &resolved.categories,
            &resolved.spicy_levels,
            &mut **picker,
        )
    };

    let response = match outcome {
        Recommendation::Picked(item) => RecommendationResponse::Recommended {
            menu: MenuResponse::from_item(state, item),
            warnings: resolved.warnings,
        },
        Recommendation::NoMatch if resolved.categories.is_empty() => {
            RecommendationResponse::NoMatch {
                reason: NoMatchReason::NoCategoriesSelected,
                message: "Select at least one category".to_string(),
                warnings: resolved.warnings,
            }
        }
        Recommendation::NoMatch => RecommendationResponse::NoMatch {
            reason: NoMatchReason::NoMenusMatched,
            message: "No menu matches the selected options, try different ones".to_string(),
            warnings: resolved.warnings,
        },
    };

    Ok(response)
}

fn log_outcome(request_id: &RequestId, response: &RecommendationResponse) {
    match response {
        RecommendationResponse::Recommended { menu, warnings } => tracing::info!(
            request_id = %request_id,
            menu = %menu.name,
            warnings = warnings.len(),
            "Menu recommended"
        ),
        RecommendationResponse::NoMatch { reason, .. } => tracing::info!(
            request_id = %request_id,
            reason = ?reason,
            "No menu matched"
        ),
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// List categories in catalog order
pub async fn get_categories(State(state): State<AppState>) -> Json<Vec<CategoryResponse>> {
    let categories = state
        .catalog
        .iter()
        .map(|(name, items)| CategoryResponse {
            name: name.to_string(),
            menu_count: items.len(),
        })
        .collect();
    Json(categories)
}

/// List the menus of one category
pub async fn get_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<CategoryMenusResponse>> {
    let items = state
        .catalog
        .items(&name)
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' does not exist", name)))?;

    let menus = items
        .iter()
        .map(|item| MenuResponse::from_item(&state, item))
        .collect();

    Ok(Json(CategoryMenusResponse { name, menus }))
}

/// List spiciness levels with their labels
pub async fn get_spicy_levels(State(state): State<AppState>) -> Json<Vec<SpicyLevelResponse>> {
    let levels = state
        .labels
        .iter()
        .map(|(level, label)| SpicyLevelResponse {
            level,
            label: label.to_string(),
        })
        .collect();
    Json(levels)
}

/// One-shot recommendation for a selection
pub async fn create_recommendation(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    AppJson(selection): AppJson<Selection>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        categories = selection.categories.len(),
        spicy_levels = selection.spicy_levels.len(),
        "Processing recommendation request"
    );

    let response = recommend_for(&state, &selection).await?;
    log_outcome(&request_id, &response);

    Ok(Json(response))
}

/// Fresh session with every category and level selected
pub async fn get_initial_session(State(state): State<AppState>) -> Json<Session> {
    Json(Session::initial(&state.catalog, &state.labels))
}

pub async fn select_all(
    State(state): State<AppState>,
    AppJson(session): AppJson<Session>,
) -> Json<Session> {
    Json(session.select_all(&state.catalog))
}

pub async fn deselect_all(AppJson(session): AppJson<Session>) -> Json<Session> {
    Json(session.deselect_all())
}

/// Recommend action; always moves the session to the recommended phase
pub async fn session_recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    AppJson(session): AppJson<Session>,
) -> AppResult<Json<SessionRecommendationResponse>> {
    let result = recommend_for(&state, &session.selection).await?;
    log_outcome(&request_id, &result);

    Ok(Json(SessionRecommendationResponse {
        session: session.recommended(),
        result,
    }))
}

/// Recommend-again action; only available after a first recommendation
pub async fn session_recommend_again(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    AppJson(session): AppJson<Session>,
) -> AppResult<Json<SessionRecommendationResponse>> {
    session.ensure_can_recommend_again()?;

    let result = recommend_for(&state, &session.selection).await?;
    log_outcome(&request_id, &result);

    Ok(Json(SessionRecommendationResponse { session, result }))
}
