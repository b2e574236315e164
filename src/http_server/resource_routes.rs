//! Resource HTTP Routes
//!
//! One generic route set per schema:
//!
//! - `GET|POST /api/{primaries}`, `GET|PUT|DELETE /api/{primaries}/:id`
//! - `GET|POST /api/{secondaries}`, `GET|PUT|DELETE /api/{secondaries}/:id`
//! - `GET /api/{dependents}`
//! - `GET /api/{dependents}/by-{primary}/:actor_id`
//! - `GET /api/{dependents}/by-{secondary}/:actor_id`
//! - `POST /api/{dependents}/by-{secondary}/:actor_id/to-{primary}/:primary_id`
//! - `PUT|DELETE /api/{dependents}/:id`
//!
//! Parameters sharing a path position share a name, as the router
//! requires.

use std::sync::{Arc, RwLock};

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post, put},
    Json, Router,
};

use super::body::LenientJson;
use super::failure::GatedFailure;
use crate::engine::{
    ActorRole, EngineError, EngineResult, PrimaryRole, ResourceEngine, SecondaryRole,
};
use crate::negotiation::FailureGate;
use crate::schema::{ActorRecord, DependentRecord, Record, Schema};
use crate::store::ActorSide;

// ==================
// Shared State
// ==================

/// Engine plus the negotiation policy, shared across handlers
pub struct ResourceState<S: Schema> {
    engine: RwLock<ResourceEngine<S>>,
    gate: FailureGate,
}

impl<S: Schema> ResourceState<S> {
    pub fn new(engine: ResourceEngine<S>, gate: FailureGate) -> Self {
        Self {
            engine: RwLock::new(engine),
            gate,
        }
    }

    fn read<T>(&self, op: impl FnOnce(&ResourceEngine<S>) -> EngineResult<T>) -> EngineResult<T> {
        let engine = self
            .engine
            .read()
            .map_err(|_| EngineError::Internal("Store lock poisoned".to_string()))?;
        op(&engine)
    }

    /// Run a mutation with exclusive access to the store
    fn write<T>(
        &self,
        op: impl FnOnce(&mut ResourceEngine<S>) -> EngineResult<T>,
    ) -> EngineResult<T> {
        let mut engine = self
            .engine
            .write()
            .map_err(|_| EngineError::Internal("Store lock poisoned".to_string()))?;
        op(&mut engine)
    }

    fn reject(&self, error: EngineError, headers: &HeaderMap) -> GatedFailure {
        GatedFailure::from_headers(error, self.gate, headers)
    }
}

type SharedState<S> = Arc<ResourceState<S>>;
type Fields<S, R> = <<R as ActorRole<S>>::Record as ActorRecord>::Fields;
type Dependent<S> = <S as Schema>::Dependent;

// ==================
// Resource Routes
// ==================

/// Create the resource routes for schema `S`
pub fn resource_routes<S: Schema>(state: Arc<ResourceState<S>>) -> Router {
    let primaries = format!("/api/{}", <S::Primary as Record>::COLLECTION);
    let secondaries = format!("/api/{}", <S::Secondary as Record>::COLLECTION);
    let dependents = format!("/api/{}", <Dependent<S> as Record>::COLLECTION);
    let primary_segment = <S::Primary as Record>::SEGMENT;
    let secondary_segment = <S::Secondary as Record>::SEGMENT;

    Router::new()
        // Primary actors
        .route(
            &primaries,
            get(list_actors::<S, PrimaryRole>).post(create_actor::<S, PrimaryRole>),
        )
        .route(
            &format!("{}/:id", primaries),
            get(read_actor::<S, PrimaryRole>)
                .put(update_actor::<S, PrimaryRole>)
                .delete(delete_actor::<S, PrimaryRole>),
        )
        // Secondary actors
        .route(
            &secondaries,
            get(list_actors::<S, SecondaryRole>).post(create_actor::<S, SecondaryRole>),
        )
        .route(
            &format!("{}/:id", secondaries),
            get(read_actor::<S, SecondaryRole>)
                .put(update_actor::<S, SecondaryRole>)
                .delete(delete_actor::<S, SecondaryRole>),
        )
        // Dependent records
        .route(&dependents, get(list_dependents::<S>))
        .route(
            &format!("{}/by-{}/:actor_id", dependents, primary_segment),
            get(dependents_by_primary::<S>),
        )
        .route(
            &format!("{}/by-{}/:actor_id", dependents, secondary_segment),
            get(dependents_by_secondary::<S>),
        )
        .route(
            &format!(
                "{}/by-{}/:actor_id/to-{}/:primary_id",
                dependents, secondary_segment, primary_segment
            ),
            post(create_dependent::<S>),
        )
        .route(
            &format!("{}/:id", dependents),
            put(update_dependent::<S>).delete(delete_dependent::<S>),
        )
        .with_state(state)
}

// ==================
// Actor Handlers
// ==================

async fn list_actors<S: Schema, R: ActorRole<S>>(
    State(state): State<SharedState<S>>,
    headers: HeaderMap,
) -> Result<Json<Vec<R::Record>>, GatedFailure> {
    state
        .read(|engine| Ok(engine.list_actors::<R>()))
        .map(Json)
        .map_err(|err| state.reject(err, &headers))
}

async fn create_actor<S: Schema, R: ActorRole<S>>(
    State(state): State<SharedState<S>>,
    headers: HeaderMap,
    LenientJson(fields): LenientJson<Fields<S, R>>,
) -> Result<Json<R::Record>, GatedFailure> {
    state
        .write(|engine| Ok(engine.create_actor::<R>(fields)))
        .map(Json)
        .map_err(|err| state.reject(err, &headers))
}

async fn read_actor<S: Schema, R: ActorRole<S>>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<R::Record>, GatedFailure> {
    state
        .read(|engine| engine.read_actor::<R>(&id))
        .map(Json)
        .map_err(|err| state.reject(err, &headers))
}

async fn update_actor<S: Schema, R: ActorRole<S>>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    LenientJson(fields): LenientJson<Fields<S, R>>,
) -> Result<Json<R::Record>, GatedFailure> {
    state
        .write(|engine| engine.update_actor::<R>(&id, fields))
        .map(Json)
        .map_err(|err| state.reject(err, &headers))
}

async fn delete_actor<S: Schema, R: ActorRole<S>>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<String, GatedFailure> {
    state
        .write(|engine| engine.delete_actor::<R>(&id))
        .map_err(|err| state.reject(err, &headers))
}

// ==================
// Dependent Handlers
// ==================

async fn list_dependents<S: Schema>(
    State(state): State<SharedState<S>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Dependent<S>>>, GatedFailure> {
    state
        .read(|engine| Ok(engine.list_dependents()))
        .map(Json)
        .map_err(|err| state.reject(err, &headers))
}

async fn dependents_by_primary<S: Schema>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<Dependent<S>>>, GatedFailure> {
    state
        .read(|engine| Ok(engine.dependents_by(ActorSide::Primary, &id)))
        .map(Json)
        .map_err(|err| state.reject(err, &headers))
}

async fn dependents_by_secondary<S: Schema>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<Dependent<S>>>, GatedFailure> {
    state
        .read(|engine| Ok(engine.dependents_by(ActorSide::Secondary, &id)))
        .map(Json)
        .map_err(|err| state.reject(err, &headers))
}

async fn create_dependent<S: Schema>(
    State(state): State<SharedState<S>>,
    Path((secondary_id, primary_id)): Path<(String, String)>,
    headers: HeaderMap,
    LenientJson(draft): LenientJson<<Dependent<S> as DependentRecord>::Draft>,
) -> Result<Json<Dependent<S>>, GatedFailure> {
    state
        .write(|engine| engine.create_dependent(&primary_id, &secondary_id, draft))
        .map(Json)
        .map_err(|err| state.reject(err, &headers))
}

async fn update_dependent<S: Schema>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    LenientJson(patch): LenientJson<<Dependent<S> as DependentRecord>::Patch>,
) -> Result<Json<Dependent<S>>, GatedFailure> {
    state
        .write(|engine| engine.update_dependent(&id, patch))
        .map(Json)
        .map_err(|err| state.reject(err, &headers))
}

async fn delete_dependent<S: Schema>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<String, GatedFailure> {
    state
        .write(|engine| engine.delete_dependent(&id))
        .map_err(|err| state.reject(err, &headers))
}
