use axum::{Json, extract::State};
use std::sync::Arc;

use crate::aggregator::Aggregator;

use super::models::{AutorRequest, AutorResponse, ObraRequest, ObraResponse};

pub async fn autor_handler(
    State(aggregator): State<Arc<Aggregator>>,
    Json(request): Json<AutorRequest>,
) -> Json<AutorResponse> {
    log::info!("author lookup: {:?}", request.nome);
    let info = aggregator.author_info(&request.nome).await;
    Json(info.into())
}

pub async fn obra_handler(
    State(aggregator): State<Arc<Aggregator>>,
    Json(request): Json<ObraRequest>,
) -> Json<ObraResponse> {
    log::info!("work lookup: {:?}", request.titulo);
    let lookup = aggregator
        .work_info(&request.titulo, request.autor.as_deref())
        .await;
    Json(lookup.into())
}
