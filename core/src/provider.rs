//! Source of raw per-type damage relations

use std::future::Future;

use thiserror::Error;

use crate::types::{Element, TypeRelations};

/// Failure reported by a [`TypeDataProvider`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Unavailable(String),
}

/// Supplies the damage relations of a single type.
///
/// Implementations build a typed [`TypeRelations`] at their own boundary;
/// callers never see the transport's raw documents.
pub trait TypeDataProvider: Send + Sync {
    fn fetch_type_relations(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<TypeRelations, FetchError>> + Send;
}

/// Offline provider backed by the built-in chart
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartProvider;

impl TypeDataProvider for ChartProvider {
    async fn fetch_type_relations(&self, name: &str) -> Result<TypeRelations, FetchError> {
        Element::from_name(name)
            .map(|element| element.relations())
            .ok_or_else(|| FetchError::NotFound(name.to_string()))
    }
}
