//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{QuestionCommand, QuestionQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub questions: Arc<dyn QuestionQuery>,
    pub commands: Arc<dyn QuestionCommand>,
}

impl HttpState {
    /// Bundle the read and write ports.
    pub fn new(questions: Arc<dyn QuestionQuery>, commands: Arc<dyn QuestionCommand>) -> Self {
        Self {
            questions,
            commands,
        }
    }

    /// State backed by one service implementing both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: QuestionQuery + QuestionCommand + 'static,
    {
        Self {
            questions: service.clone(),
            commands: service,
        }
    }
}
