use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::{
    execute_command, execute_query, ApiError, Command, CommandResponse, Query, QueryResponse,
};
use crate::engine::{RandomSource, SessionManager};

/// Потокобезопасная ручка на единственный слот сессии.
///
/// Все команды выполняются под одним мьютексом, поэтому действия игроков
/// сериализуются: две команды никогда не видят промежуточное состояние.
pub struct SharedSessionManager<R: RandomSource> {
    inner: Arc<Mutex<SessionManager<R>>>,
}

impl<R: RandomSource> Clone for SharedSessionManager<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RandomSource> SharedSessionManager<R> {
    pub fn new(manager: SessionManager<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub fn execute(&self, command: Command) -> Result<CommandResponse, ApiError> {
        let mut guard = self.inner.lock();
        execute_command(&mut guard, command)
    }

    pub fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        let guard = self.inner.lock();
        execute_query(&guard, query)
    }

    /// Произвольная работа с менеджером под замком.
    pub fn with<T>(&self, f: impl FnOnce(&mut SessionManager<R>) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}
