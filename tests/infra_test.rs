//! Интеграционные тесты для инфраструктурного слоя (crate::infra).

use lexio_engine::api::{Command, CommandResponse, Query, QueryResponse};
use lexio_engine::engine::SessionManager;
use lexio_engine::infra::{
    init_tracing, DefaultNameResolver, DeterministicRng, PlayerNameResolver,
    SharedSessionManager, SystemRng,
};

/// Повторная инициализация логирования не паникует.
#[test]
fn init_tracing_is_idempotent() {
    init_tracing(false);
    init_tracing(true);
}

#[test]
fn default_names_are_one_based() {
    assert_eq!(DefaultNameResolver.resolve_name(0), "P1");
    assert_eq!(DefaultNameResolver.resolve_name(4), "P5");
}

/// Клоны ручки смотрят в один и тот же слот.
#[test]
fn shared_manager_clones_share_state() {
    let a = SharedSessionManager::new(SessionManager::with_default_rules(
        DeterministicRng::from_seed(4),
    ));
    let b = a.clone();

    assert!(matches!(
        a.execute(Command::start(3)),
        Ok(CommandResponse::SessionStarted(_))
    ));
    assert_eq!(
        b.query(Query::GetStatus).unwrap(),
        QueryResponse::Status {
            active: true,
            finished: false
        }
    );

    b.execute(Command::ResetSession).unwrap();
    assert!(!a.with(|m| m.is_active()));
}

#[test]
fn system_rng_session_starts() {
    let shared = SharedSessionManager::new(SessionManager::with_default_rules(SystemRng));
    let resp = shared.execute(Command::start(5)).unwrap();
    let snapshot = resp.snapshot().unwrap();
    assert_eq!(snapshot.players.len(), 5);
    assert!(snapshot.players.iter().all(|p| p.tile_count == 12));
}
