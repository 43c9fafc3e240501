use tracing_subscriber::{fmt, EnvFilter};

/// Поднять fmt-подписчик для бинарников.
///
/// `RUST_LOG` имеет приоритет; без него уровень `debug` при `verbose`
/// и `info` иначе. Повторный вызов ничего не ломает.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "warn,lexio_engine={default_level},lexio_sim_cli={default_level}"
            ))
        });

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
