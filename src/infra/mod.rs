//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - настройка логирования для бинарников;
//! - общий (многопоточный) доступ к слоту сессии;
//! - отображаемые имена игроков.

pub mod logging;
pub mod mapping;
pub mod rng;
pub mod shared;

pub use logging::init_tracing;
pub use mapping::*;
pub use rng::*;
pub use shared::SharedSessionManager;
