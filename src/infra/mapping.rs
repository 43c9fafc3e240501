use crate::domain::PlayerIndex;

/// Утилита: получить отображаемое имя игрока по индексу места.
///
/// Транспорт может подставить ники из своей сессии, движку они не нужны.
pub trait PlayerNameResolver {
    fn resolve_name(&self, player: PlayerIndex) -> String;
}

/// Простая реализация: "P1", "P2", ... (нумерация с единицы, как в журнале).
pub struct DefaultNameResolver;

impl PlayerNameResolver for DefaultNameResolver {
    fn resolve_name(&self, player: PlayerIndex) -> String {
        format!("P{}", player + 1)
    }
}

/// Имена по местам; для мест без имени откат на "P{n}".
#[derive(Clone, Debug, Default)]
pub struct NamedSeats {
    names: Vec<String>,
}

impl NamedSeats {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl PlayerNameResolver for NamedSeats {
    fn resolve_name(&self, player: PlayerIndex) -> String {
        self.names
            .get(player)
            .cloned()
            .unwrap_or_else(|| DefaultNameResolver.resolve_name(player))
    }
}
