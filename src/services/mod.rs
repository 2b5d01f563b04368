// TabIntent services
// Cross-cutting services that are not record managers.

pub mod settings_engine;
