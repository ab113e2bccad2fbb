mod fallback;
mod models;
mod postgres;
mod querier;
mod source;

pub use self::{
    fallback::{fallback_showcases, fallback_status},
    models::{FilterOptions, SyncStatus},
    postgres::{DBPool, migrate, try_init_db_from_env},
    querier::ShowcaseQuery,
    source::ShowcaseSource,
};
