// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod event_status;
pub mod events;
