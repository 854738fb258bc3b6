//=========================================================================
// Catalog Navigator — Library Root
//
// Client-side catalog core for a virtual-world client: category
// browsing, offer selection and placing several purchased items one at a
// time.
//
// Responsibilities:
// - Expose the session facade (`CatalogSession`) and its builder
// - Expose the `core` subsystems for callers that drive them directly
// - Keep rendering, transport and engine placement mechanics outside
//
// Typical usage:
// ```no_run
// use catalog_navigator::prelude::*;
//
// struct Shop;
// impl CommerceCollaborator for Shop {
//     fn submit(&mut self, _request: CommitRequest) {}
// }
//
// struct Room;
// impl WorldCollaborator for Room {
//     fn enter_placement_mode(&mut self) {}
//     fn exit_placement_mode(&mut self) {}
// }
//
// let mut session = CatalogSessionBuilder::new().build(Shop, Room);
// session.open_catalog(vec![RawCategory::new(1, None, "Catalog").branch()]).ok();
// session.activate_node(CategoryId(1));
// session.pump();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the catalog, purchase and placement subsystems. Most
// callers only need the `CatalogSession` facade.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `session` wires the subsystems to their collaborators and the event
// channel.
//
mod session;

//--- Public Exports ------------------------------------------------------

pub use session::{
    CatalogSession, CatalogSessionBuilder, ConfigError, ConfigKey, SessionConfig, SessionError,
};
