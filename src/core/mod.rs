//=========================================================================
// Core Systems
//
// Catalog navigation, offer selection and multi-place logic, independent
// of any view or transport.
//
// Responsibilities:
// - Model the category tree and its single active path (`catalog`)
// - Track offer selection and purchase options (`purchase`)
// - Run the multi-place state machine (`placement`)
// - Define the collaborator contract and event intake (`bridge`)
// - Queue state changes for presentation (`notification`)
//
// Notes:
// Every type here is driven synchronously by one owner, normally a
// `CatalogSession`. Collaborator outcomes reach the core only through
// the bridge channel.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod bridge;
pub mod catalog;
pub mod id_set;
pub mod notification;
pub mod placement;
pub mod purchase;
