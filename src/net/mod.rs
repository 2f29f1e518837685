//! Network layer: the authenticated fetch wrapper, the token codec, REST
//! clients for the admin endpoints, and the realtime notification feed.

pub mod api;
pub mod attendance;
pub mod employees;
pub mod feed;
pub mod profile;
pub mod token;
pub mod types;
