//! Browser services: DOM surface, frame loop, storage and HTTP.

pub mod contact;
pub mod document;
pub mod dom_surface;
pub mod frame_loop;
pub mod storage;
