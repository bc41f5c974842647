#![allow(dead_code)]

pub mod mock_fetcher;
pub mod page_server;
pub mod recording_sink;
