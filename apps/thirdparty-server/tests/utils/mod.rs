pub mod api_client;
pub mod context;
pub mod mock_server;
