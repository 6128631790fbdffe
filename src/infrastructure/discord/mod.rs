pub mod role_client;
