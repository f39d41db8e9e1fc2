mod mock_user_client;

pub use mock_user_client::MockUserClient;
